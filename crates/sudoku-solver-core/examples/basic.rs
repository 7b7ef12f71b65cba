//! Basic example of using the Sudoku solving engine

use sudoku_solver_core::{Grid, Position, Solver};

fn main() {
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let mut grid = Grid::from_string(puzzle_string).expect("valid puzzle literal");

    println!("Puzzle:");
    println!("{}", grid);

    // Show some stats
    println!("Given cells: {}", grid.given_count());
    println!("Empty cells: {}", grid.empty_count());

    let solver = Solver::new();

    // Check uniqueness
    let solutions = solver.count_solutions(&grid, 2);
    println!("Number of solutions (up to 2): {}\n", solutions);

    // Solve it in place
    println!("Solving...\n");
    if solver.solve(&mut grid) {
        println!("Solution:");
        println!("{}", grid);
    } else {
        println!("No solution exists");
    }

    // A puzzle with contradictory givens comes back untouched
    let mut broken = Grid::from_string(puzzle_string).expect("valid puzzle literal");
    broken.set(Position::new(0, 2), Some(5));
    println!("\nDuplicating the 5 in the first row...");
    if !solver.solve(&mut broken) {
        println!("No solution exists");
    }
}
