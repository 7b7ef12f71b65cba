use crate::Grid;

/// Backtracking Sudoku solver.
///
/// Stateless; every call carries its search state on the call stack, so
/// separate solves over separate grids are independent.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle in place.
    ///
    /// Returns `true` with the grid fully filled on success. Returns `false`
    /// when no assignment of the empty cells satisfies the given digits; by
    /// then every speculative placement has been undone, so the grid comes
    /// back exactly as it went in. Given digits are never overwritten.
    ///
    /// The search is deterministic: it always fills the first empty cell in
    /// row-major order and tries digits in ascending order, so a puzzle with
    /// several solutions always yields the same one.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        let Some(pos) = grid.first_empty() else {
            return true;
        };

        for digit in 1..=9 {
            if grid.is_placement_valid(pos, digit) {
                grid.set(pos, Some(digit));
                if self.solve(grid) {
                    return true;
                }
                grid.set(pos, None);
            }
        }

        false
    }

    /// Solve without touching the caller's grid, returning the solution.
    pub fn solution(&self, grid: &Grid) -> Option<Grid> {
        let mut working = *grid;
        if self.solve(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Count solutions, stopping once `limit` is reached.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = *grid;
        let mut count = 0;
        self.count_recursive(&mut working, &mut count, limit);
        count
    }

    /// Check if the puzzle has exactly one solution.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }

    fn count_recursive(&self, grid: &mut Grid, count: &mut usize, limit: usize) {
        if *count >= limit {
            return;
        }

        let Some(pos) = grid.first_empty() else {
            *count += 1;
            return;
        };

        for digit in 1..=9 {
            if grid.is_placement_valid(pos, digit) {
                grid.set(pos, Some(digit));
                self.count_recursive(grid, count, limit);
                grid.set(pos, None);
                if *count >= limit {
                    return;
                }
            }
        }
    }
}
