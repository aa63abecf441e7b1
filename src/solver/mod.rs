use crate::map_grid::Grid;
use grid_util::point::Point;
use log::info;

pub mod bfs;

pub trait GridSolver {
    /// Computes a path from the grid's start to its goal, both included, without
    /// modifying the grid. [None] means the goal cannot be reached.
    fn find_path(&self, grid: &Grid) -> Option<Vec<Point>>;

    /// Searches for a path and, if one exists, marks every cell on it as
    /// [CellState::Path](crate::CellState::Path). A failed search leaves the grid untouched.
    fn search(&self, grid: &mut Grid) -> bool {
        let (start, goal) = (grid.start(), grid.goal());
        match self.find_path(grid) {
            Some(path) => {
                // The start is already marked on construction.
                for point in path.iter().rev().take_while(|&&p| p != start) {
                    grid.mark_path(point);
                }
                info!(
                    "Path of {} steps found from {} to {}",
                    path.len() - 1,
                    start,
                    goal
                );
                true
            }
            None => {
                info!("{} is not reachable from {}", goal, start);
                false
            }
        }
    }

    /// Number of steps on the path found, if any.
    fn path_length(&self, grid: &Grid) -> Option<usize> {
        self.find_path(grid).map(|path| path.len() - 1)
    }
}
