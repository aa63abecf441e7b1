//! # grid_bfs
//!
//! Shortest paths on small character-map grids using
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search).
//! Movement is 8-connected with unit cost for every step, so the path found is
//! optimal in the number of steps. Maps are given as rows of characters where
//! `.` is empty and `#` is blocked; any other character is kept for display but
//! is never entered.
//!
//! A successful search marks the route on the [Grid] itself, which can then be
//! rendered back to text:
//!
//! ```
//! use grid_bfs::{GridSolver, Grid, PathFinder};
//! use grid_util::point::Point;
//!
//! let rows = ["...", ".#.", "..."];
//! let mut grid = Grid::new(&rows, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert!(PathFinder::new().search(&mut grid));
//! assert_eq!(grid.path_cells(), 4);
//! ```
//!
//! [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! are available through [Components] to check reachability without searching.
pub mod cell;
pub mod components;
pub mod error;
pub mod map_grid;
pub mod search_context;
pub mod solver;

pub use cell::CellState;
pub use components::Components;
pub use error::GridError;
pub use map_grid::Grid;
pub use solver::{bfs::PathFinder, GridSolver};

/// Default upper bound on the number of rows (and columns) of a [Grid]. Search
/// structures are sized to the actual grid; this only limits what
/// [Grid::new] accepts. Use [Grid::with_max_dimension] for larger maps.
pub const MAX_GRID_DIMENSION: usize = 32;

/// Inline capacity for neighbourhood buffers, one slot per Moore neighbour.
pub(crate) const N_SMALLVEC_SIZE: usize = 8;
