use crate::cell::CellState;
use crate::components::Components;
use crate::error::GridError;
use crate::MAX_GRID_DIMENSION;
use core::fmt;
use grid_util::point::Point;
use log::debug;

/// A square map of [CellState]s with a designated start and goal.
///
/// The start and goal are marked [CellState::Path] on construction. Other cells
/// only change through a successful search, see [GridSolver::search](crate::GridSolver::search).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    dimension: usize,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Builds a grid from map rows, allowing at most [MAX_GRID_DIMENSION] rows.
    pub fn new<S: AsRef<str>>(rows: &[S], start: Point, goal: Point) -> Result<Grid, GridError> {
        Grid::with_max_dimension(rows, start, goal, MAX_GRID_DIMENSION)
    }

    /// Builds a grid from map rows. The number of rows determines the dimension
    /// of the grid and every row must have exactly that many characters.
    pub fn with_max_dimension<S: AsRef<str>>(
        rows: &[S],
        start: Point,
        goal: Point,
        max_dimension: usize,
    ) -> Result<Grid, GridError> {
        let dimension = rows.len();
        if dimension > max_dimension {
            return Err(GridError::TooLarge {
                dimension,
                max: max_dimension,
            });
        }
        if !point_in_square(&start, dimension) {
            return Err(GridError::StartOutOfBounds(start));
        }
        if !point_in_square(&goal, dimension) {
            return Err(GridError::GoalOutOfBounds(goal));
        }
        let rows = rows
            .iter()
            .map(|row| row.as_ref().chars().collect::<Vec<char>>())
            .collect::<Vec<_>>();
        if let Some((row, chars)) = rows
            .iter()
            .enumerate()
            .find(|(_, chars)| chars.len() != dimension)
        {
            return Err(GridError::RaggedRow {
                row,
                len: chars.len(),
                expected: dimension,
            });
        }
        let source_state = |p: &Point| CellState::from_char(rows[p.y as usize][p.x as usize]);
        if source_state(&start) == CellState::Blocked {
            return Err(GridError::StartBlocked(start));
        }
        if source_state(&goal) == CellState::Blocked {
            return Err(GridError::GoalBlocked(goal));
        }

        let mut cells = Vec::with_capacity(dimension * dimension);
        for (y, chars) in rows.iter().enumerate() {
            for (x, &c) in chars.iter().enumerate() {
                let p = Point::new(x as i32, y as i32);
                if p == start || p == goal {
                    cells.push(CellState::Path);
                } else {
                    cells.push(CellState::from_char(c));
                }
            }
        }
        debug!(
            "Built {}x{} grid with start {} and goal {}",
            dimension, dimension, start, goal
        );
        Ok(Grid {
            cells,
            dimension,
            start,
            goal,
        })
    }

    /// Builds a grid from newline-separated map text.
    pub fn parse(text: &str, start: Point, goal: Point) -> Result<Grid, GridError> {
        let rows = text.lines().collect::<Vec<&str>>();
        Grid::new(&rows, start, goal)
    }

    /// Number of rows, which equals the number of columns.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point_in_square(point, self.dimension)
    }

    fn get_ix_point(&self, point: &Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| point.y as usize * self.dimension + point.x as usize)
    }

    /// The state of the cell at `point`, or [None] outside the grid.
    pub fn cell_state(&self, point: &Point) -> Option<CellState> {
        self.get_ix_point(point).map(|ix| self.cells[ix])
    }

    pub fn is_blocked(&self, point: &Point) -> bool {
        self.cell_state(point) == Some(CellState::Blocked)
    }

    /// Whether a route may use `point`: the endpoints, or any empty cell.
    pub fn is_traversable(&self, point: &Point) -> bool {
        *point == self.start
            || *point == self.goal
            || self.cell_state(point).is_some_and(CellState::is_passable)
    }

    pub(crate) fn mark_path(&mut self, point: &Point) {
        debug_assert!(self.in_bounds(point));
        if let Some(ix) = self.get_ix_point(point) {
            self.cells[ix] = CellState::Path;
        }
    }

    /// Resets route cells back to [CellState::Empty], leaving the grid as it was
    /// right after construction.
    pub fn clear_path(&mut self) {
        let (start, goal, dimension) = (self.start, self.goal, self.dimension);
        for (ix, cell) in self.cells.iter_mut().enumerate() {
            let p = Point::new((ix % dimension) as i32, (ix / dimension) as i32);
            if *cell == CellState::Path && p != start && p != goal {
                *cell = CellState::Empty;
            }
        }
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Number of cells marked as path, endpoints included.
    pub fn path_cells(&self) -> usize {
        self.count(CellState::Path)
    }

    /// Checks whether the goal lies in the same connected component as the start.
    pub fn reachable(&self) -> bool {
        Components::generate(self).reachable(&self.start, &self.goal)
    }

    /// Renders the grid row by row, each row terminated by a newline.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.cells.len() + self.dimension);
        for row in self.cells.chunks(self.dimension.max(1)) {
            text.extend(row.iter().map(|c| c.symbol()));
            text.push('\n');
        }
        text
    }
}

fn point_in_square(point: &Point, dimension: usize) -> bool {
    point.x >= 0
        && point.y >= 0
        && (point.x as usize) < dimension
        && (point.y as usize) < dimension
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
