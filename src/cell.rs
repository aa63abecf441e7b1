use core::fmt;

pub const EMPTY_CHAR: char = '.';
pub const BLOCKED_CHAR: char = '#';
pub const INVALID_CHAR: char = '?';
pub const PATH_CHAR: char = '@';

/// State of a single position on a [Grid](crate::Grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Blocked,
    /// Any unrecognised map character. Shown as `?` and never entered.
    Invalid,
    /// Start, goal and the cells of a found route.
    Path,
}

impl CellState {
    /// Classifies a map character. Only the search marks cells as [CellState::Path],
    /// so this never returns it.
    pub fn from_char(c: char) -> CellState {
        match c {
            EMPTY_CHAR => CellState::Empty,
            BLOCKED_CHAR => CellState::Blocked,
            _ => CellState::Invalid,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => EMPTY_CHAR,
            CellState::Blocked => BLOCKED_CHAR,
            CellState::Invalid => INVALID_CHAR,
            CellState::Path => PATH_CHAR,
        }
    }

    /// Whether the search may expand into a cell in this state.
    pub fn is_passable(self) -> bool {
        self == CellState::Empty
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
