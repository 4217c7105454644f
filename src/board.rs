//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the 3x3 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Blank,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Blank => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// A (row, column) coordinate on the grid, each component in [0, 2]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    /// Create an action from grid coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate exceeds 2. Validated input never does,
    /// so an off-grid action is a bug in the caller.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < 3 && col < 3,
            "coordinates ({row}, {col}) are off the grid"
        );
        Action { row, col }
    }

    fn from_index(index: usize) -> Self {
        Action {
            row: index / 3,
            col: index % 3,
        }
    }

    fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a position, derived from the grid and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Tie,
    Ongoing,
}

/// Complete game state: the grid plus which mark plays toward which end of
/// the score range.
///
/// This type implements `Copy` since it's only a few bytes; the search
/// produces successor states freely and each recursive call owns its copies
/// outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
    min_mark: Mark,
    max_mark: Mark,
}

impl Board {
    /// Create an all-blank board.
    ///
    /// `min_mark` belongs to the player whose wins score -1, `max_mark` to
    /// the player whose wins score +1.
    ///
    /// # Panics
    ///
    /// Panics if both players are given the same mark.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::board::{Board, Mark};
    ///
    /// let board = Board::new(Mark::O, Mark::X);
    /// assert_eq!(board.legal_actions().len(), 9);
    /// ```
    pub fn new(min_mark: Mark, max_mark: Mark) -> Self {
        assert_ne!(min_mark, max_mark, "players must use distinct marks");
        Board {
            cells: [Cell::Blank; 9],
            min_mark,
            max_mark,
        }
    }

    /// The mark whose wins score -1
    pub fn min_mark(&self) -> Mark {
        self.min_mark
    }

    /// The mark whose wins score +1
    pub fn max_mark(&self) -> Mark {
        self.max_mark
    }

    /// Get the cell at a coordinate
    pub fn cell(&self, action: Action) -> Cell {
        self.cells[action.index()]
    }

    /// Check if the cell at a coordinate is blank
    pub fn is_blank(&self, action: Action) -> bool {
        self.cell(action) == Cell::Blank
    }

    /// All blank-cell coordinates, in row-major order.
    ///
    /// The order is fixed: move selection breaks ties among equally strong
    /// candidates, and a stable enumeration keeps that choice reproducible
    /// under a fixed seed.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Blank)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Place `mark` on a blank cell, returning the successor state.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied. Actions come from
    /// [`legal_actions`](Self::legal_actions) or validated input, so an
    /// occupied target is a bug in the caller.
    #[must_use = "applying returns a new board; the original is unchanged"]
    pub fn applying(&self, action: Action, mark: Mark) -> Board {
        let mut next = *self;
        next.apply(action, mark);
        next
    }

    /// In-place variant of [`applying`](Self::applying) for the single
    /// authoritative copy owned by the game loop.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied.
    pub fn apply(&mut self, action: Action, mark: Mark) {
        assert!(self.is_blank(action), "cell {action} is already occupied");
        self.cells[action.index()] = mark.to_cell();
    }

    /// Check if a mark has three in a line
    pub fn has_won(&self, mark: Mark) -> bool {
        lines::has_won(&self.cells, mark)
    }

    /// Check if the grid is full with no winner
    pub fn is_tie(&self) -> bool {
        !self.cells.contains(&Cell::Blank)
            && !self.has_won(self.min_mark)
            && !self.has_won(self.max_mark)
    }

    /// Check if the game is over (win or tie)
    pub fn is_terminal(&self) -> bool {
        self.has_won(self.min_mark) || self.has_won(self.max_mark) || self.is_tie()
    }

    /// Derive the outcome of the position
    pub fn outcome(&self) -> Outcome {
        if self.has_won(self.min_mark) {
            Outcome::Win(self.min_mark)
        } else if self.has_won(self.max_mark) {
            Outcome::Win(self.max_mark)
        } else if self.is_tie() {
            Outcome::Tie
        } else {
            Outcome::Ongoing
        }
    }

    /// Score of the position: -1 if the minimizing mark has won, +1 if the
    /// maximizing mark has won, 0 otherwise.
    ///
    /// Ties and in-progress positions both score 0. Callers that need to
    /// tell them apart match on [`outcome`](Self::outcome) instead; the
    /// search reads this only after [`is_terminal`](Self::is_terminal)
    /// reports true.
    pub fn value(&self) -> i32 {
        match self.outcome() {
            Outcome::Win(mark) if mark == self.max_mark => 1,
            Outcome::Win(_) => -1,
            Outcome::Tie | Outcome::Ongoing => 0,
        }
    }

    /// Label for the end-of-game summary: the winning mark's symbol, "Tie",
    /// or "" while the game is still in progress.
    pub fn winner_label(&self) -> &'static str {
        match self.outcome() {
            Outcome::Win(mark) => mark.as_str(),
            Outcome::Tie => "Tie",
            Outcome::Ongoing => "",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(f, "-------")?;
            writeln!(
                f,
                "|{}|{}|{}|",
                self.cells[row * 3].to_char(),
                self.cells[row * 3 + 1].to_char(),
                self.cells[row * 3 + 2].to_char()
            )?;
        }
        writeln!(f, "-------")
    }
}
