//! Interactive game loop: a human against the search

use std::io::{self, BufRead, Write};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    board::{Action, Board, Mark},
    error::Error,
    search,
};

/// Whose move it is in the live game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Ai,
}

impl Turn {
    /// The side that moves next
    pub fn next(self) -> Turn {
        match self {
            Turn::Human => Turn::Ai,
            Turn::Ai => Turn::Human,
        }
    }
}

/// Configuration for an interactive game.
///
/// The human always holds O, playing toward -1, and opens the game; the
/// search holds X, playing toward +1.
///
/// # Examples
///
/// ```
/// use oxo::play::GameConfig;
///
/// let config = GameConfig::new().with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Seed for the AI's tie-breaking; `None` draws one from entropy
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Set the random seed for reproducible AI move selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Parse a (row, column) pair from two lines of input.
///
/// # Errors
///
/// Returns [`Error::InvalidCoordinate`] when either line is not a number,
/// or [`Error::OutOfRange`] when a parsed coordinate falls outside [0, 2].
pub fn parse_action(row_input: &str, col_input: &str) -> crate::Result<Action> {
    let row = parse_coordinate(row_input)?;
    let col = parse_coordinate(col_input)?;
    Ok(Action::new(row, col))
}

fn parse_coordinate(input: &str) -> crate::Result<usize> {
    let trimmed = input.trim();
    let value: usize = trimmed.parse().map_err(|_| Error::InvalidCoordinate {
        input: trimmed.to_string(),
    })?;

    if value > 2 {
        return Err(Error::OutOfRange { value });
    }

    Ok(value)
}

/// Check that an action refers to a blank cell.
///
/// # Errors
///
/// Returns [`Error::Occupied`] when the cell already holds a mark.
pub fn validate_action(board: &Board, action: Action) -> crate::Result<Action> {
    if board.is_blank(action) {
        Ok(action)
    } else {
        Err(Error::Occupied {
            row: action.row,
            col: action.col,
        })
    }
}

/// Collect a validated action from the human player.
///
/// Prompts for a row and a column, then re-prompts in a loop until the
/// input names a blank cell with both coordinates in range. Only genuine
/// I/O failures escalate; a rejected entry costs one more round of the
/// loop, never a recursive call.
pub fn prompt_action<R, W>(board: &Board, input: &mut R, output: &mut W) -> crate::Result<Action>
where
    R: BufRead,
    W: Write,
{
    loop {
        let row_line = read_prompted_line(&mut *input, &mut *output, "Enter a row [0-2]: ")?;
        let col_line = read_prompted_line(&mut *input, &mut *output, "Enter a column [0-2]: ")?;

        match parse_action(&row_line, &col_line).and_then(|action| validate_action(board, action))
        {
            Ok(action) => {
                writeln!(output)?;
                return Ok(action);
            }
            Err(_) => writeln!(output, "Invalid row, column pair entered.")?,
        }
    }
}

fn read_prompted_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> crate::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(Error::Io {
            operation: "read player input".to_string(),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed"),
        });
    }

    Ok(line)
}

/// Play a full game on the terminal.
pub fn run(config: &GameConfig) -> crate::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    play_game(config, &mut input, &mut output)
}

/// Play a full game over arbitrary input and output streams.
///
/// The loop prints the board, collects an action from the side on turn
/// (the search announces itself with `AI turn...`), applies it to the
/// single authoritative board, and hands the turn over. On reaching a
/// terminal position it prints the final board and the winner.
pub fn play_game<R, W>(config: &GameConfig, input: &mut R, output: &mut W) -> crate::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    };

    let mut board = Board::new(Mark::O, Mark::X);
    let mut turn = Turn::Human;

    while !board.is_terminal() {
        writeln!(output, "{board}")?;

        let (action, mark) = match turn {
            Turn::Human => (
                prompt_action(&board, &mut *input, &mut *output)?,
                board.min_mark(),
            ),
            Turn::Ai => {
                writeln!(output, "AI turn...")?;
                let action = search::best_move(&board, board.max_mark(), &mut rng);
                (action, board.max_mark())
            }
        };

        board.apply(action, mark);
        turn = turn.next();
    }

    writeln!(output, "{board}")?;
    writeln!(output, "Game over.")?;
    writeln!(output, "Winner: {}.", board.winner_label())?;
    Ok(())
}
