//! Exhaustive minimax search with alpha-beta pruning

use rand::{Rng, prelude::IndexedRandom};

use crate::board::{Action, Board, Mark};

/// Which end of the score range the side to move drives toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Maximizing,
    Minimizing,
}

impl Side {
    /// The side that replies to this one
    pub fn opponent(self) -> Side {
        match self {
            Side::Maximizing => Side::Minimizing,
            Side::Minimizing => Side::Maximizing,
        }
    }

    fn mark(self, board: &Board) -> Mark {
        match self {
            Side::Maximizing => board.max_mark(),
            Side::Minimizing => board.min_mark(),
        }
    }
}

/// Evaluate a position with `side` to move, searching to terminal depth.
///
/// Terminal positions score immediately via [`Board::value`]; the game tree
/// is finite, so no depth cutoff is needed. Alpha-beta pruning skips
/// branches that cannot affect the result, which stays identical to an
/// unpruned minimax. Scores are confined to {-1, 0, 1}, so `i32::MIN` and
/// `i32::MAX` stand in for the unbounded default bounds.
pub fn minimax(board: &Board, mut alpha: i32, mut beta: i32, side: Side) -> i32 {
    if board.is_terminal() {
        return board.value();
    }

    let mark = side.mark(board);
    match side {
        Side::Maximizing => {
            let mut value = i32::MIN;
            for action in board.legal_actions() {
                let child = board.applying(action, mark);
                value = value.max(minimax(&child, alpha, beta, Side::Minimizing));
                if value >= beta {
                    return value;
                }
                alpha = alpha.max(value);
            }
            value
        }
        Side::Minimizing => {
            let mut value = i32::MAX;
            for action in board.legal_actions() {
                let child = board.applying(action, mark);
                value = value.min(minimax(&child, alpha, beta, Side::Maximizing));
                if value <= alpha {
                    return value;
                }
                beta = beta.min(value);
            }
            value
        }
    }
}

/// Pick the strongest action for `mark`, breaking ties uniformly at random.
///
/// Each legal action is scored by handing the resulting position to the
/// opposing side's search from full bounds. Every action achieving the best
/// score is collected, and one is drawn through the supplied rng; a seeded
/// generator makes the selection reproducible.
///
/// # Panics
///
/// Panics if the position has no legal actions. The game loop never asks
/// for a move in a terminal position.
pub fn best_move<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Action {
    let side = if mark == board.max_mark() {
        Side::Maximizing
    } else {
        Side::Minimizing
    };

    let mut best_value = match side {
        Side::Maximizing => i32::MIN,
        Side::Minimizing => i32::MAX,
    };
    let mut best_actions: Vec<Action> = Vec::new();

    for action in board.legal_actions() {
        let child = board.applying(action, mark);
        let value = minimax(&child, i32::MIN, i32::MAX, side.opponent());

        let improves = match side {
            Side::Maximizing => value > best_value,
            Side::Minimizing => value < best_value,
        };

        if improves {
            best_value = value;
            best_actions.clear();
            best_actions.push(action);
        } else if value == best_value {
            best_actions.push(action);
        }
    }

    *best_actions
        .choose(rng)
        .expect("no legal actions available for move selection")
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn board_with(max_actions: &[(usize, usize)], min_actions: &[(usize, usize)]) -> Board {
        let mut board = Board::new(Mark::O, Mark::X);
        for &(row, col) in max_actions {
            board.apply(Action::new(row, col), Mark::X);
        }
        for &(row, col) in min_actions {
            board.apply(Action::new(row, col), Mark::O);
        }
        board
    }

    /// Reference minimax without cutoffs, for pruning-equivalence checks
    fn plain_minimax(board: &Board, side: Side) -> i32 {
        if board.is_terminal() {
            return board.value();
        }

        let mark = match side {
            Side::Maximizing => board.max_mark(),
            Side::Minimizing => board.min_mark(),
        };

        let child_values = board
            .legal_actions()
            .into_iter()
            .map(|action| plain_minimax(&board.applying(action, mark), side.opponent()));

        match side {
            Side::Maximizing => child_values.max().unwrap(),
            Side::Minimizing => child_values.min().unwrap(),
        }
    }

    #[test]
    fn test_empty_board_is_a_forced_tie() {
        let board = Board::new(Mark::O, Mark::X);
        let value = minimax(&board, i32::MIN, i32::MAX, Side::Maximizing);
        assert_eq!(value, 0, "optimal play from an empty board ties");
    }

    #[test]
    fn test_won_position_scores_immediately() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2)], &[(1, 0), (1, 1)]);
        assert_eq!(minimax(&board, i32::MIN, i32::MAX, Side::Minimizing), 1);

        let lost = board_with(&[(1, 0), (1, 1)], &[(2, 0), (2, 1), (2, 2)]);
        assert_eq!(minimax(&lost, i32::MIN, i32::MAX, Side::Maximizing), -1);
    }

    #[test]
    fn test_pruning_does_not_change_values() {
        // Every position two plies into the game, both sides to move
        let empty = Board::new(Mark::O, Mark::X);
        for first in empty.legal_actions() {
            let after_min = empty.applying(first, Mark::O);
            for second in after_min.legal_actions() {
                let board = after_min.applying(second, Mark::X);
                for side in [Side::Maximizing, Side::Minimizing] {
                    assert_eq!(
                        minimax(&board, i32::MIN, i32::MAX, side),
                        plain_minimax(&board, side),
                        "pruned and unpruned values diverged at {first}/{second}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_best_move_is_legal() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = board_with(&[(1, 1)], &[(0, 0), (2, 2)]);
        let action = best_move(&board, Mark::X, &mut rng);
        assert!(board.legal_actions().contains(&action));
    }

    #[test]
    fn test_best_move_takes_the_win() {
        // X X .
        // O O .
        // . . .
        // X to move: (0, 2) wins on the spot and is the only non-losing move.
        let board = board_with(&[(0, 0), (0, 1)], &[(1, 0), (1, 1)]);
        let mut rng = StdRng::seed_from_u64(0);
        let action = best_move(&board, Mark::X, &mut rng);
        assert_eq!(action, Action::new(0, 2));
    }

    #[test]
    fn test_best_move_blocks_the_loss() {
        // X . .
        // O O .
        // . . .
        // X to move: anything but (1, 2) lets O complete the middle row.
        let board = board_with(&[(0, 0)], &[(1, 0), (1, 1)]);
        let mut rng = StdRng::seed_from_u64(0);
        let action = best_move(&board, Mark::X, &mut rng);
        assert_eq!(action, Action::new(1, 2));
    }

    #[test]
    fn test_best_move_is_symmetric_for_the_minimizing_mark() {
        // O O .
        // X X .
        // . . .
        // O to move: (0, 2) wins for the minimizing side.
        let board = board_with(&[(1, 0), (1, 1)], &[(0, 0), (0, 1)]);
        let mut rng = StdRng::seed_from_u64(0);
        let action = best_move(&board, Mark::O, &mut rng);
        assert_eq!(action, Action::new(0, 2));
    }

    #[test]
    fn test_best_move_is_deterministic_under_a_fixed_seed() {
        let board = Board::new(Mark::O, Mark::X);

        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        let first = best_move(&board, Mark::X, &mut first_rng);
        let second = best_move(&board, Mark::X, &mut second_rng);
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "no legal actions")]
    fn test_best_move_panics_on_a_full_board() {
        // X O X
        // X O O
        // O X X
        let board = board_with(
            &[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)],
            &[(0, 1), (1, 1), (1, 2), (2, 0)],
        );
        let mut rng = StdRng::seed_from_u64(0);
        let _ = best_move(&board, Mark::X, &mut rng);
    }
}
