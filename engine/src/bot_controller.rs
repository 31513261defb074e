use rand::Rng;
use rand::prelude::IndexedRandom;

use super::board::{Board, CENTER, CORNERS, get_available_moves};
use super::game_state::GameState;
use super::types::{Difficulty, Mark, Outcome};
use super::win_detector::{check_win, evaluate};

/// Chance that the medium bot ignores its heuristics and plays like the easy one.
pub const MEDIUM_RANDOM_MOVE_PROBABILITY: f64 = 0.2;

const WIN_SCORE: i32 = 10;

/// Owned snapshot of everything the bot needs, so a move can be computed on
/// another thread.
#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub self_mark: Mark,
    pub opponent_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: state.board,
            self_mark: state.current_mark,
            opponent_mark: state.current_mark.opponent(),
        }
    }
}

pub fn calculate_move<R>(difficulty: Difficulty, input: &BotInput, rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    select_move(
        &input.board,
        difficulty,
        input.self_mark,
        input.opponent_mark,
        rng,
    )
}

/// Cell the automated player should occupy next, or `None` when the board
/// has no empty cell.
pub fn select_move<R>(
    board: &Board,
    difficulty: Difficulty,
    self_mark: Mark,
    opponent_mark: Mark,
    rng: &mut R,
) -> Option<usize>
where
    R: Rng + ?Sized,
{
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => pick_random_move(&available_moves, rng),
        Difficulty::Medium => {
            if rng.random_bool(MEDIUM_RANDOM_MOVE_PROBABILITY) {
                return pick_random_move(&available_moves, rng);
            }
            calculate_medium_move(board, self_mark, opponent_mark, rng)
        }
        Difficulty::Hard => calculate_minimax_move(board, self_mark, opponent_mark)
            .or_else(|| pick_random_move(&available_moves, rng)),
    }
}

fn pick_random_move<R>(moves: &[usize], rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    moves.choose(rng).copied()
}

fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    get_available_moves(board)
        .into_iter()
        .find(|&index| check_win(&board.with_mark(index, mark)) == Some(mark))
}

fn calculate_medium_move<R>(
    board: &Board,
    self_mark: Mark,
    opponent_mark: Mark,
    rng: &mut R,
) -> Option<usize>
where
    R: Rng + ?Sized,
{
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(board, self_mark) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, opponent_mark) {
        return Some(index);
    }

    if board.is_empty_cell(CENTER) {
        return Some(CENTER);
    }

    let open_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| board.is_empty_cell(index))
        .collect();
    if !open_corners.is_empty() {
        return pick_random_move(&open_corners, rng);
    }

    pick_random_move(&available_moves, rng)
}

/// Full-depth minimax from `self_mark`'s point of view. Returns `None` when
/// the board is already decided.
pub fn calculate_minimax_move(board: &Board, self_mark: Mark, opponent_mark: Mark) -> Option<usize> {
    minimax(*board, self_mark, self_mark, opponent_mark, 0).1
}

/// Score and best move for the node `(board, to_move, depth)`. Ties keep the
/// lowest cell index.
fn minimax(
    board: Board,
    to_move: Mark,
    self_mark: Mark,
    opponent_mark: Mark,
    depth: i32,
) -> (i32, Option<usize>) {
    match evaluate(&board) {
        Outcome::Won { mark, .. } if mark == self_mark => return (WIN_SCORE - depth, None),
        Outcome::Won { .. } => return (depth - WIN_SCORE, None),
        Outcome::Draw => return (0, None),
        Outcome::InProgress => {}
    }

    let is_maximizing = to_move == self_mark;
    let next_to_move = if is_maximizing { opponent_mark } else { self_mark };

    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for index in get_available_moves(&board) {
        let (score, _) = minimax(
            board.with_mark(index, to_move),
            next_to_move,
            self_mark,
            opponent_mark,
            depth + 1,
        );

        let improves = if is_maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(index);
        }
    }

    (best_score, best_move)
}
