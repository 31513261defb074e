//! Rules engine and automated opponent for 3x3 tic-tac-toe.
//!
//! [`evaluate`] decides whether a board is won, drawn or still in play;
//! [`select_move`] picks the automated player's next cell at one of three
//! [`Difficulty`] tiers. Both are pure and take boards by value or shared
//! reference, so they can run on any thread.

mod board;
mod bot_controller;
mod game_state;
mod score;
mod session_rng;
mod types;
mod win_detector;

pub mod config;
pub mod logger;

pub use board::{Board, CENTER, CORNERS, get_available_moves, is_valid_move};
pub use bot_controller::{
    BotInput, MEDIUM_RANDOM_MOVE_PROBABILITY, calculate_minimax_move, calculate_move, select_move,
};
pub use game_state::{AI_MARK, GameMode, GameState, HUMAN_MARK};
pub use score::ScoreBoard;
pub use session_rng::SessionRng;
pub use types::{BOARD_SIZE, CELL_COUNT, Difficulty, Mark, Outcome, Position, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
