use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::types::{CELL_COUNT, Mark, Outcome, WinningLine};
use super::win_detector::evaluate;

pub const HUMAN_MARK: Mark = Mark::O;
pub const AI_MARK: Mark = Mark::X;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    #[serde(alias = "player_vs_ai")]
    Pvai,
    #[serde(alias = "player_vs_player")]
    Pvp,
}

impl GameMode {
    /// Against the AI the human opens; two humans start with X.
    pub fn starting_mark(&self) -> Mark {
        match self {
            GameMode::Pvai => HUMAN_MARK,
            GameMode::Pvp => Mark::X,
        }
    }

    pub fn is_ai_turn(&self, state: &GameState) -> bool {
        *self == GameMode::Pvai && !state.is_over() && state.current_mark == AI_MARK
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameMode::Pvai => "PLAYER VS AI",
            GameMode::Pvp => "PLAYER VS PLAYER",
        }
    }

    pub fn status_text(&self, state: &GameState) -> String {
        match state.outcome {
            Outcome::Draw => "ROUND DRAW".to_string(),
            Outcome::Won { mark, .. } => match self {
                GameMode::Pvai if mark == AI_MARK => "AI WINS!".to_string(),
                GameMode::Pvai => "YOU WIN!".to_string(),
                GameMode::Pvp => format!("{} WINS!", mark),
            },
            Outcome::InProgress => match self {
                GameMode::Pvai if self.is_ai_turn(state) => "AI THINKING...".to_string(),
                GameMode::Pvai => "YOUR TURN".to_string(),
                GameMode::Pvp => format!("PLAYER {} TURN", state.current_mark),
            },
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvai" | "ai" => Ok(GameMode::Pvai),
            "pvp" => Ok(GameMode::Pvp),
            other => Err(format!("Unknown game mode '{}', expected pvai or pvp", other)),
        }
    }
}

/// Authoritative state of one round.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub outcome: Outcome,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new(starting_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            current_mark: starting_mark,
            outcome: Outcome::InProgress,
            last_move: None,
        }
    }

    pub fn for_mode(mode: GameMode) -> Self {
        Self::new(mode.starting_mark())
    }

    pub fn place_mark(&mut self, index: usize) -> Result<Outcome, String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !self.board.is_empty_cell(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(index, self.current_mark);
        self.last_move = Some(index);
        self.outcome = evaluate(&self.board);

        if !self.is_over() {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(self.outcome)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome {
            Outcome::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[usize]) {
        for &index in moves {
            state.place_mark(index).unwrap();
        }
    }

    #[test]
    fn test_marks_alternate_from_starting_mark() {
        let mut state = GameState::new(Mark::O);
        assert_eq!(state.place_mark(4), Ok(Outcome::InProgress));
        assert_eq!(state.board.get(4), Some(Mark::O));
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, Some(4));
        state.place_mark(0).unwrap();
        assert_eq!(state.board.get(0), Some(Mark::X));
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_place_mark_rejects_occupied_and_out_of_bounds_cells() {
        let mut state = GameState::new(Mark::X);
        state.place_mark(0).unwrap();
        assert_eq!(state.place_mark(0), Err("Cell is already marked".to_string()));
        assert!(state.place_mark(9).is_err());
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_win_ends_the_round() {
        let mut state = GameState::new(Mark::X);
        play(&mut state, &[0, 3, 1, 4]);
        let outcome = state.place_mark(2).unwrap();
        assert_eq!(
            outcome,
            Outcome::Won {
                mark: Mark::X,
                line: WinningLine::new([0, 1, 2])
            }
        );
        assert!(state.is_over());
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.winning_line(), Some(WinningLine::new([0, 1, 2])));
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.place_mark(5), Err("Game is already over".to_string()));
    }

    #[test]
    fn test_draw_ends_the_round() {
        let mut state = GameState::new(Mark::X);
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6]);
        assert_eq!(state.place_mark(8), Ok(Outcome::Draw));
        assert!(state.is_over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_mode_starting_marks() {
        assert_eq!(GameState::for_mode(GameMode::Pvai).current_mark, HUMAN_MARK);
        assert_eq!(GameState::for_mode(GameMode::Pvp).current_mark, Mark::X);
    }

    #[test]
    fn test_ai_turn_only_against_ai_while_in_progress() {
        let mut state = GameState::for_mode(GameMode::Pvai);
        assert!(!GameMode::Pvai.is_ai_turn(&state));
        state.place_mark(4).unwrap();
        assert!(GameMode::Pvai.is_ai_turn(&state));
        assert!(!GameMode::Pvp.is_ai_turn(&state));
    }

    #[test]
    fn test_status_texts() {
        let mut state = GameState::for_mode(GameMode::Pvai);
        assert_eq!(GameMode::Pvai.status_text(&state), "YOUR TURN");
        state.place_mark(0).unwrap();
        assert_eq!(GameMode::Pvai.status_text(&state), "AI THINKING...");
        assert_eq!(GameMode::Pvp.status_text(&state), "PLAYER X TURN");

        // O (human) takes the top row.
        play(&mut state, &[3, 1, 4, 2]);
        assert_eq!(state.winner(), Some(Mark::O));
        assert_eq!(GameMode::Pvai.status_text(&state), "YOU WIN!");
        assert_eq!(GameMode::Pvp.status_text(&state), "O WINS!");

        let mut state = GameState::new(Mark::X);
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(GameMode::Pvai.status_text(&state), "AI WINS!");
    }

    #[test]
    fn test_game_mode_parse() {
        assert_eq!("PvAI".parse::<GameMode>(), Ok(GameMode::Pvai));
        assert_eq!("pvp".parse::<GameMode>(), Ok(GameMode::Pvp));
        assert!("campaign".parse::<GameMode>().is_err());
    }
}
