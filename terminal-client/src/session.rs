use rand::RngCore;
use std::time::Duration;
use tokio::sync::mpsc;
use tictactoe_engine::{
    BotInput, Difficulty, GameMode, GameState, Outcome, ScoreBoard, SessionRng, calculate_move,
    log,
};

use crate::command::{ClientCommand, HELP_TEXT, parse_command};
use crate::render::render_screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Continue,
    Quit,
}

/// One terminal play session: the current round plus the running score.
pub struct TerminalSession {
    mode: GameMode,
    difficulty: Difficulty,
    ai_delay: Duration,
    state: GameState,
    score: ScoreBoard,
    rng: SessionRng,
}

impl TerminalSession {
    pub fn new(mode: GameMode, difficulty: Difficulty, ai_delay: Duration, rng: SessionRng) -> Self {
        Self {
            mode,
            difficulty,
            ai_delay,
            state: GameState::for_mode(mode),
            score: ScoreBoard::new(),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn screen(&self) -> String {
        render_screen(self.mode, self.difficulty, &self.state, &self.score)
    }

    /// Applies a move to the authoritative board and tallies the round if it
    /// just ended.
    fn apply_move(&mut self, index: usize) -> Result<Outcome, String> {
        let mark = self.state.current_mark;
        let outcome = self.state.place_mark(index)?;
        log!("{} played cell {}", mark, index + 1);

        if outcome.is_terminal() {
            self.score.record(&outcome);
            log!("Round finished: {}", self.mode.status_text(&self.state));
        }
        Ok(outcome)
    }

    pub fn handle_command(&mut self, command: ClientCommand) -> Result<SessionAction, String> {
        match command {
            ClientCommand::Play(index) => {
                if self.state.is_over() {
                    return Err("Round is over, press n for a new one".to_string());
                }
                if self.mode.is_ai_turn(&self.state) {
                    return Err("Wait for the AI to move".to_string());
                }
                self.apply_move(index)?;
            }
            ClientCommand::NewRound => {
                self.state = GameState::for_mode(self.mode);
            }
            ClientCommand::ResetScore => {
                self.score.reset();
                self.state = GameState::for_mode(self.mode);
                log!("Score reset");
            }
            ClientCommand::Help => println!("{}", HELP_TEXT),
            ClientCommand::Quit => return Ok(SessionAction::Quit),
        }
        Ok(SessionAction::Continue)
    }

    /// Computes the AI move on the blocking pool after the pacing delay.
    pub async fn play_ai_turn(&mut self) -> Result<(), String> {
        if !self.ai_delay.is_zero() {
            tokio::time::sleep(self.ai_delay).await;
        }

        let input = BotInput::from_game_state(&self.state);
        let difficulty = self.difficulty;
        let mut move_rng = SessionRng::new(self.rng.next_u64());

        let chosen = tokio::task::spawn_blocking(move || {
            calculate_move(difficulty, &input, &mut move_rng)
        })
        .await
        .map_err(|e| format!("AI move task failed: {}", e))?;

        match chosen {
            Some(index) => self.apply_move(index).map(|_| ()),
            None => Err("AI found no move on a full board".to_string()),
        }
    }

    pub async fn run(&mut self, mut line_rx: mpsc::UnboundedReceiver<String>) -> Result<(), String> {
        log!(
            "Starting {} session (difficulty {}, seed {})",
            self.mode,
            self.difficulty,
            self.rng.seed()
        );
        println!("{}", HELP_TEXT);

        loop {
            println!("\n{}", self.screen());

            if self.mode.is_ai_turn(&self.state) {
                self.play_ai_turn().await?;
                continue;
            }

            let Some(line) = line_rx.recv().await else {
                break;
            };

            match parse_command(&line).and_then(|command| self.handle_command(command)) {
                Ok(SessionAction::Quit) => break,
                Ok(SessionAction::Continue) => {}
                Err(message) => println!("{}", message),
            }
        }

        log!(
            "Session over after {} rounds: X {} / O {} / draws {}",
            self.score.rounds(),
            self.score.x,
            self.score.o,
            self.score.draws
        );
        Ok(())
    }
}
