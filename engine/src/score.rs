use super::types::{Mark, Outcome};

/// Running tally for one session. Not persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won { mark: Mark::X, .. } => self.x += 1,
            Outcome::Won { mark: Mark::O, .. } => self.o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.x + self.o + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
