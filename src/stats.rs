use crate::session::{GuessingSession, Status};

pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Running totals for the current run of the program. Nothing is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub name: String,
    pub score: u32,
    pub games_played: u32,
    pub games_won: u32,
}

impl PlayerStats {
    #[must_use]
    pub fn new(name: &str) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() {
                DEFAULT_PLAYER_NAME.to_string()
            } else {
                name.to_string()
            },
            score: 0,
            games_played: 0,
            games_won: 0,
        }
    }

    /// Counts a finished session. Sessions still in progress are ignored.
    pub fn record(&mut self, session: &GuessingSession) {
        match session.status() {
            Status::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.score += session.score().unwrap_or(0);
            }
            Status::Lost => self.games_played += 1,
            Status::InProgress => {}
        }
    }

    /// Percentage of games won, 0 before any game is played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}
