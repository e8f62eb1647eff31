//! Game flow: phases, score and lives
//!
//! The simulation never touches these directly. Surrounding game logic
//! awards points and takes lives through [`Session`].

use serde::{Deserialize, Serialize};

use crate::highscores::HighScore;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first round: title and instructions
    #[default]
    Title,
    /// Active round
    Playing,
    /// All lives lost; final score and best shown
    GameOver,
}

/// Score and lives for the current round plus the persisted best
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub starting_lives: u32,
    pub high_score: HighScore,
    /// Set when the round that just ended beat the previous best
    pub high_score_gained: bool,
}

impl Session {
    pub fn new(starting_lives: u32, high_score: HighScore) -> Self {
        Self {
            phase: GamePhase::Title,
            score: 0,
            lives: starting_lives,
            starting_lives,
            high_score,
            high_score_gained: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn begin_round(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = self.starting_lives;
        self.high_score_gained = false;
        log::info!("Round started with {} lives", self.lives);
    }

    pub fn add_score(&mut self, points: u64) {
        if self.is_playing() {
            self.score = self.score.saturating_add(points);
        }
    }

    /// Take one life. Returns true if this ended the round.
    pub fn lose_life(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            log::info!("Game over with score {}", self.score);
            self.check_high_score();
            return true;
        }
        false
    }

    /// Promote the current score to the best if it beats it, persisting the
    /// new value. Returns true on a new best.
    pub fn check_high_score(&mut self) -> bool {
        if self.high_score.record(self.score) {
            self.high_score_gained = true;
            self.high_score.save();
            log::info!("New high score: {}", self.score);
            true
        } else {
            false
        }
    }
}
