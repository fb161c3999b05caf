use log::{debug, error};
use rand::{seq::SliceRandom, thread_rng};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use strum::IntoEnumIterator;
use thiserror::Error;

pub use field::{CategorySelection, Difficulty, FieldType, HiddenField};
pub use state::Phase;

use data::President;
use timer::Timer;

pub mod data;
mod field;
pub mod helpers;
mod state;
#[cfg(test)]
mod tests;
mod timer;

/// Reasons a game can refuse to start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Every field type is excluded from masking.
    #[error("select at least one category to hide")]
    NoCategoriesSelected,
}

/// An instance of the presidents quiz.
///
/// Owns the full lifecycle of one session: which cells are masked, what the
/// player has typed into each, and the running clock.
#[derive(Debug)]
pub struct Game {
    /// The record table under quiz. Never mutated.
    records: Vec<President>,
    /// Fraction of eligible fields hidden by the next game.
    difficulty: Difficulty,
    /// Which field types are eligible for masking.
    categories: CategorySelection,
    /// Lifecycle state of the current session.
    phase: Phase,
    /// The masked cells, in draw order. Indices into this sequence are the
    /// handles `check_answer` takes.
    hidden_fields: Vec<HiddenField>,
    /// Seconds since the session started, written by the timer thread.
    elapsed: Arc<AtomicU64>,
    /// Live tick source while the session is active.
    timer: Option<Timer>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A game over the full presidents table with default settings.
    pub fn new() -> Self {
        Game::with_records(data::PRESIDENTS.clone())
    }

    /// A game over a custom record table.
    pub fn with_records(records: Vec<President>) -> Self {
        Game {
            records,
            difficulty: Difficulty::default(),
            categories: CategorySelection::default(),
            phase: Phase::Idle,
            hidden_fields: Vec::new(),
            elapsed: Arc::new(AtomicU64::new(0)),
            timer: None,
        }
    }

    /// Set the difficulty used by the next `start_game`. Only effective
    /// while idle.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.phase != Phase::Idle {
            debug!("Ignoring difficulty change while {:?}", self.phase);
            return;
        }
        self.difficulty = difficulty;
    }

    /// Flip whether the given field type is eligible for masking. Only
    /// effective while idle.
    pub fn toggle_category(&mut self, field_type: FieldType) {
        if self.phase != Phase::Idle {
            debug!("Ignoring category toggle while {:?}", self.phase);
            return;
        }
        self.categories.toggle(field_type);
    }

    /// Start a new session: draw the hidden fields and start the clock.
    ///
    /// Allowed from any phase; a running or completed session is discarded
    /// first. Fails without touching any state when every category is
    /// excluded from masking.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if !self.categories.any() {
            return Err(GameError::NoCategoriesSelected);
        }

        self.reset_game();
        self.hidden_fields = self.draw_hidden_fields();
        self.phase = Phase::Active;
        self.timer = Some(Timer::start(Arc::clone(&self.elapsed)));
        debug!(
            "Started {:?} game with {} hidden fields",
            self.difficulty,
            self.hidden_fields.len()
        );
        Ok(())
    }

    /// Abandon the current session and return to idle. Safe from any phase.
    pub fn reset_game(&mut self) {
        self.stop_timer();
        self.hidden_fields.clear();
        self.elapsed.store(0, Ordering::Release);
        self.phase = Phase::Idle;
    }

    /// Record the player's current text for the given hidden field and
    /// re-evaluate it. The comparison ignores surrounding whitespace and
    /// case; the stored text is kept verbatim. Completes the session the
    /// moment no incorrect field remains.
    pub fn check_answer(&mut self, field_handle: usize, raw_input: &str) {
        let field = match self.hidden_fields.get_mut(field_handle) {
            Some(field) => field,
            None => {
                error!("Invalid field handle: {:?}", field_handle);
                return;
            }
        };

        field.user_value = raw_input.to_string();
        field.is_correct = helpers::normalize_answer(raw_input)
            == helpers::normalize_answer(&field.original_value);

        if self.remaining() == 0 {
            self.phase = Phase::Complete;
            self.stop_timer();
        }
    }

    /// The session's lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The record table under quiz.
    pub fn records(&self) -> &[President] {
        &self.records
    }

    /// The configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The field types currently eligible for masking.
    pub fn categories(&self) -> CategorySelection {
        self.categories
    }

    /// The masked cells, in draw order.
    pub fn hidden_fields(&self) -> &[HiddenField] {
        &self.hidden_fields
    }

    /// Handle of the hidden field masking the given cell, if it is masked.
    pub fn hidden_field_at(&self, record_index: usize, field_type: FieldType) -> Option<usize> {
        self.hidden_fields
            .iter()
            .position(|f| f.record_index == record_index && f.field_type == field_type)
    }

    /// How many hidden fields are not yet answered correctly. Always derived
    /// from the field list, never cached.
    pub fn remaining(&self) -> usize {
        self.hidden_fields.iter().filter(|f| !f.is_correct).count()
    }

    /// Whole seconds the current session has been running.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.load(Ordering::Acquire)
    }

    /// Draw the set of cells to mask: every (record, eligible field type)
    /// pair is a candidate, and a difficulty-determined share of them is
    /// picked uniformly without replacement.
    fn draw_hidden_fields(&self) -> Vec<HiddenField> {
        let mut candidates = Vec::new();
        for record_index in 0..self.records.len() {
            for field_type in FieldType::iter() {
                if self.categories.includes(field_type) {
                    candidates.push((record_index, field_type));
                }
            }
        }
        if candidates.is_empty() {
            return Vec::new();
        }

        // At least one field is always hidden, even when the fraction rounds
        // down to zero on a tiny table
        let hide_count = std::cmp::max(
            1,
            (candidates.len() as f64 * self.difficulty.hide_fraction()).floor() as usize,
        );

        let mut rng = thread_rng();
        let (drawn, _) = candidates.partial_shuffle(&mut rng, hide_count);
        drawn
            .iter()
            .map(|&(record_index, field_type)| HiddenField {
                record_index,
                field_type,
                original_value: self.records[record_index].field(field_type).to_string(),
                user_value: String::new(),
                is_correct: false,
            })
            .collect()
    }

    fn stop_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
        }
    }
}
