use thiserror::Error;

use crate::game::{Game, GameError};

pub mod terminal;

/// Defines a presentation surface the quiz can be played through.
pub trait Driver {
    /// Construct a new instance of the driver around the given game.
    fn new(game: Game) -> Result<Self, DriverError>
    where
        Self: Sized;

    /// Run the quiz until the player quits.
    fn run(&mut self) -> Result<(), DriverError>;
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("game refused to start: {0}")]
    Game(#[from] GameError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
