//! Errors returned by the game core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

/// Everything the controller, the deck or the settings can refuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("card count {value} is outside 1..={max}")]
    CardCountOutOfRange { value: i64, max: usize },

    #[error("timer {value}s is outside {min}..={max} seconds")]
    TimerOutOfRange { value: i64, min: u32, max: u32 },

    #[error("unsupported deck size {0}, expected 36 or 52")]
    UnsupportedDeckSize(usize),

    #[error("settings are locked while a round is in progress")]
    RoundInProgress,

    #[error("cannot draw {requested} cards from a deck of {available}")]
    NotEnoughCards { requested: usize, available: usize },

    #[error("no selection is open")]
    NotSelecting,

    #[error("card {0:?} is not in the active deck")]
    UnknownCard(String),

    #[error("card {0:?} is already selected")]
    AlreadySelected(String),
}
