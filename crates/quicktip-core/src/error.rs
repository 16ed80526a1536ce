use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Malformed number: {0:?}")]
    MalformedNumber(String),

    #[error("Negative amount: {0}")]
    NegativeAmount(String),

    #[error("Fractional amount not allowed in integer mode: {0}")]
    FractionNotAllowed(String),

    #[error("Amount too large to calculate")]
    Overflow,

    #[error("Unknown tip segment: {0}")]
    UnknownSegment(usize),

    #[error("Custom tip is locked while a preset percentage is selected")]
    CustomTipLocked,
}

impl Error {
    /// Errors produced by user text that the caller should reject rather than report as faults.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedNumber(_)
                | Self::NegativeAmount(_)
                | Self::FractionNotAllowed(_)
                | Self::Overflow
                | Self::CustomTipLocked
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
