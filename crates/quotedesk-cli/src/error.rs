use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] quotedesk_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error("strict mode failed: backend test reported a failure")]
    StrictModeViolation,

    #[error(transparent)]
    Core(#[from] quotedesk_core::CoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Command(_) => 2,
            Self::Core(_) | Self::Serialization(_) => 4,
            Self::StrictModeViolation => 5,
            Self::Io(_) => 10,
        }
    }
}
