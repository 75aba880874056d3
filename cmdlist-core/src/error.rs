use std::collections::TryReserveError;

/// Failures raised by the command list itself.
///
/// Errors produced by stored commands never pass through this type: a
/// panicking command unwinds out of `execute`, and an `Err` returned by a
/// fallible command is handed back untouched by `try_execute_into`.
#[derive(thiserror::Error, Debug)]
pub enum CommandListError {
    #[error("initial capacity must be at least 1")]
    ZeroCapacity,
    #[error("growth must exceed 100 percent, got {0}%")]
    InvalidGrowth(u32),
    #[error("capacity overflow growing past {0} entries")]
    CapacityOverflow(usize),
    #[error("allocation failed growing to {requested} entries: {source}")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("output buffer holds {available} slots but {needed} commands are pending")]
    OutputTooShort { needed: usize, available: usize },
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CommandListResult<T> = Result<T, CommandListError>;
