use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContribError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} timed out after {secs}s")]
    Timeout { program: String, secs: u64 },

    #[error("{program} exited with {code:?}")]
    CommandFailed { program: String, code: Option<i32> },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ContribError>;
