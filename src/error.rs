use std::io;

#[derive(Debug, thiserror::Error)]
pub enum InvokerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not determine the current user's home directory")]
    HomeDirUnavailable,

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, InvokerError>;
