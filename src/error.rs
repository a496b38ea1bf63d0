use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogInitError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("a global logger is already installed")]
    AlreadySet(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LogInitError>;
