use thiserror::Error;

#[derive(Error, Debug)]
pub enum EffectError {
    #[error("required element `{0}` is not present")]
    MissingElement(&'static str),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("stat value `{0}` is not an integer")]
    InvalidStat(String),

    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, EffectError>;
