use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette index out of range: {0}")]
    OutOfRange(i64),
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
