use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Strip geometry error: {0}")]
    Geometry(String),

    #[error(
        "Strip too narrow: content width {content} must be at least two viewports ({viewport} each)"
    )]
    StripTooNarrow { content: f64, viewport: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
