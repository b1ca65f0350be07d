use thiserror::Error;

/// Failures raised while scanning past end-of-input inside a verbatim region.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinifyError {
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated regular expression literal")]
    UnterminatedRegex,
}

#[derive(Error, Debug)]
pub enum JsMinError {
    #[error(transparent)]
    Minify(#[from] MinifyError),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JsMinError>;
