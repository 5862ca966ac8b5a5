use crate::types::ParamUid;
use thiserror::Error;

/// Error types for parameter parsing and editing.
///
/// The query parser and serializer never fail: malformed segments are dropped
/// instead. Errors only come from path extraction, store actions that refer to
/// a parameter which no longer exists, and configuration I/O.
///
/// # Error Handling Examples
///
/// ```rust
/// use param_edit::{parse_path_params, ParamError};
///
/// match parse_path_params("not a url") {
///     Ok(paths) => println!("{} placeholders", paths.len()),
///     Err(ParamError::InvalidUrl(url)) => eprintln!("Cannot parse {url}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ParamError {
    /// The path template could not be parsed as an absolute URL.
    ///
    /// Carries the candidate string after the default scheme was applied.
    /// Use [`is_valid_url`](crate::is_valid_url) beforehand to avoid it.
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    /// A store action referenced a parameter uid that is not in the list.
    #[error("No parameter with uid {0}")]
    UnknownParam(ParamUid),

    /// Configuration file could not be located or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system I/O errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors for parameter records and config.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
