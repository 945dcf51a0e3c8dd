// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Backend failures keep only what call sites need: transport problems
/// carry the underlying message, rejected requests carry the HTTP status.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Transport-level failure (connection refused, timeout, bad TLS, ...).
    Http(String),
    /// The backend answered with a non-2xx status.
    Api { status: u16 },
    /// A response body could not be decoded as the expected JSON shape.
    Json(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Api { status } => write!(f, "API Error: HTTP status {}", status),
            Error::Json(e) => write!(f, "JSON Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status() {
        let err = Error::Api { status: 404 };
        assert_eq!(err.to_string(), "API Error: HTTP status 404");
    }

    #[test]
    fn io_error_converts_with_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing")));
    }

    #[test]
    fn json_error_converts_from_serde() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err = Error::from(bad.unwrap_err());
        assert!(matches!(err, Error::Json(_)));
    }
}
