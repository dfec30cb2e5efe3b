use std::fmt;

#[derive(Debug)]
pub enum LoadError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    Invalid { index: usize, reason: String },
    Empty,
}

impl std::error::Error for LoadError {}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::IoError(e) => write!(f, "IO error: {}", e),
            LoadError::ParseError(e) => write!(f, "Malformed questions file: {}", e),
            LoadError::Invalid { index, reason } => {
                write!(f, "Invalid question at index {}: {}", index, reason)
            }
            LoadError::Empty => write!(f, "Questions file contains no questions"),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::IoError(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::ParseError(err)
    }
}

/// Why a session cookie was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    Malformed(String),
    UnsupportedVersion,
    BadSignature,
    Expired,
}

impl std::error::Error for TokenError {}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Malformed(reason) => write!(f, "malformed session token: {}", reason),
            TokenError::UnsupportedVersion => write!(f, "unsupported session token version"),
            TokenError::BadSignature => write!(f, "session token signature mismatch"),
            TokenError::Expired => write!(f, "session token expired"),
        }
    }
}

impl From<base64::DecodeError> for TokenError {
    fn from(err: base64::DecodeError) -> Self {
        TokenError::Malformed(err.to_string())
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::Malformed(err.to_string())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}
