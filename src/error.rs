// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// An attempt to set the image load status to an unrecognized value.
    /// This is a programmer error and is surfaced immediately.
    InvalidState(String),
    Load(LoadError),
    Config(String),
}

/// Specific error types for source-loading failures.
/// These are expected outcomes that feed the component's error state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The source string was empty.
    EmptySource,

    /// Filesystem read failed (missing file, permission denied, etc.)
    Io(String),

    /// HTTP fetch failed or the server replied with an error status.
    Fetch(String),

    /// The bytes could not be decoded as a supported image format.
    Decode(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::EmptySource => write!(f, "Empty image source"),
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            LoadError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState(value) => {
                write!(f, "Invalid image state: {:?}", value)
            }
            Error::Load(e) => write!(f, "Load Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Load(LoadError::Io(err.to_string()))
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Load(LoadError::Decode(err.to_string()))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Load(LoadError::Fetch(err.to_string()))
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

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_invalid_state() {
        let err = Error::InvalidState("poo".to_string());
        assert_eq!(format!("{}", err), "Invalid image state: \"poo\"");
    }

    #[test]
    fn from_io_error_produces_load_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Load(LoadError::Io(message)) => assert!(message.contains("boom")),
            _ => panic!("expected Load(Io) variant"),
        }
    }

    #[test]
    fn from_load_error_wraps_variant() {
        let err: Error = LoadError::EmptySource.into();
        assert!(matches!(err, Error::Load(LoadError::EmptySource)));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn load_error_display_variants() {
        assert_eq!(format!("{}", LoadError::EmptySource), "Empty image source");
        assert!(format!("{}", LoadError::Fetch("404".into())).contains("404"));
        assert!(format!("{}", LoadError::Decode("bad magic".into())).contains("bad magic"));
    }
}
