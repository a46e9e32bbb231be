// SPDX-License-Identifier: MPL-2.0
use crate::application::port::AnalyzeError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Analyze(AnalyzeError),
    Diagnostics(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Analyze(e) => write!(f, "Analyze Error: {}", e),
            Error::Diagnostics(e) => write!(f, "Diagnostics Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AnalyzeError> for Error {
    fn from(err: AnalyzeError) -> Self {
        Error::Analyze(err)
    }
}

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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Diagnostics(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn analyze_error_is_wrapped() {
        let err: Error = AnalyzeError::Rejected { status: 502 }.into();
        assert!(matches!(err, Error::Analyze(AnalyzeError::Rejected { status: 502 })));
        assert!(format!("{}", err).contains("502"));
    }

    #[test]
    fn json_error_maps_to_diagnostics() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Diagnostics(_)));
    }
}
