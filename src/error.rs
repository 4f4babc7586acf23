// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// A plan document could not be read, written, or parsed.
    Plan(String),
    Navigation(String),
    Auth(String),
    /// The platform refused to open an external link.
    External(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Plan(e) => write!(f, "Plan Error: {}", e),
            Error::Navigation(e) => write!(f, "Navigation Error: {}", e),
            Error::Auth(e) => write!(f, "Auth Error: {}", e),
            Error::External(e) => write!(f, "External Link Error: {}", e),
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Plan(err.to_string())
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
    fn json_error_maps_to_plan_variant() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Plan(_)));
    }

    #[test]
    fn navigation_error_mentions_path() {
        let err = Error::Navigation("unknown route: /nowhere".into());
        assert!(err.to_string().contains("/nowhere"));
    }
}
