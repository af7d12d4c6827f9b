//! Error types for the Vitrine launcher.

use std::io;

/// Errors produced by the Vitrine launcher crates.
#[derive(Debug, thiserror::Error)]
pub enum VitrineError {
    #[error("config error: {0}")]
    Config(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("launch error: {0}")]
    Launch(String),

    #[error("voice error: {0}")]
    Voice(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VitrineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = VitrineError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn catalog_error_display() {
        let e = VitrineError::Catalog("empty feed".into());
        assert_eq!(format!("{e}"), "catalog error: empty feed");
    }

    #[test]
    fn launch_error_display() {
        let e = VitrineError::Launch("target missing".into());
        assert_eq!(format!("{e}"), "launch error: target missing");
    }

    #[test]
    fn voice_error_display() {
        let e = VitrineError::Voice("recognizer stopped".into());
        assert_eq!(format!("{e}"), "voice error: recognizer stopped");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: VitrineError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: VitrineError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: VitrineError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }
}
