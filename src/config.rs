//! Startup configuration.
//!
//! The bridge takes exactly two positional arguments:
//!
//! ```text
//! kanata-sketchybar <host> <port>
//! ```
//!
//! Everything else is fixed at compile time.  No configuration file or
//! environment variable is consulted.

use crate::framer::DEFAULT_CAPACITY;
use std::path::PathBuf;
use std::time::Duration;

/// Delay between a failed connect or a lost connection and the next attempt.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(1);

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// kanata TCP server host (name or address).
    pub host: String,
    /// kanata TCP server port.
    pub port: u16,
    /// Fixed wait before each reconnect attempt.
    pub reconnect_delay: Duration,
    /// Receive buffer size; longer lines are dropped.
    pub buffer_capacity: usize,
    /// Status bar client binary.
    pub sketchybar: PathBuf,
}

impl Config {
    /// Build a configuration with the default tunables.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            reconnect_delay: RECONNECT_DELAY,
            buffer_capacity: DEFAULT_CAPACITY,
            sketchybar: PathBuf::from("sketchybar"),
        }
    }

    /// Parse `<host> <port>` from process arguments (without the program
    /// name).  Extra arguments are ignored.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let (host, port) = match (args.next(), args.next()) {
            (Some(host), Some(port)) => (host, port),
            _ => return Err(ConfigError::MissingArguments),
        };
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        Ok(Self::new(host, port))
    }
}

/// Error from parsing startup arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing <host> and <port> arguments")]
    MissingArguments,
    #[error("invalid port: {0:?}")]
    InvalidPort(String),
}

/// Usage text printed when arguments are missing or invalid.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {0} <host> <port>\nExample: {0} localhost 7070",
        program
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_and_port() {
        let cfg = Config::from_args(["localhost", "7070"]).unwrap();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 7070);
        assert_eq!(cfg.reconnect_delay, Duration::from_secs(1));
        assert_eq!(cfg.buffer_capacity, 4096);
        assert_eq!(cfg.sketchybar, PathBuf::from("sketchybar"));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let cfg = Config::from_args(["127.0.0.1", "1", "extra"]).unwrap();
        assert_eq!(cfg.port, 1);
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(
            Config::from_args(Vec::<String>::new()),
            Err(ConfigError::MissingArguments)
        );
        assert_eq!(
            Config::from_args(["localhost"]),
            Err(ConfigError::MissingArguments)
        );
    }

    #[test]
    fn invalid_port() {
        assert_eq!(
            Config::from_args(["localhost", "http"]),
            Err(ConfigError::InvalidPort("http".into()))
        );
        assert_eq!(
            Config::from_args(["localhost", "70000"]),
            Err(ConfigError::InvalidPort("70000".into()))
        );
    }

    #[test]
    fn usage_names_program() {
        let text = usage("kanata-sketchybar");
        assert!(text.starts_with("Usage: kanata-sketchybar <host> <port>"));
        assert!(text.contains("localhost 7070"));
    }
}
