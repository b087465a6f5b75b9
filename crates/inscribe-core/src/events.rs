//! Log side channel events emitted by the store.
//!
//! The store narrates its lifecycle (lock acquired, save complete, failures)
//! through an optional channel injected at construction. The presentation
//! layer consumes these on its own thread; the store never blocks on them.

use std::fmt;

/// Severity of a [`LogEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A single log line emitted by the store for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
}

impl LogEvent {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_log_panel_format() {
        let event = LogEvent::warning("append called with empty text");
        assert_eq!(
            event.to_string(),
            "[WARNING]: append called with empty text"
        );
    }

    #[test]
    fn constructors_set_level() {
        assert_eq!(LogEvent::info("x").level, LogLevel::Info);
        assert_eq!(LogEvent::warning("x").level, LogLevel::Warning);
        assert_eq!(LogEvent::error("x").level, LogLevel::Error);
    }
}
