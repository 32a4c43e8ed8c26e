//! Severity levels and their mapping onto the native taxonomy

use crate::error::{OsLogError, Result};
use crate::sink::NativeSeverity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    #[default]
    Trace,
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
}

impl Level {
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /// Lowercase level name, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }

    /// Map onto the native severity set, which only knows debug, info, error and fault
    pub fn native_severity(&self) -> NativeSeverity {
        match self {
            Level::Trace | Level::Debug => NativeSeverity::Debug,
            Level::Info | Level::Notice | Level::Warning => NativeSeverity::Info,
            Level::Error => NativeSeverity::Error,
            Level::Critical => NativeSeverity::Fault,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = OsLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "notice" => Ok(Level::Notice),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "critical" => Ok(Level::Critical),
            _ => Err(OsLogError::InvalidLevel(s.to_string())),
        }
    }
}

impl From<Level> for NativeSeverity {
    fn from(level: Level) -> Self {
        level.native_severity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
        assert!(Level::Debug < Level::Info);
        assert!(Level::Critical > Level::Error);
    }

    #[test]
    fn test_native_severity_table() {
        assert_eq!(Level::Trace.native_severity(), NativeSeverity::Debug);
        assert_eq!(Level::Debug.native_severity(), NativeSeverity::Debug);
        assert_eq!(Level::Info.native_severity(), NativeSeverity::Info);
        assert_eq!(Level::Notice.native_severity(), NativeSeverity::Info);
        assert_eq!(Level::Warning.native_severity(), NativeSeverity::Info);
        assert_eq!(Level::Error.native_severity(), NativeSeverity::Error);
        assert_eq!(Level::Critical.native_severity(), NativeSeverity::Fault);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!(" WARN ".parse::<Level>().unwrap(), Level::Warning);
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(OsLogError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_level_display_roundtrips_through_parse() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_level_serde() {
        let level: Level = serde_json::from_str("\"notice\"").unwrap();
        assert_eq!(level, Level::Notice);
        assert_eq!(serde_json::to_string(&Level::Critical).unwrap(), "\"critical\"");
    }

    #[test]
    fn test_default_level_is_trace() {
        assert_eq!(Level::default(), Level::Trace);
    }
}
