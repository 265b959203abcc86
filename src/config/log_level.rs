use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::error;
use tracing::level_filters::LevelFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only configuration failures.
    Error,
    /// Dropped or suspicious configuration entries.
    #[default]
    Warn,
    /// Filter construction summaries.
    Info,
    /// Per-point drop decisions.
    Debug,
    /// Everything.
    Trace,
}

const NAMES: [(&str, LogLevel); 5] = [
    ("error", LogLevel::Error),
    ("warn", LogLevel::Warn),
    ("info", LogLevel::Info),
    ("debug", LogLevel::Debug),
    ("trace", LogLevel::Trace),
];

impl LogLevel {
    #[must_use]
    pub fn as_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(_, level)| *level)
            .ok_or_else(|| {
                let known: Vec<&str> = NAMES.iter().map(|(name, _)| *name).collect();
                format!("unknown log level '{s}', expected one of {}", known.join(", "))
            })
    }
}

/// Never fails: an unusable level is logged and replaced by the default.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match Value::deserialize(deserializer)? {
            Value::String(s) => s.parse::<LogLevel>(),
            other => Err(format!("log level must be a string, got {other}")),
        };

        Ok(parsed.unwrap_or_else(|e| {
            error!("CONFIG | {e}, falling back to warn");
            LogLevel::default()
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str(" info\n").unwrap(), LogLevel::Info);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = LogLevel::from_str("loud").unwrap_err();
        assert_eq!(
            err,
            "unknown log level 'loud', expected one of error, warn, info, debug, trace"
        );
    }

    #[test]
    fn test_deserialize_falls_back_to_warn() {
        let level: LogLevel = serde_json::from_value(json!("loud")).unwrap();
        assert_eq!(level, LogLevel::Warn);
        let level: LogLevel = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(level, LogLevel::Warn);
        let level: LogLevel = serde_json::from_value(json!("error")).unwrap();
        assert_eq!(level, LogLevel::Error);
    }

    #[test]
    fn test_as_level_filter() {
        for (name, level) in NAMES {
            assert_eq!(level.as_level_filter().to_string(), name);
        }
    }
}
