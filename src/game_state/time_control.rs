//! Clock configuration parsed from `<base>|<increment>` strings.

use std::str::FromStr;
use std::time::Duration;

use crate::chess_errors::{ChessErrors, ChessResult};

pub const DEFAULT_TIME_CONTROL: &str = "15m|5s";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeControl {
    pub base: Duration,
    pub increment: Duration,
}

impl TimeControl {
    /// Accepts any `humantime` duration on each side of the `|`, e.g. `15m|5s`
    /// or `1h 30m|0s`.
    pub fn parse(text: &str) -> ChessResult<Self> {
        let invalid = || ChessErrors::InvalidTimeControl(text.to_owned());
        let (base, increment) = text.split_once('|').ok_or_else(invalid)?;
        let base = humantime::parse_duration(base.trim()).map_err(|_| invalid())?;
        let increment = humantime::parse_duration(increment.trim()).map_err(|_| invalid())?;
        if base.is_zero() {
            return Err(invalid());
        }
        Ok(Self { base, increment })
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self {
            base: Duration::from_secs(15 * 60),
            increment: Duration::from_secs(5),
        }
    }
}

impl FromStr for TimeControl {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `mm:ss` with hours prepended when needed.
pub fn format_clock(remaining: Duration) -> String {
    let total = remaining.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_string_matches_default_value() {
        let parsed = TimeControl::parse(DEFAULT_TIME_CONTROL).expect("default should parse");
        assert_eq!(parsed, TimeControl::default());
    }

    #[test]
    fn parses_compound_durations() {
        let parsed: TimeControl = "1h 30m|0s".parse().expect("compound base should parse");
        assert_eq!(parsed.base, Duration::from_secs(5400));
        assert_eq!(parsed.increment, Duration::ZERO);
    }

    #[test]
    fn rejects_malformed_strings() {
        for text in ["15m", "abc|5s", "15m|x", "0s|5s"] {
            assert!(
                matches!(TimeControl::parse(text), Err(ChessErrors::InvalidTimeControl(_))),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(Duration::from_secs(905)), "15:05");
        assert_eq!(format_clock(Duration::from_secs(3725)), "1:02:05");
    }
}
