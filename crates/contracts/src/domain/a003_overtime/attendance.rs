//! Attendance time arithmetic for overtime entry.

use thiserror::Error;

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time is empty")]
    Empty,
    #[error("invalid time '{0}', expected HH:MM")]
    Format(String),
    #[error("time '{0}' is out of range")]
    OutOfRange(String),
}

/// Parses `HH:MM` or `HH:MM:SS` into minutes since midnight (seconds dropped).
pub fn parse_clock(value: &str) -> Result<u32, TimeParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let mut parts = value.split(':');
    let (Some(h), Some(m)) = (parts.next(), parts.next()) else {
        return Err(TimeParseError::Format(value.to_string()));
    };
    let seconds = parts.next();
    if parts.next().is_some() {
        return Err(TimeParseError::Format(value.to_string()));
    }

    let parse = |s: &str| -> Result<u32, TimeParseError> {
        if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeParseError::Format(value.to_string()));
        }
        s.parse::<u32>()
            .map_err(|_| TimeParseError::Format(value.to_string()))
    };

    let hours = parse(h)?;
    let minutes = parse(m)?;
    if let Some(sec) = seconds {
        if parse(sec)? > 59 {
            return Err(TimeParseError::OutOfRange(value.to_string()));
        }
    }
    if hours > 23 || minutes > 59 {
        return Err(TimeParseError::OutOfRange(value.to_string()));
    }
    Ok(hours * 60 + minutes)
}

/// Worked hours between two clock times.
///
/// When `from` is later than `to` the span crosses midnight and a day is added.
pub fn hours_between(from: &str, to: &str) -> Result<f64, TimeParseError> {
    let start = parse_clock(from)?;
    let end = parse_clock(to)?;
    let minutes = if start > end {
        end + MINUTES_PER_DAY - start
    } else {
        end - start
    };
    Ok(minutes as f64 / 60.0)
}

/// Two-decimal display of an hour count, e.g. `8.5` -> `"8.50"`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_shift() {
        assert_eq!(hours_between("09:00", "17:30"), Ok(8.5));
        assert_eq!(hours_between("08:15", "09:00"), Ok(0.75));
    }

    #[test]
    fn test_overnight_adds_a_day() {
        assert_eq!(hours_between("22:00", "06:00"), Ok(8.0));
        assert_eq!(hours_between("23:30", "00:15"), Ok(0.75));
    }

    #[test]
    fn test_equal_times_are_zero() {
        assert_eq!(hours_between("10:00", "10:00"), Ok(0.0));
    }

    #[test]
    fn test_seconds_are_accepted() {
        assert_eq!(hours_between("09:00:00", "17:30:59"), Ok(8.5));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(hours_between("", "10:00"), Err(TimeParseError::Empty));
        assert!(matches!(hours_between("9am", "10:00"), Err(TimeParseError::Format(_))));
        assert!(matches!(hours_between("24:00", "10:00"), Err(TimeParseError::OutOfRange(_))));
        assert!(matches!(hours_between("10:60", "11:00"), Err(TimeParseError::OutOfRange(_))));
        assert!(matches!(parse_clock("1:2:3:4"), Err(TimeParseError::Format(_))));
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(8.5), "8.50");
        assert_eq!(format_hours(0.0), "0.00");
    }
}
