use crate::error::{Error, IntervalError, Result};
use crate::schedule::slot_utils::parse_clock;
use crate::schedule::TimeInterval;

/// Lunch hour, 12:00-13:00; no slot may cover any part of it
pub const LUNCH_START: u32 = 12 * 60;
pub const LUNCH_END: u32 = 13 * 60;

/// Outcome of reading one day's interval text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedIntervals {
    pub intervals: Vec<TimeInterval>,
    /// Lunch adjustments, informational only
    pub notes: Vec<String>,
    /// Tokens that were skipped
    pub warnings: Vec<String>,
}

/// Parses one `start-end` token such as `9-16` or `08:30-11:30`
pub fn parse_interval(token: &str) -> std::result::Result<TimeInterval, IntervalError> {
    let token = token.trim();
    let (start_str, end_str) = token
        .split_once('-')
        .ok_or_else(|| IntervalError::Malformed(token.to_string()))?;

    let start = parse_clock(start_str).ok_or_else(|| IntervalError::Malformed(token.to_string()))?;
    let end = parse_clock(end_str).ok_or_else(|| IntervalError::Malformed(token.to_string()))?;

    TimeInterval::new(start, end)
}

/// Removes the lunch hour from `interval`.
///
/// An interval spanning lunch becomes a morning and an afternoon part; one
/// touching only one side keeps the part outside lunch; one lying inside
/// lunch disappears.
pub fn split_for_lunch(interval: TimeInterval) -> Vec<TimeInterval> {
    let lunch_overlap = interval.start() < LUNCH_END && interval.end() > LUNCH_START;
    if !lunch_overlap {
        return vec![interval];
    }

    let mut parts = Vec::new();
    if interval.start() < LUNCH_START {
        parts.extend(TimeInterval::new(interval.start(), LUNCH_START).ok());
    }
    if interval.end() > LUNCH_END {
        parts.extend(TimeInterval::new(LUNCH_END, interval.end()).ok());
    }
    parts
}

/// Parses a comma-separated list of ranges, e.g. `9-16` or `8:30-11:30,14-17`.
///
/// Unreadable tokens are skipped with a warning. A range whose start is not
/// before its end, or empty text, is a configuration error.
pub fn parse_time_intervals(text: &str) -> Result<ParsedIntervals> {
    if text.trim().is_empty() {
        return Err(Error::Configuration("no time intervals given".to_string()));
    }

    let mut parsed = ParsedIntervals::default();

    for part in text.split(',').map(str::trim) {
        if part.is_empty() {
            continue;
        }

        let interval = match parse_interval(part) {
            Ok(interval) => interval,
            Err(IntervalError::Malformed(token)) => {
                let warning = format!("Skipping unreadable time range '{}'", token);
                log::warn!("{}", warning);
                parsed.warnings.push(warning);
                continue;
            }
            Err(e) => {
                return Err(Error::Configuration(format!("time range '{}': {}", part, e)));
            }
        };

        let pieces = split_for_lunch(interval);
        if pieces != [interval] {
            let adjusted: Vec<String> = pieces.iter().map(ToString::to_string).collect();
            let note = if adjusted.is_empty() {
                format!("Dropped {}: it falls within the lunch break", interval)
            } else {
                format!("Adjusted for lunch break: {} -> {}", interval, adjusted.join(", "))
            };
            log::info!("{}", note);
            parsed.notes.push(note);
        }
        parsed.intervals.extend(pieces);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u32, end: u32) -> TimeInterval {
        TimeInterval::new(start, end).unwrap()
    }

    #[test]
    fn reads_short_and_long_forms() {
        let parsed = parse_time_intervals("8:30-11:30, 14-17").unwrap();
        assert_eq!(parsed.intervals, vec![iv(510, 690), iv(840, 1020)]);
        assert!(parsed.notes.is_empty());
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn full_day_is_split_around_lunch() {
        let parsed = parse_time_intervals("9-16").unwrap();
        assert_eq!(parsed.intervals, vec![iv(540, 720), iv(780, 960)]);
        assert_eq!(parsed.notes.len(), 1);
    }

    #[test]
    fn morning_ending_at_one_keeps_only_the_morning() {
        let parsed = parse_time_intervals("09:00-13:00").unwrap();
        assert_eq!(parsed.intervals, vec![iv(540, 720)]);
    }

    #[test]
    fn afternoon_starting_in_lunch_is_trimmed() {
        assert_eq!(split_for_lunch(iv(750, 900)), vec![iv(780, 900)]);
        assert!(split_for_lunch(iv(735, 765)).is_empty());
        assert_eq!(split_for_lunch(iv(600, 720)), vec![iv(600, 720)]);
    }

    #[test]
    fn unreadable_token_is_a_warning() {
        let parsed = parse_time_intervals("9-11, lunch, 14-15").unwrap();
        assert_eq!(parsed.intervals, vec![iv(540, 660), iv(840, 900)]);
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn reversed_range_is_a_configuration_error() {
        assert!(matches!(parse_time_intervals("16-9"), Err(Error::Configuration(_))));
        assert!(matches!(parse_time_intervals("   "), Err(Error::Configuration(_))));
    }
}
