use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses a clock token (`9`, `09`, `9:30`, `09:30`) to minutes since midnight
pub fn parse_clock(token: &str) -> Option<u32> {
    let token = token.trim();
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return None;
    }

    // A bare hour means the top of that hour
    let normalized = if token.contains(':') {
        token.to_string()
    } else {
        format!("{}:00", token)
    };

    let time = NaiveTime::parse_from_str(&normalized, "%H:%M").ok()?;
    Some(time.hour() * 60 + time.minute())
}

/// Formats minutes since midnight to time string (HH:MM)
pub fn minutes_to_time_string(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a start/end pair as `HH:MM-HH:MM`
pub fn format_range(start: u32, end: u32) -> String {
    format!("{}-{}", minutes_to_time_string(start), minutes_to_time_string(end))
}
