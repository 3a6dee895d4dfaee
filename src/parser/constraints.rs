use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::Result;
use crate::schedule::{DayId, Restriction, TimeInterval};
use super::intervals::parse_interval;

/// Widest `lo-hi` day range a constraint line may name
pub const MAX_DAY_RANGE: u32 = 366;

/// One `Name,AvailableDays,AvailableHours` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintRecord {
    pub name: String,
    pub allowed_days: Restriction<BTreeSet<DayId>>,
    pub allowed_intervals: Restriction<Vec<TimeInterval>>,
    /// 1-based line number in the source
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    pub records: Vec<ConstraintRecord>,
    pub warnings: Vec<String>,
}

/// Loads participant constraints from a file
///
/// A missing file is not an error: everyone is then unrestricted.
pub fn load_constraints<P: AsRef<Path>>(path: P) -> Result<ConstraintSet> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let warning = format!(
                "Constraints file {} not found; all participants are unrestricted",
                path.display()
            );
            log::warn!("{}", warning);
            return Ok(ConstraintSet {
                records: Vec::new(),
                warnings: vec![warning],
            });
        }
        Err(e) => return Err(e.into()),
    };

    let set = parse_constraints(BufReader::new(file))?;
    log::info!(
        "Loaded {} constraint records from {}",
        set.records.len(),
        path.display()
    );
    Ok(set)
}

/// Reads constraint lines; `#` comments and blank lines are ignored and
/// malformed lines are skipped with a warning
pub fn parse_constraints<R: BufRead>(reader: R) -> Result<ConstraintSet> {
    let mut set = ConstraintSet::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_line(trimmed) {
            Ok((name, allowed_days, allowed_intervals)) => set.records.push(ConstraintRecord {
                name,
                allowed_days,
                allowed_intervals,
                line: line_no,
            }),
            Err(reason) => {
                let warning = format!("Constraints line {}: {}; line skipped", line_no, reason);
                log::warn!("{}", warning);
                set.warnings.push(warning);
            }
        }
    }

    Ok(set)
}

type ParsedLine = (String, Restriction<BTreeSet<DayId>>, Restriction<Vec<TimeInterval>>);

fn parse_line(line: &str) -> std::result::Result<ParsedLine, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() > 3 {
        return Err(format!("expected at most 3 fields, found {}", fields.len()));
    }

    let name = fields[0];
    if name.is_empty() {
        return Err("missing participant name".to_string());
    }

    let days = parse_days(fields.get(1).copied().unwrap_or(""))?;
    let hours = parse_hours(fields.get(2).copied().unwrap_or(""))?;

    Ok((name.to_string(), days, hours))
}

/// Empty means any day; otherwise a single id or an inclusive `lo-hi` range
fn parse_days(field: &str) -> std::result::Result<Restriction<BTreeSet<DayId>>, String> {
    if field.is_empty() {
        return Ok(Restriction::Unrestricted);
    }

    let bad = || format!("cannot read available days '{}'", field);

    let days: BTreeSet<DayId> = match field.split_once('-') {
        Some((lo, hi)) => {
            let lo: DayId = lo.trim().parse().map_err(|_| bad())?;
            let hi: DayId = hi.trim().parse().map_err(|_| bad())?;
            if lo > hi {
                return Err(format!("day range '{}' runs backwards", field));
            }
            if hi - lo >= MAX_DAY_RANGE {
                return Err(format!(
                    "day range '{}' spans more than {} days",
                    field, MAX_DAY_RANGE
                ));
            }
            (lo..=hi).collect()
        }
        None => BTreeSet::from([field.parse().map_err(|_| bad())?]),
    };

    Ok(Restriction::Restricted(days))
}

/// Empty means any time; otherwise `;`-separated `HH:MM-HH:MM` ranges
fn parse_hours(field: &str) -> std::result::Result<Restriction<Vec<TimeInterval>>, String> {
    let mut intervals = Vec::new();

    for range in field.split(';').map(str::trim).filter(|r| !r.is_empty()) {
        let interval = parse_interval(range)
            .map_err(|e| format!("available hours '{}': {}", range, e))?;
        intervals.push(interval);
    }

    if intervals.is_empty() {
        Ok(Restriction::Unrestricted)
    } else {
        Ok(Restriction::Restricted(intervals))
    }
}
