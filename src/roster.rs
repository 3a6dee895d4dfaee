use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::parser::ConstraintRecord;
use crate::schedule::Participant;

/// Ordered participant list plus whatever went wrong building it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub participants: Vec<Participant>,
    pub warnings: Vec<String>,
}

/// Reads one participant name per line, skipping blanks and `#` comments
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() && !name.starts_with('#') {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

pub fn load_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let names = read_names(BufReader::new(File::open(path.as_ref())?))?;
    log::info!("Loaded {} participant names from {}", names.len(), path.as_ref().display());
    Ok(names)
}

fn placeholder_name(position: usize) -> String {
    format!("Student_{}", position + 1)
}

/// Builds the participant list and attaches constraint records by name.
///
/// Without names every participant gets a placeholder name; a short name list
/// is padded up to `total`, a long one is kept whole. Every participant
/// carrying a constrained name gets that restriction.
pub fn build_roster(total: usize, names: Option<Vec<String>>, constraints: &[ConstraintRecord]) -> Roster {
    let mut warnings = Vec::new();

    let mut names = names.unwrap_or_default();
    if !names.is_empty() && names.len() != total {
        warnings.push(format!(
            "Number of participant names ({}) doesn't match total participants ({})",
            names.len(),
            total
        ));
    }
    while names.len() < total {
        names.push(placeholder_name(names.len()));
    }

    let mut by_name: HashMap<&str, &ConstraintRecord> = HashMap::new();
    for record in constraints {
        if let Some(previous) = by_name.insert(record.name.as_str(), record) {
            warnings.push(format!(
                "Constraints line {} repeats '{}' and replaces line {}",
                record.line, record.name, previous.line
            ));
        }
    }

    let participants: Vec<Participant> = names
        .into_iter()
        .enumerate()
        .map(|(id, name)| {
            let mut participant = Participant::unrestricted(id, name);
            if let Some(record) = by_name.get(participant.name.as_str()) {
                participant.allowed_days = record.allowed_days.clone();
                participant.allowed_intervals = record.allowed_intervals.clone();
            }
            participant
        })
        .collect();

    let known: HashSet<&str> = participants.iter().map(|p| p.name.as_str()).collect();
    let mut reported = HashSet::new();
    for record in constraints {
        if !known.contains(record.name.as_str()) && reported.insert(record.name.as_str()) {
            warnings.push(format!(
                "Constraints for '{}' ignored: no such participant",
                record.name
            ));
        }
    }

    for warning in &warnings {
        log::warn!("{}", warning);
    }

    Roster { participants, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Restriction;
    use std::collections::BTreeSet;

    fn record(name: &str, day: u32, line: usize) -> ConstraintRecord {
        ConstraintRecord {
            name: name.to_string(),
            allowed_days: Restriction::Restricted(BTreeSet::from([day])),
            allowed_intervals: Restriction::Unrestricted,
            line,
        }
    }

    #[test]
    fn placeholders_fill_an_empty_roster() {
        let roster = build_roster(3, None, &[]);
        let names: Vec<&str> = roster.participants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Student_1", "Student_2", "Student_3"]);
        assert!(roster.warnings.is_empty());
    }

    #[test]
    fn short_name_list_is_padded_with_a_warning() {
        let roster = build_roster(3, Some(vec!["Ada".to_string()]), &[]);
        assert_eq!(roster.participants[2].name, "Student_3");
        assert_eq!(roster.participants[2].id, 2);
        assert_eq!(roster.warnings.len(), 1);
    }

    #[test]
    fn constraints_attach_to_every_matching_name() {
        let names = vec!["Sam".to_string(), "Kim".to_string(), "Sam".to_string()];
        let roster = build_roster(3, Some(names), &[record("Sam", 2, 1)]);
        assert!(roster.participants[0].is_constrained());
        assert!(!roster.participants[1].is_constrained());
        assert!(roster.participants[2].is_constrained());
    }

    #[test]
    fn unknown_and_repeated_records_are_reported() {
        let records = [record("Kim", 1, 1), record("Kim", 2, 2), record("Ghost", 1, 3)];
        let roster = build_roster(1, Some(vec!["Kim".to_string()]), &records);
        assert_eq!(
            roster.participants[0].allowed_days,
            Restriction::Restricted(BTreeSet::from([2]))
        );
        assert_eq!(roster.warnings.len(), 2);
        assert!(roster.warnings[1].contains("Ghost"));
    }

    #[test]
    fn reads_names_skipping_comments() {
        let names = read_names("# class list\nAda\n\n  Grace  \n".as_bytes()).unwrap();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }
}
