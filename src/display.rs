use std::io::{self, Write};

use crate::config::SchedulerConfig;
use crate::schedule::{format_range, CapacityReport, Participant, Restriction, ScheduleResult, Slot};

/// Formats a participant label with its roster id
pub fn format_participant(name: &str, id: usize) -> String {
    format!("{} (#{})", name, id)
}

/// Writes the configured days and their intervals
pub fn write_configuration<W: Write>(out: &mut W, config: &SchedulerConfig) -> io::Result<()> {
    writeln!(out, "\n=== CONFIGURATION SUMMARY ===")?;
    writeln!(out, "Total participants: {}", config.total_participants)?;
    writeln!(out, "Slot duration: {} minutes", config.slot_duration_minutes)?;
    writeln!(out, "Break duration: {} minutes", config.break_duration_minutes)?;
    writeln!(out, "Days and schedules:")?;
    for day in &config.days {
        let intervals: Vec<String> = day.intervals().iter().map(ToString::to_string).collect();
        writeln!(out, "  Day {}: {}", day.day_id(), intervals.join(", "))?;
    }
    Ok(())
}

/// Writes the lunch adjustments made to the configured intervals
pub fn write_interval_notes<W: Write>(out: &mut W, notes: &[String]) -> io::Result<()> {
    for note in notes {
        writeln!(out, "  {}", note)?;
    }
    Ok(())
}

/// Lists every constrained participant with the days and hours they accept
pub fn write_constraint_summary<W: Write>(out: &mut W, participants: &[Participant]) -> io::Result<()> {
    let constrained: Vec<&Participant> = participants.iter().filter(|p| p.is_constrained()).collect();

    writeln!(out, "\n=== CONSTRAINT ANALYSIS ===")?;
    writeln!(out, "Participants with constraints: {}", constrained.len())?;
    for participant in constrained {
        writeln!(out, "  {}:", format_participant(&participant.name, participant.id))?;
        if let Restriction::Restricted(days) = &participant.allowed_days {
            let days: Vec<String> = days.iter().map(ToString::to_string).collect();
            writeln!(out, "    Available days: {}", days.join(", "))?;
        }
        if let Restriction::Restricted(intervals) = &participant.allowed_intervals {
            let hours: Vec<String> = intervals.iter().map(ToString::to_string).collect();
            writeln!(out, "    Available hours: {}", hours.join("; "))?;
        }
    }
    Ok(())
}

/// Writes the capacity verdict, with suggestions when slots run short
pub fn write_capacity_report<W: Write>(out: &mut W, report: &CapacityReport) -> io::Result<()> {
    writeln!(out, "Total available slots: {}", report.total_slots)?;

    if report.is_sufficient() {
        writeln!(out, "✅ Sufficient capacity: {} extra slots available", report.spare)?;
        return Ok(());
    }

    writeln!(out, "\n❌ WARNING: Not enough slots available!")?;
    writeln!(out, "   Need: {} slots", report.total_participants)?;
    writeln!(out, "   Have: {} slots", report.total_slots)?;
    writeln!(out, "   Shortage: {} slots", report.shortfall)?;
    writeln!(out, "\nSuggestions:")?;
    for message in report.messages() {
        writeln!(out, "- {}", message)?;
    }
    Ok(())
}

/// Writes the schedule grouped by day, every slot on its own line
pub fn write_schedule_summary<W: Write>(
    out: &mut W,
    config: &SchedulerConfig,
    result: &ScheduleResult,
) -> io::Result<()> {
    writeln!(out, "\n=== PRESENTATION SCHEDULE SUMMARY ===")?;
    writeln!(out, "Total participants: {}", config.total_participants)?;
    writeln!(out, "Total assigned slots: {}", result.assignment.len())?;
    writeln!(out, "Slot duration: {} minutes", config.slot_duration_minutes)?;

    // Assigned and unused slots together make up the whole grid
    let mut all_slots: Vec<&Slot> = result
        .assignment
        .iter()
        .map(|entry| &entry.slot)
        .chain(result.unused_slots.iter())
        .collect();
    all_slots.sort_by_key(|slot| slot.index);

    for day in &config.days {
        let day_slots: Vec<&&Slot> = all_slots.iter().filter(|s| s.day_id == day.day_id()).collect();
        writeln!(out, "\nDay {}: {} slots", day.day_id(), day_slots.len())?;
        for slot in day_slots {
            let status = result
                .assignment
                .participant_for_slot(slot.index)
                .map(|p| format_participant(&p.name, p.id))
                .unwrap_or_else(|| "AVAILABLE".to_string());
            writeln!(out, "  {}: {}", format_range(slot.start_minute, slot.end_minute), status)?;
        }
    }

    if !result.unassigned_participants.is_empty() {
        writeln!(out, "\n⚠️  Unassigned participants ({}):", result.unassigned_participants.len())?;
        for participant in &result.unassigned_participants {
            writeln!(out, "  - {}", format_participant(&participant.name, participant.id))?;
        }
    }

    if !result.warnings.is_empty() {
        writeln!(out, "\nWarnings:")?;
        for warning in &result.warnings {
            writeln!(out, "  - {}", warning)?;
        }
    }

    Ok(())
}

/// Prints the schedule summary to stdout
pub fn print_schedule_summary(config: &SchedulerConfig, result: &ScheduleResult) -> io::Result<()> {
    write_schedule_summary(&mut io::stdout().lock(), config, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::schedule::{assign, build_slots, DaySpec, TimeInterval};

    fn config() -> SchedulerConfig {
        let day = DaySpec::new(1, vec![TimeInterval::new(540, 570).unwrap()]).unwrap();
        SchedulerConfig::new(2, 10, 0, vec![day]).unwrap()
    }

    #[test]
    fn summary_lists_every_slot_of_the_day() {
        let config = config();
        let slots = build_slots(&config.days, config.slot_settings());
        let participants = vec![Participant::unrestricted(0, "Ada"), Participant::unrestricted(1, "Grace")];
        let result = assign(&slots, &participants);

        let mut out = Vec::new();
        write_schedule_summary(&mut out, &config, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Day 1: 3 slots"));
        assert!(text.contains("  09:00-09:10: Ada (#0)"));
        assert!(text.contains("  09:10-09:20: Grace (#1)"));
        assert!(text.contains("  09:20-09:30: AVAILABLE"));
    }

    #[test]
    fn duplicate_names_are_told_apart_by_id() {
        let config = config();
        let slots = build_slots(&config.days, config.slot_settings());
        let participants = vec![Participant::unrestricted(0, "Sam"), Participant::unrestricted(1, "Sam")];
        let result = assign(&slots, &participants);

        let mut out = Vec::new();
        write_schedule_summary(&mut out, &config, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("09:00-09:10: Sam (#0)"));
        assert!(text.contains("09:10-09:20: Sam (#1)"));
    }

    #[test]
    fn interval_notes_are_indented_under_the_configuration() {
        let mut out = Vec::new();
        write_interval_notes(&mut out, &["Day 1: Adjusted for lunch break".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  Day 1: Adjusted for lunch break\n");
    }

    #[test]
    fn constraint_summary_lists_only_restricted_participants() {
        let mut early = Participant::unrestricted(0, "Ada");
        early.allowed_days = Restriction::Restricted(BTreeSet::from([1, 2]));
        early.allowed_intervals = Restriction::Restricted(vec![
            TimeInterval::new(540, 720).unwrap(),
            TimeInterval::new(840, 960).unwrap(),
        ]);
        let mut owl = Participant::unrestricted(2, "Owl");
        owl.allowed_intervals = Restriction::Restricted(vec![TimeInterval::new(1080, 1200).unwrap()]);
        let participants = vec![early, Participant::unrestricted(1, "Grace"), owl];

        let mut out = Vec::new();
        write_constraint_summary(&mut out, &participants).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Participants with constraints: 2"));
        assert!(text.contains("  Ada (#0):\n    Available days: 1, 2\n    Available hours: 09:00-12:00; 14:00-16:00"));
        assert!(text.contains("  Owl (#2):\n    Available hours: 18:00-20:00"));
        assert!(!text.contains("Grace"));
        assert!(!text.contains("Owl (#2):\n    Available days"));
    }
}
