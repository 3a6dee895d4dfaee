use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::schedule::{minutes_to_time_string, ScheduleResult};

pub const CSV_HEADER: [&str; 5] = [
    "Day",
    "Start Time",
    "End Time",
    "Participant Name",
    "Duration(minutes)",
];

/// Writes one CSV row per assigned slot, ordered by day then start time
///
/// # Arguments
/// * `writer` - Destination for the CSV text
/// * `config` - Supplies the day order and the slot duration column
/// * `result` - The finished schedule
pub fn write_schedule_csv<W: Write>(writer: W, config: &SchedulerConfig, result: &ScheduleResult) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    let duration = config.slot_duration_minutes.to_string();

    // Slot indices already follow day order, then start time
    for entry in result.assignment.iter() {
        wtr.write_record([
            format!("Day {}", entry.slot.day_id),
            minutes_to_time_string(entry.slot.start_minute),
            minutes_to_time_string(entry.slot.end_minute),
            entry.participant.name.clone(),
            duration.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the schedule to a CSV file
pub fn export_schedule_csv(path: &Path, config: &SchedulerConfig, result: &ScheduleResult) -> Result<()> {
    write_schedule_csv(File::create(path)?, config, result)?;
    log::info!("Schedule exported to {}", path.display());
    Ok(())
}

/// Exports the whole result, warnings included, as pretty JSON
pub fn export_result_json(path: &Path, result: &ScheduleResult) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, result)?;
    log::info!("Schedule result written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{assign, build_slots, DaySpec, Participant, TimeInterval};

    #[test]
    fn csv_has_header_and_one_row_per_assignment() {
        let days = vec![
            DaySpec::new(1, vec![TimeInterval::new(540, 560).unwrap()]).unwrap(),
            DaySpec::new(2, vec![TimeInterval::new(600, 610).unwrap()]).unwrap(),
        ];
        let config = SchedulerConfig::new(2, 10, 0, days).unwrap();
        let slots = build_slots(&config.days, config.slot_settings());
        let participants = vec![Participant::unrestricted(0, "Ada"), Participant::unrestricted(1, "Grace, Jr.")];
        let result = assign(&slots, &participants);

        let mut out = Vec::new();
        write_schedule_csv(&mut out, &config, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Day,Start Time,End Time,Participant Name,Duration(minutes)");
        assert_eq!(lines[1], "Day 1,09:00,09:10,Ada,10");
        assert_eq!(lines[2], "Day 2,10:00,10:10,\"Grace, Jr.\",10");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn json_export_keeps_unassigned_and_warnings() {
        let slots = build_slots(
            &[DaySpec::new(1, vec![TimeInterval::new(540, 550).unwrap()]).unwrap()],
            crate::schedule::SlotSettings {
                slot_duration_minutes: 10,
                break_duration_minutes: 0,
            },
        );
        let participants = vec![Participant::unrestricted(0, "Ada"), Participant::unrestricted(1, "Grace")];
        let result = assign(&slots, &participants);

        let path = std::env::temp_dir().join("timeslot_scheduler_export_test.json");
        export_result_json(&path, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(value["unassigned_participants"][0]["name"], "Grace");
        assert_eq!(value["assignment"]["entries"][0]["slot"]["start_minute"], 540);
        assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
    }
}
