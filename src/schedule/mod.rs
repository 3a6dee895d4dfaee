pub mod types;
pub mod slot_utils;
pub mod grid;
pub mod availability;
pub mod engine;
pub mod capacity;

pub use types::{
    AssignedSlot, Assignment, DayId, DaySpec, Participant, Restriction, ScheduleResult, Slot,
    TimeInterval,
};
pub use slot_utils::{format_range, minutes_to_time_string};
pub use grid::{build_slots, SlotSettings};
pub use availability::{eligible_slots, is_eligible};
pub use engine::assign;
pub use capacity::{advise, CapacityInput, CapacityReport, Suggestion, SuggestionKind};

use crate::config::SchedulerConfig;

/// Capacity figures for `config` against `participant_count` people
pub fn capacity_report(config: &SchedulerConfig, slot_count: usize, participant_count: usize) -> CapacityReport {
    advise(CapacityInput {
        total_slots: slot_count,
        total_participants: participant_count,
        slot_duration_minutes: config.slot_duration_minutes,
        day_count: config.days.len(),
        daily_span_minutes: config.daily_span_minutes(),
    })
}

/// Runs one full scheduling pass: grid, assignment, capacity check.
///
/// Capacity suggestions are appended to the result's warnings after the
/// per-participant ones.
pub fn run_schedule(config: &SchedulerConfig, participants: &[Participant]) -> (ScheduleResult, CapacityReport) {
    let slots = build_slots(&config.days, config.slot_settings());
    log::info!("Generated {} slots across {} days", slots.len(), config.days.len());

    let report = capacity_report(config, slots.len(), participants.len());
    let mut result = assign(&slots, participants);
    result.warnings.extend(report.messages().map(str::to_string));

    (result, report)
}
