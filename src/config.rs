use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::parser::parse_time_intervals;
use crate::schedule::slot_utils::MINUTES_PER_DAY;
use crate::schedule::{DayId, DaySpec, SlotSettings};

/// Messages gathered while reading the per-day interval text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalMessages {
    /// Skipped tokens
    pub warnings: Vec<String>,
    /// Lunch adjustments
    pub notes: Vec<String>,
}

/// Validated scheduler settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulerConfig {
    pub total_participants: usize,
    pub slot_duration_minutes: u32,
    pub break_duration_minutes: u32,
    pub days: Vec<DaySpec>,
}

impl SchedulerConfig {
    /// Builds a config, rejecting anything the scheduler cannot run with
    pub fn new(
        total_participants: usize,
        slot_duration_minutes: u32,
        break_duration_minutes: u32,
        days: Vec<DaySpec>,
    ) -> Result<Self> {
        let config = Self {
            total_participants,
            slot_duration_minutes,
            break_duration_minutes,
            days,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from one interval text per day, days numbered from 1.
    ///
    /// Returns the config together with the skipped-token warnings and lunch
    /// notes, each prefixed with its day.
    pub fn from_interval_text<S: AsRef<str>>(
        total_participants: usize,
        slot_duration_minutes: u32,
        break_duration_minutes: u32,
        day_specs: &[S],
    ) -> Result<(Self, IntervalMessages)> {
        let mut days = Vec::with_capacity(day_specs.len());
        let mut messages = IntervalMessages::default();

        for (position, spec) in day_specs.iter().enumerate() {
            let day_id = position as DayId + 1;
            let parsed = parse_time_intervals(spec.as_ref()).map_err(|e| match e {
                Error::Configuration(msg) => Error::Configuration(format!("Day {}: {}", day_id, msg)),
                other => other,
            })?;
            if parsed.intervals.is_empty() {
                log::warn!("Day {} has no usable time intervals", day_id);
            }
            messages
                .warnings
                .extend(parsed.warnings.into_iter().map(|w| format!("Day {}: {}", day_id, w)));
            messages
                .notes
                .extend(parsed.notes.into_iter().map(|n| format!("Day {}: {}", day_id, n)));
            days.push(DaySpec::new(day_id, parsed.intervals)?);
        }

        let config = Self::new(total_participants, slot_duration_minutes, break_duration_minutes, days)?;
        Ok((config, messages))
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_participants == 0 {
            return Err(Error::Configuration(
                "number of participants must be positive".to_string(),
            ));
        }
        if self.slot_duration_minutes == 0 {
            return Err(Error::Configuration(
                "slot duration must be positive".to_string(),
            ));
        }
        if self.slot_duration_minutes > MINUTES_PER_DAY {
            return Err(Error::Configuration(format!(
                "slot duration of {} minutes is longer than a day",
                self.slot_duration_minutes
            )));
        }
        if self.break_duration_minutes > MINUTES_PER_DAY {
            return Err(Error::Configuration(format!(
                "break duration of {} minutes is longer than a day",
                self.break_duration_minutes
            )));
        }
        if self.days.is_empty() {
            return Err(Error::Configuration("at least one day is required".to_string()));
        }

        let mut seen = HashSet::new();
        for day in &self.days {
            if !seen.insert(day.day_id()) {
                return Err(Error::Configuration(format!(
                    "day {} is configured more than once",
                    day.day_id()
                )));
            }
        }

        Ok(())
    }

    pub fn slot_settings(&self) -> SlotSettings {
        SlotSettings {
            slot_duration_minutes: self.slot_duration_minutes,
            break_duration_minutes: self.break_duration_minutes,
        }
    }

    /// Longest bookable time of any configured day
    pub fn daily_span_minutes(&self) -> u32 {
        self.days.iter().map(DaySpec::span_minutes).max().unwrap_or(0)
    }
}
