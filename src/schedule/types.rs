use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, IntervalError};
use super::slot_utils::{format_range, minutes_to_time_string, MINUTES_PER_DAY};

pub type DayId = u32;

/// Half-open range `[start, end)` of minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimeInterval {
    start: u32,
    end: u32,
}

impl TimeInterval {
    pub fn new(start: u32, end: u32) -> Result<Self, IntervalError> {
        if end > MINUTES_PER_DAY {
            return Err(IntervalError::OutOfDay(end));
        }
        if start >= end {
            return Err(IntervalError::Reversed {
                start: minutes_to_time_string(start),
                end: minutes_to_time_string(end),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// True when `[start, end)` lies entirely inside this interval
    pub fn contains(&self, start: u32, end: u32) -> bool {
        start >= self.start && end <= self.end
    }

    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_range(self.start, self.end))
    }
}

/// The bookable intervals of one day, sorted by start and pairwise disjoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySpec {
    day_id: DayId,
    intervals: Vec<TimeInterval>,
}

impl DaySpec {
    pub fn new(day_id: DayId, mut intervals: Vec<TimeInterval>) -> Result<Self, Error> {
        intervals.sort();
        if let Some(pair) = intervals.windows(2).find(|w| w[0].overlaps(&w[1])) {
            return Err(Error::Configuration(format!(
                "Day {} has overlapping intervals {} and {}",
                day_id, pair[0], pair[1]
            )));
        }
        Ok(Self { day_id, intervals })
    }

    pub fn day_id(&self) -> DayId {
        self.day_id
    }

    pub fn intervals(&self) -> &[TimeInterval] {
        &self.intervals
    }

    /// Sum of all interval lengths on this day
    pub fn span_minutes(&self) -> u32 {
        self.intervals.iter().map(TimeInterval::duration_minutes).sum()
    }
}

/// A bookable unit produced by the grid builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    pub day_id: DayId,
    pub start_minute: u32,
    pub end_minute: u32,
    /// Global position in (day order, start time) order
    pub index: usize,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", self.day_id, format_range(self.start_minute, self.end_minute))
    }
}

/// Either "any" or an explicit allow-list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Restriction<T> {
    Unrestricted,
    Restricted(T),
}

impl<T> Restriction<T> {
    pub fn is_restricted(&self) -> bool {
        matches!(self, Restriction::Restricted(_))
    }
}

impl<T> Default for Restriction<T> {
    fn default() -> Self {
        Restriction::Unrestricted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    /// Position in the roster; names may repeat, ids never do
    pub id: usize,
    pub name: String,
    pub allowed_days: Restriction<BTreeSet<DayId>>,
    pub allowed_intervals: Restriction<Vec<TimeInterval>>,
}

impl Participant {
    pub fn unrestricted(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            allowed_days: Restriction::Unrestricted,
            allowed_intervals: Restriction::Unrestricted,
        }
    }

    /// Constrained participants are served before everyone else
    pub fn is_constrained(&self) -> bool {
        self.allowed_days.is_restricted() || self.allowed_intervals.is_restricted()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedSlot {
    pub slot: Slot,
    pub participant: Participant,
}

/// One-to-one pairing of slots and participants, ordered by slot index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
    entries: Vec<AssignedSlot>,
}

impl Assignment {
    pub(crate) fn from_entries(mut entries: Vec<AssignedSlot>) -> Self {
        entries.sort_by_key(|e| e.slot.index);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssignedSlot> {
        self.entries.iter()
    }

    pub fn participant_for_slot(&self, slot_index: usize) -> Option<&Participant> {
        self.entries
            .iter()
            .find(|e| e.slot.index == slot_index)
            .map(|e| &e.participant)
    }

    pub fn slot_for_participant(&self, participant_id: usize) -> Option<&Slot> {
        self.entries
            .iter()
            .find(|e| e.participant.id == participant_id)
            .map(|e| &e.slot)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    pub assignment: Assignment,
    pub unassigned_participants: Vec<Participant>,
    pub unused_slots: Vec<Slot>,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u32, end: u32) -> TimeInterval {
        TimeInterval::new(start, end).unwrap()
    }

    #[test]
    fn interval_requires_start_before_end() {
        assert!(matches!(
            TimeInterval::new(600, 600),
            Err(IntervalError::Reversed { .. })
        ));
        assert!(matches!(
            TimeInterval::new(600, MINUTES_PER_DAY + 1),
            Err(IntervalError::OutOfDay(_))
        ));
    }

    #[test]
    fn containment_is_inclusive_at_both_edges() {
        let morning = iv(540, 720);
        assert!(morning.contains(540, 550));
        assert!(morning.contains(710, 720));
        assert!(!morning.contains(715, 725));
    }

    #[test]
    fn day_spec_sorts_and_rejects_overlaps() {
        let day = DaySpec::new(1, vec![iv(780, 960), iv(540, 720)]).unwrap();
        assert_eq!(day.intervals()[0], iv(540, 720));
        assert_eq!(day.span_minutes(), 360);

        let err = DaySpec::new(1, vec![iv(540, 720), iv(700, 800)]);
        assert!(matches!(err, Err(Error::Configuration(_))));
    }

    #[test]
    fn name_only_participant_is_unconstrained() {
        let mut p = Participant::unrestricted(0, "Ada");
        assert!(!p.is_constrained());
        p.allowed_days = Restriction::Restricted(BTreeSet::from([2]));
        assert!(p.is_constrained());
    }
}
