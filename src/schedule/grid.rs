use serde::Serialize;

use super::types::{DaySpec, Slot};

/// Process-wide slot geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotSettings {
    pub slot_duration_minutes: u32,
    pub break_duration_minutes: u32,
}

/// Carves every configured interval into fixed-length slots.
///
/// Within an interval the cursor starts at the interval start and advances by
/// `slot_duration + break_duration`; a slot is emitted only when it ends at or
/// before the interval end, so intervals shorter than one slot contribute
/// nothing. Indices increase in day order, then start-time order.
pub fn build_slots(days: &[DaySpec], settings: SlotSettings) -> Vec<Slot> {
    let step = settings
        .slot_duration_minutes
        .saturating_add(settings.break_duration_minutes);
    let mut slots = Vec::new();

    // A zero duration would never advance the cursor
    if settings.slot_duration_minutes == 0 {
        return slots;
    }

    for day in days {
        let before = slots.len();
        for interval in day.intervals() {
            let mut cursor = interval.start();
            while let Some(end) = cursor
                .checked_add(settings.slot_duration_minutes)
                .filter(|&end| end <= interval.end())
            {
                slots.push(Slot {
                    day_id: day.day_id(),
                    start_minute: cursor,
                    end_minute: end,
                    index: slots.len(),
                });
                match cursor.checked_add(step) {
                    Some(next) => cursor = next,
                    None => break,
                }
            }
        }
        log::debug!("Day {}: generated {} slots", day.day_id(), slots.len() - before);
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::TimeInterval;

    fn day(id: u32, ranges: &[(u32, u32)]) -> DaySpec {
        let intervals = ranges
            .iter()
            .map(|&(s, e)| TimeInterval::new(s, e).unwrap())
            .collect();
        DaySpec::new(id, intervals).unwrap()
    }

    fn settings(duration: u32, pause: u32) -> SlotSettings {
        SlotSettings {
            slot_duration_minutes: duration,
            break_duration_minutes: pause,
        }
    }

    #[test]
    fn thirty_minutes_make_three_ten_minute_slots() {
        let slots = build_slots(&[day(1, &[(540, 570)])], settings(10, 0));
        let starts: Vec<(u32, u32)> = slots.iter().map(|s| (s.start_minute, s.end_minute)).collect();
        assert_eq!(starts, vec![(540, 550), (550, 560), (560, 570)]);
    }

    #[test]
    fn breaks_separate_slots_and_no_short_slot_is_emitted() {
        // 09:00-10:00 with 15 + 5: 09:00, 09:20, 09:40 (ends 09:55)
        let slots = build_slots(&[day(1, &[(540, 600)])], settings(15, 5));
        let starts: Vec<u32> = slots.iter().map(|s| s.start_minute).collect();
        assert_eq!(starts, vec![540, 560, 580]);
        assert!(slots.iter().all(|s| s.end_minute <= 600));
    }

    #[test]
    fn short_interval_and_empty_day_yield_nothing() {
        let days = [day(1, &[(540, 545)]), day(2, &[])];
        assert!(build_slots(&days, settings(10, 0)).is_empty());
    }

    #[test]
    fn indices_follow_day_then_start_order() {
        let days = [day(2, &[(540, 560), (780, 790)]), day(1, &[(600, 610)])];
        let slots = build_slots(&days, settings(10, 0));
        let order: Vec<(u32, u32, usize)> =
            slots.iter().map(|s| (s.day_id, s.start_minute, s.index)).collect();
        assert_eq!(order, vec![(2, 540, 0), (2, 550, 1), (2, 780, 2), (1, 600, 3)]);
    }

    #[test]
    fn huge_durations_emit_nothing_instead_of_wrapping() {
        let days = [day(1, &[(540, 600)])];
        assert!(build_slots(&days, settings(u32::MAX - 100, 0)).is_empty());

        // One slot fits; the next cursor step would overflow
        let slots = build_slots(&days, settings(10, u32::MAX - 5));
        assert_eq!(slots.len(), 1);
        assert_eq!((slots[0].start_minute, slots[0].end_minute), (540, 550));
    }

    #[test]
    fn lunch_split_day_yields_thirty_six_slots() {
        let slots = build_slots(&[day(1, &[(540, 720), (780, 960)])], settings(10, 0));
        assert_eq!(slots.len(), 36);
        assert!(slots.iter().all(|s| s.end_minute <= 720 || s.start_minute >= 780));
    }
}
