use super::types::{Participant, Restriction, Slot};

/// Whether `participant` may take `slot`.
///
/// Day restrictions match on day id; interval restrictions require the slot to
/// lie entirely inside one allowed interval. A slot that only starts inside an
/// allowed interval is not eligible.
pub fn is_eligible(participant: &Participant, slot: &Slot) -> bool {
    let day_ok = match &participant.allowed_days {
        Restriction::Unrestricted => true,
        Restriction::Restricted(days) => days.contains(&slot.day_id),
    };

    let time_ok = match &participant.allowed_intervals {
        Restriction::Unrestricted => true,
        Restriction::Restricted(intervals) => intervals
            .iter()
            .any(|interval| interval.contains(slot.start_minute, slot.end_minute)),
    };

    day_ok && time_ok
}

/// The slots `participant` may take, in global order
pub fn eligible_slots<'a>(participant: &Participant, slots: &'a [Slot]) -> Vec<&'a Slot> {
    slots.iter().filter(|slot| is_eligible(participant, slot)).collect()
}
