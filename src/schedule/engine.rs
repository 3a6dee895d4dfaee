use std::collections::{HashMap, HashSet};

use super::availability::eligible_slots;
use super::types::{AssignedSlot, Assignment, DayId, Participant, ScheduleResult, Slot};

/// Assigns participants to slots with the two-phase greedy policy.
///
/// Constrained participants go first, then everyone else, each group in input
/// order. Every participant takes the free eligible slot whose day currently
/// holds the fewest assignments, earliest slot index on ties. Participants
/// without a free eligible slot end up in `unassigned_participants`; that is
/// reported, never an error. The inputs are not modified and the result is
/// fully determined by their order.
pub fn assign(slots: &[Slot], participants: &[Participant]) -> ScheduleResult {
    let (constrained, unconstrained): (Vec<&Participant>, Vec<&Participant>) =
        participants.iter().partition(|p| p.is_constrained());

    let mut taken: HashSet<usize> = HashSet::new();
    let mut day_load: HashMap<DayId, usize> = HashMap::new();
    let mut entries = Vec::new();
    let mut unassigned = Vec::new();
    let mut warnings = Vec::new();

    for participant in constrained {
        let free = eligible_slots(participant, slots)
            .into_iter()
            .filter(|slot| !taken.contains(&slot.index));

        match pick_balanced(free, &day_load) {
            Some(slot) => book(slot, participant, &mut taken, &mut day_load, &mut entries),
            None => {
                warnings.push(format!(
                    "{} (#{}) has no free slot within their availability",
                    participant.name, participant.id
                ));
                unassigned.push(participant.clone());
            }
        }
    }

    // Unrestricted participants may take any slot that is still free
    for participant in unconstrained {
        let free = slots.iter().filter(|slot| !taken.contains(&slot.index));

        match pick_balanced(free, &day_load) {
            Some(slot) => book(slot, participant, &mut taken, &mut day_load, &mut entries),
            None => {
                warnings.push(format!(
                    "{} (#{}) could not be scheduled: no slots left",
                    participant.name, participant.id
                ));
                unassigned.push(participant.clone());
            }
        }
    }

    let unused_slots: Vec<Slot> = slots
        .iter()
        .filter(|slot| !taken.contains(&slot.index))
        .copied()
        .collect();

    log::info!(
        "Assigned {} of {} participants, {} slots unused",
        entries.len(),
        participants.len(),
        unused_slots.len()
    );

    ScheduleResult {
        assignment: Assignment::from_entries(entries),
        unassigned_participants: unassigned,
        unused_slots,
        warnings,
    }
}

/// Day with the lowest running load wins, then the earliest slot
fn pick_balanced<'a>(
    candidates: impl Iterator<Item = &'a Slot>,
    day_load: &HashMap<DayId, usize>,
) -> Option<&'a Slot> {
    candidates.min_by_key(|slot| (day_load.get(&slot.day_id).copied().unwrap_or(0), slot.index))
}

fn book(
    slot: &Slot,
    participant: &Participant,
    taken: &mut HashSet<usize>,
    day_load: &mut HashMap<DayId, usize>,
    entries: &mut Vec<AssignedSlot>,
) {
    log::debug!("{} (#{}) -> {}", participant.name, participant.id, slot);
    taken.insert(slot.index);
    *day_load.entry(slot.day_id).or_insert(0) += 1;
    entries.push(AssignedSlot {
        slot: *slot,
        participant: participant.clone(),
    });
}
