use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuggestionKind {
    ReduceSlotDuration,
    AddDay,
    ExtendDailySpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
}

/// Totals and settings the advisor looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityInput {
    pub total_slots: usize,
    pub total_participants: usize,
    pub slot_duration_minutes: u32,
    pub day_count: usize,
    /// Longest bookable time of any single day
    pub daily_span_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityReport {
    pub total_slots: usize,
    pub total_participants: usize,
    pub shortfall: usize,
    pub spare: usize,
    pub suggestions: Vec<Suggestion>,
}

impl CapacityReport {
    pub fn is_sufficient(&self) -> bool {
        self.shortfall == 0
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.suggestions.iter().map(|s| s.message.as_str())
    }
}

/// Compares slot supply with participant demand.
///
/// When demand exceeds supply all three remedies are suggested together;
/// the advisor never says by how much.
pub fn advise(input: CapacityInput) -> CapacityReport {
    let shortfall = input.total_participants.saturating_sub(input.total_slots);
    let spare = input.total_slots.saturating_sub(input.total_participants);

    let suggestions = if shortfall > 0 {
        log::warn!(
            "Not enough slots: need {}, have {} (short by {})",
            input.total_participants,
            input.total_slots,
            shortfall
        );
        vec![
            Suggestion {
                kind: SuggestionKind::ReduceSlotDuration,
                message: format!(
                    "Reduce the time per slot (currently {} minutes)",
                    input.slot_duration_minutes
                ),
            },
            Suggestion {
                kind: SuggestionKind::AddDay,
                message: format!("Add more days (currently {})", input.day_count),
            },
            Suggestion {
                kind: SuggestionKind::ExtendDailySpan,
                message: format!(
                    "Extend the daily hours or add intervals (longest day currently {} minutes)",
                    input.daily_span_minutes
                ),
            },
        ]
    } else {
        log::info!("Sufficient capacity: {} extra slots available", spare);
        Vec::new()
    };

    CapacityReport {
        total_slots: input.total_slots,
        total_participants: input.total_participants,
        shortfall,
        spare,
        suggestions,
    }
}
