use crate::types::Service;
use std::collections::HashSet;

/// At most four services fit into one appointment; over-selection is clamped
/// to the first four accepted, never rejected.
pub const MAX_SERVICES_PER_BOOKING: usize = 4;

/// Deduplicate a selection preserving first-seen order and clamp it to
/// `MAX_SERVICES_PER_BOOKING` entries.
pub fn normalize_selection(selected: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();
    for name in selected {
        if seen.insert(name.as_str()) {
            normalized.push(name.clone());
            if normalized.len() == MAX_SERVICES_PER_BOOKING {
                break;
            }
        }
    }
    normalized
}

/// Total duration in minutes of the catalog entries named in the selection.
/// Names without a catalog entry contribute nothing; an empty selection sums
/// to zero, which callers must reject before searching for a slot.
pub fn total_duration(selected: &[String], catalog: &[Service]) -> i64 {
    catalog
        .iter()
        .filter(|service| selected.iter().any(|name| name == &service.name))
        .map(|service| service.duration_minutes)
        .sum()
}
