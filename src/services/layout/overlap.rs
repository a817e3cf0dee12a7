//! Overlap detection and greedy lane packing for one day column.

use crate::models::layout::{DisplayEvent, Lane};

/// Half-open interval overlap: touching endpoints do not count.
pub fn overlaps(a: &DisplayEvent, b: &DisplayEvent) -> bool {
    a.start_minutes() < b.end_minutes() && b.start_minutes() < a.end_minutes()
}

/// Greedy first-fit packing into non-overlapping lanes.
///
/// Events are taken in the order given and each goes into the first lane
/// holding nothing it overlaps, opening a new lane when none fits. The lane
/// count is minimal only for input sorted by start time; other orders can
/// use more lanes than necessary. Rendering depends on this exact placement,
/// so it is not replaced by an optimal interval colouring.
pub fn pack_into_lanes<I>(events: I) -> Vec<Lane>
where
    I: IntoIterator<Item = DisplayEvent>,
{
    let mut lanes: Vec<Lane> = Vec::new();

    for event in events {
        match lanes
            .iter_mut()
            .find(|lane| !lane.iter().any(|placed| overlaps(placed, &event)))
        {
            Some(lane) => lane.push(event),
            None => {
                let mut lane = Lane::new();
                lane.push(event);
                lanes.push(lane);
            }
        }
    }

    lanes
}
