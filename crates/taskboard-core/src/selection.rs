// ── Selection resolution ──
//
// Picks the selected board after the board set changed underneath it.

use indexmap::IndexMap;

use crate::model::BoardId;

/// Return the first candidate present in `available`, else the first
/// available board in snapshot order, else `None`.
///
/// The fallback is the front of the ordered map, so the result is
/// deterministic for a given snapshot.
pub fn resolve_selection<V>(
    candidates: impl IntoIterator<Item = BoardId>,
    available: &IndexMap<BoardId, V>,
) -> Option<BoardId> {
    candidates
        .into_iter()
        .find(|id| available.contains_key(id))
        .or_else(|| available.first().map(|(id, _)| *id))
}
