//! Materialized sequence snapshots.
//!
//! A [`SequenceView`] is the queryable "current state" handed to callers: the
//! codon groupings plus echoes of cursor and selection. It is derived from
//! the authoritative buffer/cursor/selection on demand, never mutated, and
//! discarded (or cached by version) after the query. All fields are explicit
//! and required; an absent selection is `None`, not an empty range.

use serde::Serialize;

use crate::codon::CodonItem;

/// Cursor echo in a view snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CursorView {
    /// Position in `[0, bp_count]`
    pub position: usize,
    /// True iff `position == bp_count`
    pub is_at_end: bool,
}

/// Selection echo in a view snapshot (raw edges, as stored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub start: usize,
    pub end: usize,
}

/// A complete, disposable snapshot of the editing state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceView {
    /// Codon groupings in frame 0, with antistrand and peptide letters
    pub items: Vec<CodonItem>,
    /// Base-pair count of the buffer
    pub bp_count: usize,
    /// Current cursor state
    pub cursor: CursorView,
    /// Current selection, absent when inactive
    pub selection: Option<SelectionView>,
}
