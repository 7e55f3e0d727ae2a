//! Optional range selection over buffer indices.
//!
//! A selection is a pair of edge positions in `[0, bp_count]`. The edges are
//! deliberately not order-constrained while stored: during a drag the moving
//! `end` edge can sit left of the `start` anchor. All range queries normalize
//! to `[min, max)` first. An absent selection is represented as absence, not
//! as a zero-length range; a zero-length active selection answers range
//! queries as if inactive (it is only held transiently mid-drag).
//!
//! Whether a drag is in progress (`is_selecting`) is front-end state and is
//! not stored here.

/// An optional half-open range over buffer indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    range: Option<(usize, usize)>,
}

impl Selection {
    /// Creates an inactive selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a selection exists (possibly zero-length).
    pub fn is_active(&self) -> bool {
        self.range.is_some()
    }

    /// Returns the raw `(start, end)` edges, unnormalized.
    pub fn edges(&self) -> Option<(usize, usize)> {
        self.range
    }

    /// Returns the selection as a normalized `(low, high)` pair.
    pub fn normalized(&self) -> Option<(usize, usize)> {
        self.range.map(|(s, e)| (s.min(e), s.max(e)))
    }

    /// Activates the selection as a point at `index` (anchor = moving edge).
    pub fn start(&mut self, index: usize) {
        self.range = Some((index, index));
    }

    /// Moves the `end` edge to `index`, leaving the anchor fixed.
    ///
    /// A no-op when inactive.
    pub fn update(&mut self, index: usize) {
        if let Some((start, _)) = self.range {
            self.range = Some((start, index));
        }
    }

    /// Sets both edges explicitly.
    pub fn set(&mut self, start: usize, end: usize) {
        self.range = Some((start, end));
    }

    /// Selects the whole buffer.
    pub fn select_all(&mut self, bp_count: usize) {
        self.range = Some((0, bp_count));
    }

    /// Deactivates the selection.
    pub fn reset(&mut self) {
        self.range = None;
    }

    /// Moves the `end` edge one step left, stopping at 0.
    ///
    /// A no-op when inactive; the session anchors a new selection at the
    /// cursor before expanding in that case.
    pub fn expand_left(&mut self) {
        if let Some((start, end)) = self.range {
            self.range = Some((start, end.saturating_sub(1)));
        }
    }

    /// Moves the `end` edge one step right, stopping at `bp_count`.
    pub fn expand_right(&mut self, bp_count: usize) {
        if let Some((start, end)) = self.range {
            self.range = Some((start, end.saturating_add(1).min(bp_count)));
        }
    }

    /// Returns true iff active and `index` falls inside the normalized range.
    pub fn contains(&self, index: usize) -> bool {
        match self.normalized() {
            Some((lo, hi)) => index >= lo && index < hi,
            None => false,
        }
    }

    /// Counts how many positions of `[index, index + len)` fall inside the
    /// normalized range; 0 when inactive or disjoint.
    ///
    /// Consumers use the count to partially highlight a multi-symbol codon
    /// without per-nucleotide containment checks; `count > 0` subsumes
    /// boolean containment.
    pub fn overlap_count(&self, index: usize, len: usize) -> usize {
        match self.normalized() {
            Some((lo, hi)) => {
                let overlap_lo = lo.max(index);
                let overlap_hi = hi.min(index + len);
                overlap_hi.saturating_sub(overlap_lo)
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_by_default() {
        let selection = Selection::new();
        assert!(!selection.is_active());
        assert_eq!(selection.normalized(), None);
        assert!(!selection.contains(0));
    }

    #[test]
    fn test_start_and_update() {
        let mut selection = Selection::new();
        selection.start(2);
        assert_eq!(selection.edges(), Some((2, 2)));
        selection.update(5);
        assert_eq!(selection.edges(), Some((2, 5)));
        selection.reset();
        assert!(!selection.is_active());
    }

    #[test]
    fn test_update_inactive_is_noop() {
        let mut selection = Selection::new();
        selection.update(5);
        assert!(!selection.is_active());
    }

    #[test]
    fn test_reverse_drag_normalizes() {
        // An in-progress drag can have end < start
        let mut selection = Selection::new();
        selection.start(5);
        selection.update(2);
        assert_eq!(selection.edges(), Some((5, 2)));
        assert_eq!(selection.normalized(), Some((2, 5)));
        assert!(selection.contains(2));
        assert!(selection.contains(4));
        assert!(!selection.contains(5));
    }

    #[test]
    fn test_zero_length_acts_inactive() {
        let mut selection = Selection::new();
        selection.start(3);
        assert!(selection.is_active());
        assert!(!selection.contains(3));
        assert_eq!(selection.overlap_count(0, 10), 0);
    }

    #[test]
    fn test_overlap_count_inactive() {
        let selection = Selection::new();
        assert_eq!(selection.overlap_count(0, 3), 0);
        assert_eq!(selection.overlap_count(7, 100), 0);
    }

    #[test]
    fn test_overlap_count_partial() {
        let mut selection = Selection::new();
        selection.set(2, 5);
        // Codon range [3, 6) overlaps [2, 5) on positions 3 and 4
        assert_eq!(selection.overlap_count(3, 3), 2);
        // Fully inside
        assert_eq!(selection.overlap_count(2, 3), 3);
        // Disjoint on either side
        assert_eq!(selection.overlap_count(5, 3), 0);
        assert_eq!(selection.overlap_count(0, 2), 0);
    }

    #[test]
    fn test_expand_edges() {
        let mut selection = Selection::new();
        selection.start(2);
        selection.expand_right(4);
        selection.expand_right(4);
        assert_eq!(selection.edges(), Some((2, 4)));
        // Clamped at the buffer end
        selection.expand_right(4);
        assert_eq!(selection.edges(), Some((2, 4)));

        selection.expand_left();
        assert_eq!(selection.edges(), Some((2, 3)));
        // The moving edge can cross the anchor
        selection.expand_left();
        selection.expand_left();
        selection.expand_left();
        assert_eq!(selection.edges(), Some((2, 0)));
        selection.expand_left();
        assert_eq!(selection.edges(), Some((2, 0)));
    }

    #[test]
    fn test_select_all() {
        let mut selection = Selection::new();
        selection.select_all(6);
        assert_eq!(selection.normalized(), Some((0, 6)));
    }
}
