//! Edit cursor with codon-aware motion.
//!
//! The cursor is a single position in `[0, bp_count]`: it addresses the
//! gaps between symbols, so the end-of-sequence position is valid. Every
//! motion clamps rather than fails. The cursor does not own the buffer;
//! each operation takes the current base-pair count as a bound.

/// A single position within a sequence buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// Creates a cursor at position 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the cursor sits at the end of the sequence.
    pub fn is_at_end(&self, bp_count: usize) -> bool {
        self.position == bp_count
    }

    /// Moves one step left, stopping at 0.
    pub fn move_left(&mut self) -> usize {
        self.position = self.position.saturating_sub(1);
        self.position
    }

    /// Moves one step right, stopping at `bp_count`.
    pub fn move_right(&mut self, bp_count: usize) -> usize {
        self.position = self.position.saturating_add(1).min(bp_count);
        self.position
    }

    /// Jumps to an absolute position, clamped to `[0, bp_count]`.
    pub fn move_to(&mut self, index: usize, bp_count: usize) -> usize {
        self.position = index.min(bp_count);
        self.position
    }

    /// Jumps to the start of the sequence.
    pub fn move_to_start(&mut self) -> usize {
        self.position = 0;
        self.position
    }

    /// Jumps to the end of the sequence.
    pub fn move_to_end(&mut self, bp_count: usize) -> usize {
        self.position = bp_count;
        self.position
    }

    /// Snaps left to a codon boundary (a multiple of 3).
    ///
    /// From an unaligned position this moves to the nearest lower boundary;
    /// from an aligned position it skips to the *previous* boundary, giving
    /// Ctrl+Left its whole-codon stride. Stops at 0.
    pub fn move_to_codon_start(&mut self) -> usize {
        let distance = match self.position % 3 {
            0 => 3,
            offset => offset,
        };
        self.position = self.position.saturating_sub(distance);
        self.position
    }

    /// Snaps right to a codon boundary (a multiple of 3).
    ///
    /// From an unaligned position this moves to the nearest upper boundary;
    /// from an aligned position it skips to the *next* boundary. Clamped to
    /// `bp_count`.
    pub fn move_to_codon_end(&mut self, bp_count: usize) -> usize {
        let distance = 3 - self.position % 3;
        self.position = self.position.saturating_add(distance).min(bp_count);
        self.position
    }
}
