//! Mutable nucleotide sequence buffer.
//!
//! The buffer is the exclusive owner of sequence content: an ordered,
//! zero-indexed run of [`Nucleotide`] symbols in biological 5'→3' order.
//! It is mutated only through the insertion/deletion operations here and
//! knows nothing about cursors or selections; the session layer is
//! responsible for shifting those after a successful edit.

use crate::alphabet::Nucleotide;

/// An ordered, mutable store of nucleotide symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceBuffer {
    symbols: Vec<Nucleotide>,
}

impl SequenceBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a buffer from text, dropping invalid characters.
    ///
    /// Convenience for tests and front-ends; equivalent to inserting the
    /// text at index 0 of an empty buffer.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.insert_all_at(0, text);
        buffer
    }

    /// Returns the base-pair count.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the buffer holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.symbols.get(index).copied()
    }

    /// Returns the underlying symbols as a slice.
    pub fn symbols(&self) -> &[Nucleotide] {
        &self.symbols
    }

    /// Inserts a symbol at `index`, shifting subsequent symbols right.
    ///
    /// A no-op when `index` is outside `[0, len]`. Returns true if the
    /// buffer was mutated.
    pub fn insert_at(&mut self, index: usize, nucleotide: Nucleotide) -> bool {
        if index > self.symbols.len() {
            return false;
        }
        self.symbols.insert(index, nucleotide);
        true
    }

    /// Inserts every valid symbol of `text` starting at `index`.
    ///
    /// Invalid characters and whitespace are dropped rather than rejecting
    /// the whole run; a paste of mixed content partially succeeds. Returns
    /// the number of symbols inserted (0 when `index` is out of range).
    pub fn insert_all_at(&mut self, index: usize, text: &str) -> usize {
        if index > self.symbols.len() {
            return 0;
        }
        let run: Vec<Nucleotide> = text
            .chars()
            .filter_map(|c| Nucleotide::try_from_letter(c).ok())
            .collect();
        let count = run.len();
        self.symbols.splice(index..index, run);
        count
    }

    /// Removes the symbol at `index`; a no-op when out of range.
    ///
    /// Returns true if the buffer was mutated.
    pub fn delete_at(&mut self, index: usize) -> bool {
        if index >= self.symbols.len() {
            return false;
        }
        self.symbols.remove(index);
        true
    }

    /// Removes the symbols in `[start, end)`, normalizing order first.
    ///
    /// Out-of-range bounds are clamped to the buffer length. Returns the
    /// number of symbols removed (0 for an empty normalized range).
    pub fn delete_range(&mut self, start: usize, end: usize) -> usize {
        let lo = start.min(end).min(self.symbols.len());
        let hi = start.max(end).min(self.symbols.len());
        self.symbols.drain(lo..hi).count()
    }

    /// Returns the symbols in `[min(start, end), max(start, end))` without
    /// mutation. Out-of-range bounds are clamped.
    pub fn slice(&self, start: usize, end: usize) -> &[Nucleotide] {
        let lo = start.min(end).min(self.symbols.len());
        let hi = start.max(end).min(self.symbols.len());
        &self.symbols[lo..hi]
    }

    /// Renders the whole buffer as uppercase IUPAC letters.
    pub fn to_letters(&self) -> String {
        self.symbols.iter().map(|n| n.to_letter()).collect()
    }
}
