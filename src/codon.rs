//! Codon grouping and translation.
//!
//! Partitions a sequence buffer into frame-0 triplets and derives, for each
//! triplet, its letters, its per-symbol complement (the antistrand as
//! displayed beneath the strand: same order, not reversed; orientation is a
//! rendering concern), and its peptide letter when the triplet is a full
//! unambiguous codon.

use serde::Serialize;

use crate::alphabet::Nucleotide;
use crate::buffer::SequenceBuffer;
use crate::genetic_code::GeneticCode;

/// One codon of the materialized view: up to three symbols starting at a
/// multiple of 3, with derived antistrand letters and peptide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodonItem {
    /// Buffer index of the first nucleotide
    pub start_index: usize,
    /// The codon's letters (length 1-3; shorter than 3 only for the
    /// trailing partial codon)
    pub codon: String,
    /// Per-symbol complement of the codon, same order and length
    pub anticodon: String,
    /// Amino acid letter (`*` for stop); `None` for partial or ambiguous
    /// codons
    pub peptide: Option<char>,
}

impl CodonItem {
    /// Builds a codon item from a chunk of symbols.
    fn new(start_index: usize, symbols: &[Nucleotide], code: &GeneticCode) -> Self {
        let codon: String = symbols.iter().map(|n| n.to_letter()).collect();
        let anticodon: String = symbols.iter().map(|n| n.complement().to_letter()).collect();
        let peptide = match symbols {
            &[a, b, c] => code.translate([a, b, c]),
            _ => None,
        };
        Self {
            start_index,
            codon,
            anticodon,
            peptide,
        }
    }

    /// Returns the number of nucleotides in this codon (1-3).
    pub fn len(&self) -> usize {
        self.codon.len()
    }

    /// Returns true for the trailing codon of a buffer whose length is not
    /// a multiple of 3.
    pub fn is_partial(&self) -> bool {
        self.codon.len() < 3
    }
}

/// Partitions the buffer into consecutive triplets starting at index 0.
///
/// The last group may have length 1 or 2 (a partial codon, no peptide).
/// Reading frame is fixed at 0; there is no frame-shift support.
pub fn group_into_codons(buffer: &SequenceBuffer, code: &GeneticCode) -> Vec<CodonItem> {
    buffer
        .symbols()
        .chunks(3)
        .enumerate()
        .map(|(i, chunk)| CodonItem::new(i * 3, chunk, code))
        .collect()
}
