//! Standard genetic code table.
//!
//! Maps full codons (triplets of unambiguous bases) to single-letter amino
//! acid codes. The 64-entry table is built from the NCBI `ncbieaa` string
//! for the standard code (table 1), enumerated in NCBI codon order.

use std::collections::HashMap;

use crate::alphabet::Nucleotide;

/// NCBI `ncbieaa` string for the standard genetic code (table 1).
const STANDARD_NCBIEAA: &str = "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// A codon-to-amino-acid translation table.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    codon_table: HashMap<[char; 3], char>,
}

impl GeneticCode {
    /// Creates the standard genetic code.
    pub fn standard() -> Self {
        Self::from_ncbieaa(STANDARD_NCBIEAA)
    }

    /// Builds a table from an NCBI format string.
    ///
    /// NCBI order enumerates TTT, TTC, TTA, TTG, TCT, ... (Base1 outermost).
    fn from_ncbieaa(ncbieaa: &str) -> Self {
        let bases = ['T', 'C', 'A', 'G'];
        let mut codon_table = HashMap::new();
        let mut amino_acids = ncbieaa.chars();

        for &b1 in &bases {
            for &b2 in &bases {
                for &b3 in &bases {
                    let aa = amino_acids.next().unwrap_or('X');
                    codon_table.insert([b1, b2, b3], aa);
                }
            }
        }

        Self { codon_table }
    }

    /// Translates a full codon to a peptide letter.
    ///
    /// Returns `None` unless all three symbols are unambiguous bases
    /// (A/C/G/T): ambiguity codes and gaps yield no peptide rather than a
    /// guessed one. Stop codons (TAA, TAG, TGA) translate to `*`.
    pub fn translate(&self, codon: [Nucleotide; 3]) -> Option<char> {
        if !codon.iter().all(|n| n.is_unambiguous()) {
            return None;
        }
        let key = [codon[0].to_letter(), codon[1].to_letter(), codon[2].to_letter()];
        self.codon_table.get(&key).copied()
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}
