//! IUPAC nucleotide alphabet.
//!
//! This module provides:
//! - The fixed alphabet of valid sequence symbols (bases, ambiguity codes, gap)
//! - Letter parsing and rendering
//! - Complement lookup for antistrand derivation
//!
//! Everything stored in a sequence buffer is a member of this alphabet;
//! validation happens once on insertion and never again downstream.

use thiserror::Error;

/// Error returned when a character is not a valid IUPAC nucleotide letter.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid nucleotide letter: {0:?}")]
pub struct InvalidLetter(pub char);

/// A single IUPAC nucleotide symbol.
///
/// Covers the four unambiguous bases, the eleven ambiguity codes, and the
/// alignment gap. `U` is accepted on input as an alias for `T` but is not a
/// distinct member of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    /// Adenine
    A,
    /// Cytosine
    C,
    /// Guanine
    G,
    /// Thymine (or Uracil on input)
    T,
    /// Weak (A/T)
    W,
    /// Strong (G/C)
    S,
    /// Amino (A/C)
    M,
    /// Keto (G/T)
    K,
    /// Purine (A/G)
    R,
    /// Pyrimidine (C/T)
    Y,
    /// Not A (C/G/T)
    B,
    /// Not T (A/C/G)
    V,
    /// Not C (A/G/T)
    D,
    /// Not G (A/C/T)
    H,
    /// Any base
    N,
    /// Alignment gap
    Gap,
}

impl Nucleotide {
    /// Parses a single letter into a nucleotide.
    ///
    /// Parsing is case-insensitive and treats `U` as `T` so RNA input can be
    /// typed directly. Returns an error for anything outside the alphabet.
    pub fn try_from_letter(letter: char) -> Result<Self, InvalidLetter> {
        use Nucleotide::*;
        match letter.to_ascii_uppercase() {
            'A' => Ok(A),
            'C' => Ok(C),
            'G' => Ok(G),
            'T' | 'U' => Ok(T),
            'W' => Ok(W),
            'S' => Ok(S),
            'M' => Ok(M),
            'K' => Ok(K),
            'R' => Ok(R),
            'Y' => Ok(Y),
            'B' => Ok(B),
            'V' => Ok(V),
            'D' => Ok(D),
            'H' => Ok(H),
            'N' => Ok(N),
            '-' => Ok(Gap),
            other => Err(InvalidLetter(other)),
        }
    }

    /// Returns true if the letter is a member of the alphabet.
    pub fn is_valid_letter(letter: char) -> bool {
        Self::try_from_letter(letter).is_ok()
    }

    /// Renders the uppercase IUPAC letter for this symbol.
    pub fn to_letter(self) -> char {
        use Nucleotide::*;
        match self {
            A => 'A',
            C => 'C',
            G => 'G',
            T => 'T',
            W => 'W',
            S => 'S',
            M => 'M',
            K => 'K',
            R => 'R',
            Y => 'Y',
            B => 'B',
            V => 'V',
            D => 'D',
            H => 'H',
            N => 'N',
            Gap => '-',
        }
    }

    /// Returns the complementary symbol.
    ///
    /// Unambiguous bases pair A↔T and G↔C; ambiguity codes map to their
    /// IUPAC-defined partner (the code matching the complements of the bases
    /// they stand for). Self-complementary codes (W, S, N) and the gap map to
    /// themselves.
    pub fn complement(self) -> Self {
        use Nucleotide::*;
        match self {
            A => T,
            T => A,
            C => G,
            G => C,
            W => W,
            S => S,
            M => K,
            K => M,
            R => Y,
            Y => R,
            B => V,
            V => B,
            D => H,
            H => D,
            N => N,
            Gap => Gap,
        }
    }

    /// Returns true for the four unambiguous bases (A, C, G, T).
    ///
    /// Only codons made entirely of these translate to a peptide letter.
    pub fn is_unambiguous(self) -> bool {
        matches!(self, Nucleotide::A | Nucleotide::C | Nucleotide::G | Nucleotide::T)
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = InvalidLetter;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::try_from_letter(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_letters() {
        assert_eq!(Nucleotide::try_from_letter('A'), Ok(Nucleotide::A));
        assert_eq!(Nucleotide::try_from_letter('t'), Ok(Nucleotide::T));
        assert_eq!(Nucleotide::try_from_letter('-'), Ok(Nucleotide::Gap));
        assert_eq!(Nucleotide::try_from_letter('n'), Ok(Nucleotide::N));
    }

    #[test]
    fn test_parse_rna_alias() {
        // U is typed for RNA but stored as T
        assert_eq!(Nucleotide::try_from_letter('U'), Ok(Nucleotide::T));
        assert_eq!(Nucleotide::try_from_letter('u'), Ok(Nucleotide::T));
    }

    #[test]
    fn test_parse_invalid_letters() {
        assert_eq!(Nucleotide::try_from_letter('X'), Err(InvalidLetter('X')));
        assert_eq!(Nucleotide::try_from_letter('1'), Err(InvalidLetter('1')));
        assert_eq!(Nucleotide::try_from_letter(' '), Err(InvalidLetter(' ')));
        assert!(!Nucleotide::is_valid_letter('Z'));
    }

    #[test]
    fn test_complement_bases() {
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::T.complement(), Nucleotide::A);
        assert_eq!(Nucleotide::G.complement(), Nucleotide::C);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
    }

    #[test]
    fn test_complement_ambiguity_codes() {
        assert_eq!(Nucleotide::W.complement(), Nucleotide::W);
        assert_eq!(Nucleotide::S.complement(), Nucleotide::S);
        assert_eq!(Nucleotide::M.complement(), Nucleotide::K);
        assert_eq!(Nucleotide::K.complement(), Nucleotide::M);
        assert_eq!(Nucleotide::R.complement(), Nucleotide::Y);
        assert_eq!(Nucleotide::Y.complement(), Nucleotide::R);
        assert_eq!(Nucleotide::B.complement(), Nucleotide::V);
        assert_eq!(Nucleotide::V.complement(), Nucleotide::B);
        assert_eq!(Nucleotide::D.complement(), Nucleotide::H);
        assert_eq!(Nucleotide::H.complement(), Nucleotide::D);
        assert_eq!(Nucleotide::N.complement(), Nucleotide::N);
        assert_eq!(Nucleotide::Gap.complement(), Nucleotide::Gap);
    }

    #[test]
    fn test_complement_is_involution() {
        // Complementing twice returns the original symbol for every member
        for letter in "ACGTWSMKRYBVDHN-".chars() {
            let n = Nucleotide::try_from_letter(letter).unwrap();
            assert_eq!(n.complement().complement(), n);
        }
    }

    #[test]
    fn test_letter_round_trip() {
        for letter in "ACGTWSMKRYBVDHN-".chars() {
            let n = Nucleotide::try_from_letter(letter).unwrap();
            assert_eq!(n.to_letter(), letter);
        }
    }
}
