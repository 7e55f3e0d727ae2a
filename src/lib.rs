//! # codonedit - Codon-Aware Sequence Editing Engine
//!
//! An editing engine for a single nucleic-acid sequence with triplet
//! semantics: cursor motion that snaps to codon boundaries, range selection,
//! IUPAC-validated insertion and deletion, complement-strand derivation, and
//! peptide translation.
//!
//! ## Architecture
//!
//! The engine owns all state and answers every query; rendering, color
//! mapping, clipboard, and transport are external collaborators driving it
//! through the command set:
//! - `alphabet`: IUPAC symbol validation and complement lookup
//! - `buffer`: the ordered, mutable nucleotide store
//! - `cursor`: a single position with codon-aware motion
//! - `selection`: an optional half-open range with overlap queries
//! - `genetic_code`: the standard codon-to-amino-acid table
//! - `codon`: triplet grouping with antistrand and peptide derivation
//! - `view`: the materialized, disposable state snapshot
//! - `session`: orchestration of the state triple plus memoized views
//! - `command`: the external command surface
//! - `script`: a text form of the commands for the CLI and tests

pub mod alphabet;
pub mod buffer;
pub mod codon;
pub mod command;
pub mod cursor;
pub mod genetic_code;
pub mod script;
pub mod selection;
pub mod session;
pub mod view;
