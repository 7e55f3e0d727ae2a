//! Editing session: the single-document state triple and its view cache.
//!
//! [`EditorSession`] owns the buffer/cursor/selection triple and is the only
//! place edits are orchestrated: it deletes selected content before typing,
//! shifts the cursor past insertions, and keeps cursor and selection inside
//! buffer bounds after every mutation. There are no module-level singletons;
//! every command takes the session explicitly.
//!
//! View materialization is memoized with a version counter bumped on every
//! mutation: an unchanged version returns the identical cached snapshot, and
//! a `force` flag bypasses the comparison for out-of-band invalidation.
//!
//! [`SharedSession`] wraps a session in a lock for use across threads or
//! behind a transport boundary; interleaved calls serialize and never
//! observe a torn intermediate state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::alphabet::Nucleotide;
use crate::buffer::SequenceBuffer;
use crate::codon::group_into_codons;
use crate::cursor::Cursor;
use crate::genetic_code::GeneticCode;
use crate::selection::Selection;
use crate::view::{CursorView, SelectionView, SequenceView};

/// The authoritative editing state for one sequence document.
#[derive(Debug, Default)]
pub struct EditorSession {
    buffer: SequenceBuffer,
    cursor: Cursor,
    selection: Selection,
    code: GeneticCode,
    /// Bumped on every mutation; the memoization key for views.
    version: u64,
    cache: Option<(u64, Arc<SequenceView>)>,
}

impl EditorSession {
    /// Creates a session with an empty buffer and the cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session pre-filled from text (invalid characters dropped),
    /// with the cursor at the end.
    pub fn from_text(text: &str) -> Self {
        let mut session = Self::new();
        session.insert_all(text);
        session
    }

    /// Returns the base-pair count.
    pub fn bp_count(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the current cursor position.
    pub fn cursor_position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the normalized selection range, if active.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection.normalized()
    }

    /// Renders the whole buffer as letters.
    pub fn to_letters(&self) -> String {
        self.buffer.to_letters()
    }

    fn bump(&mut self) {
        self.version += 1;
        self.check_invariants();
    }

    fn check_invariants(&self) {
        debug_assert!(self.cursor.position() <= self.buffer.len());
        if let Some((start, end)) = self.selection.edges() {
            debug_assert!(start <= self.buffer.len() && end <= self.buffer.len());
        }
    }

    /// Deletes the content of an active, non-empty selection and parks the
    /// cursor at its start. Returns true if anything was removed.
    fn delete_selection_contents(&mut self) -> bool {
        let Some((lo, hi)) = self.selection.normalized() else {
            return false;
        };
        let removed = self.buffer.delete_range(lo, hi);
        self.selection.reset();
        if removed > 0 {
            self.cursor.move_to(lo, self.buffer.len());
        }
        // Clearing even a zero-length selection changes the echoed state
        self.bump();
        removed > 0
    }

    // --- edits ---

    /// Inserts one letter at the cursor and advances past it.
    ///
    /// An active selection is replaced by the typed letter. An invalid
    /// letter makes the whole operation a no-op: the buffer, cursor, and
    /// selection are all left untouched.
    pub fn insert(&mut self, letter: char) {
        let Ok(nucleotide) = Nucleotide::try_from_letter(letter) else {
            return;
        };
        self.delete_selection_contents();

        let position = self.cursor.position();
        if self.buffer.insert_at(position, nucleotide) {
            self.cursor.move_to(position + 1, self.buffer.len());
            self.bump();
        }
    }

    /// Inserts every valid symbol of `text` at the cursor.
    ///
    /// Invalid characters are dropped rather than failing the paste; the
    /// cursor advances by the number of symbols actually inserted. When the
    /// text holds no valid symbol at all, the whole operation is a no-op
    /// and an active selection survives.
    pub fn insert_all(&mut self, text: &str) {
        if !text.chars().any(|c| Nucleotide::try_from_letter(c).is_ok()) {
            return;
        }
        self.delete_selection_contents();

        let position = self.cursor.position();
        let inserted = self.buffer.insert_all_at(position, text);
        if inserted > 0 {
            self.cursor.move_to(position + inserted, self.buffer.len());
            self.bump();
        }
    }

    /// Deletes the symbol before the cursor (backspace).
    ///
    /// With an active selection, deletes its content instead. A no-op at
    /// position 0 with nothing selected.
    pub fn delete(&mut self) {
        if self.delete_selection_contents() {
            return;
        }
        let position = self.cursor.position();
        if position > 0 && self.buffer.delete_at(position - 1) {
            self.cursor.move_left();
            self.bump();
        }
    }

    /// Deletes the symbol at the cursor (forward delete); the cursor keeps
    /// referencing the same gap.
    ///
    /// With an active selection, deletes its content instead. A no-op at the
    /// end of the sequence with nothing selected.
    pub fn delete_next(&mut self) {
        if self.delete_selection_contents() {
            return;
        }
        if self.buffer.delete_at(self.cursor.position()) {
            self.bump();
        }
    }

    // --- cursor motion (clears the selection, as clicking elsewhere does) ---

    fn after_cursor_motion(&mut self, old_position: usize) {
        let moved = self.cursor.position() != old_position;
        let had_selection = self.selection.is_active();
        self.selection.reset();
        if moved || had_selection {
            self.bump();
        }
    }

    /// Moves the cursor to an absolute index, clamped to the buffer bounds.
    pub fn move_cursor(&mut self, index: usize) {
        let old = self.cursor.position();
        self.cursor.move_to(index, self.buffer.len());
        self.after_cursor_motion(old);
    }

    /// Moves the cursor one step left.
    pub fn move_cursor_left(&mut self) {
        let old = self.cursor.position();
        self.cursor.move_left();
        self.after_cursor_motion(old);
    }

    /// Moves the cursor one step right.
    pub fn move_cursor_right(&mut self) {
        let old = self.cursor.position();
        self.cursor.move_right(self.buffer.len());
        self.after_cursor_motion(old);
    }

    /// Moves the cursor to the start of the sequence.
    pub fn move_cursor_to_start(&mut self) {
        let old = self.cursor.position();
        self.cursor.move_to_start();
        self.after_cursor_motion(old);
    }

    /// Moves the cursor to the end of the sequence.
    pub fn move_cursor_to_end(&mut self) {
        let old = self.cursor.position();
        self.cursor.move_to_end(self.buffer.len());
        self.after_cursor_motion(old);
    }

    /// Snaps the cursor left to a codon boundary (whole-codon stride when
    /// already aligned).
    pub fn move_cursor_to_codon_start(&mut self) {
        let old = self.cursor.position();
        self.cursor.move_to_codon_start();
        self.after_cursor_motion(old);
    }

    /// Snaps the cursor right to a codon boundary (whole-codon stride when
    /// already aligned).
    pub fn move_cursor_to_codon_end(&mut self) {
        let old = self.cursor.position();
        self.cursor.move_to_codon_end(self.buffer.len());
        self.after_cursor_motion(old);
    }

    // --- selection ---

    /// Sets the selection to `(start, end)`, clamped to the buffer bounds.
    ///
    /// The cursor follows the `end` edge. A zero-length range resets the
    /// selection instead; a reversed range is stored as given (queries
    /// normalize).
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let bp_count = self.buffer.len();
        let start = start.min(bp_count);
        let end = end.min(bp_count);
        if start == end {
            self.reset_selection();
            return;
        }
        self.selection.set(start, end);
        self.cursor.move_to(end, bp_count);
        self.bump();
    }

    /// Selects the whole buffer.
    pub fn set_selection_all(&mut self) {
        self.selection.select_all(self.buffer.len());
        self.bump();
    }

    /// Clears the selection.
    pub fn reset_selection(&mut self) {
        if self.selection.is_active() {
            self.selection.reset();
            self.bump();
        }
    }

    /// Grows the selection one step left.
    ///
    /// The cursor-adjacent `end` edge moves and the anchor stays fixed; with
    /// no active selection, a new one is anchored at the cursor first. The
    /// cursor tracks the moving edge.
    pub fn expand_selection_left(&mut self) {
        if !self.selection.is_active() {
            self.selection.start(self.cursor.position());
        }
        self.selection.expand_left();
        if let Some((_, end)) = self.selection.edges() {
            self.cursor.move_to(end, self.buffer.len());
        }
        self.bump();
    }

    /// Grows the selection one step right; see [`expand_selection_left`].
    ///
    /// [`expand_selection_left`]: EditorSession::expand_selection_left
    pub fn expand_selection_right(&mut self) {
        if !self.selection.is_active() {
            self.selection.start(self.cursor.position());
        }
        self.selection.expand_right(self.buffer.len());
        if let Some((_, end)) = self.selection.edges() {
            self.cursor.move_to(end, self.buffer.len());
        }
        self.bump();
    }

    /// Returns the selected symbols as text, empty when nothing is selected.
    pub fn selected_sequence(&self) -> String {
        match self.selection.normalized() {
            Some((lo, hi)) => self.buffer.slice(lo, hi).iter().map(|n| n.to_letter()).collect(),
            None => String::new(),
        }
    }

    // --- view materialization ---

    /// Materializes the current state into a [`SequenceView`].
    ///
    /// Idempotent: with no intervening mutation and `force == false`, the
    /// identical cached snapshot is returned. `force` recomputes even when
    /// the version is unchanged (the escape hatch for invalidation the
    /// version counter did not capture).
    pub fn sequence_view(&mut self, force: bool) -> Arc<SequenceView> {
        if !force {
            if let Some((version, view)) = &self.cache {
                if *version == self.version {
                    return Arc::clone(view);
                }
            }
        }

        let view = Arc::new(SequenceView {
            items: group_into_codons(&self.buffer, &self.code),
            bp_count: self.buffer.len(),
            cursor: CursorView {
                position: self.cursor.position(),
                is_at_end: self.cursor.is_at_end(self.buffer.len()),
            },
            selection: self
                .selection
                .edges()
                .map(|(start, end)| SelectionView { start, end }),
        });
        self.cache = Some((self.version, Arc::clone(&view)));
        view
    }
}

/// A session handle that serializes concurrent access.
///
/// Cheap to clone; every command acquires the lock once, so interleaved
/// edits never observe partial state.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<EditorSession>>,
}

impl SharedSession {
    /// Creates a shared handle around a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut EditorSession) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Returns the current view without mutating edit state.
    pub fn sequence_view(&self, force: bool) -> Arc<SequenceView> {
        self.inner.write().sequence_view(force)
    }
}
