//! The engine's command set.
//!
//! Every editing query and mutation is expressed as a [`Command`] applied to
//! an [`EditorSession`]. Mutating commands return [`CommandOutput::None`];
//! callers follow up with [`Command::CalculateSequenceData`] to obtain a
//! fresh snapshot; the engine never pushes updates. How a command reaches
//! the engine (in-process call, RPC, IPC) is a transport concern outside
//! this crate's scope.

use std::sync::Arc;

use crate::session::EditorSession;
use crate::view::SequenceView;

/// A single engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Return the current state snapshot; `force` bypasses memoization
    CalculateSequenceData { force: bool },
    /// Insert one letter at the cursor and advance past it
    SequenceInsert { letter: char },
    /// Insert the valid subset of a text run at the cursor
    SequenceInsertAll { text: String },
    /// Delete the symbol before the cursor (backspace)
    SequenceDelete,
    /// Delete the symbol at the cursor (forward delete)
    SequenceDeleteNext,
    /// Absolute cursor jump, clamped to the buffer bounds
    MoveCursor { index: usize },
    /// Single-step cursor motion
    MoveCursorLeft,
    /// Single-step cursor motion
    MoveCursorRight,
    /// Triplet-snapped motion toward the sequence start
    MoveCursorToCodonStart,
    /// Triplet-snapped motion toward the sequence end
    MoveCursorToCodonEnd,
    /// Jump to position 0
    MoveCursorToStart,
    /// Jump to the end of the sequence
    MoveCursorToEnd,
    /// Set the selection range (cursor follows the `end` edge)
    SetSelection { start: usize, end: usize },
    /// Select the whole buffer
    SetSelectionAll,
    /// Clear the selection
    ResetSelection,
    /// Grow the active selection one step left
    ExpandSelectionLeft,
    /// Grow the active selection one step right
    ExpandSelectionRight,
    /// Return the selected symbols as text
    GetSelectedSequence,
}

/// The result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Mutating commands produce no payload
    None,
    /// A materialized state snapshot
    View(Arc<SequenceView>),
    /// Raw selected text
    Text(String),
}

impl Command {
    /// Applies the command to a session.
    pub fn apply(&self, session: &mut EditorSession) -> CommandOutput {
        match self {
            Command::CalculateSequenceData { force } => {
                CommandOutput::View(session.sequence_view(*force))
            }
            Command::SequenceInsert { letter } => {
                session.insert(*letter);
                CommandOutput::None
            }
            Command::SequenceInsertAll { text } => {
                session.insert_all(text);
                CommandOutput::None
            }
            Command::SequenceDelete => {
                session.delete();
                CommandOutput::None
            }
            Command::SequenceDeleteNext => {
                session.delete_next();
                CommandOutput::None
            }
            Command::MoveCursor { index } => {
                session.move_cursor(*index);
                CommandOutput::None
            }
            Command::MoveCursorLeft => {
                session.move_cursor_left();
                CommandOutput::None
            }
            Command::MoveCursorRight => {
                session.move_cursor_right();
                CommandOutput::None
            }
            Command::MoveCursorToCodonStart => {
                session.move_cursor_to_codon_start();
                CommandOutput::None
            }
            Command::MoveCursorToCodonEnd => {
                session.move_cursor_to_codon_end();
                CommandOutput::None
            }
            Command::MoveCursorToStart => {
                session.move_cursor_to_start();
                CommandOutput::None
            }
            Command::MoveCursorToEnd => {
                session.move_cursor_to_end();
                CommandOutput::None
            }
            Command::SetSelection { start, end } => {
                session.set_selection(*start, *end);
                CommandOutput::None
            }
            Command::SetSelectionAll => {
                session.set_selection_all();
                CommandOutput::None
            }
            Command::ResetSelection => {
                session.reset_selection();
                CommandOutput::None
            }
            Command::ExpandSelectionLeft => {
                session.expand_selection_left();
                CommandOutput::None
            }
            Command::ExpandSelectionRight => {
                session.expand_selection_right();
                CommandOutput::None
            }
            Command::GetSelectedSequence => CommandOutput::Text(session.selected_sequence()),
        }
    }
}

impl CommandOutput {
    /// Returns the view payload, if this output carries one.
    pub fn into_view(self) -> Option<Arc<SequenceView>> {
        match self {
            CommandOutput::View(view) => Some(view),
            _ => None,
        }
    }

    /// Returns the text payload, if this output carries one.
    pub fn into_text(self) -> Option<String> {
        match self {
            CommandOutput::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut EditorSession, commands: &[Command]) -> CommandOutput {
        let mut last = CommandOutput::None;
        for command in commands {
            last = command.apply(session);
        }
        last
    }

    #[test]
    fn test_edit_then_query_cycle() {
        let mut session = EditorSession::new();
        let output = run(
            &mut session,
            &[
                Command::SequenceInsertAll {
                    text: "TAAGGG".into(),
                },
                Command::CalculateSequenceData { force: false },
            ],
        );
        let view = output.into_view().unwrap();
        assert_eq!(view.bp_count, 6);
        let peptides: Vec<Option<char>> = view.items.iter().map(|i| i.peptide).collect();
        assert_eq!(peptides, vec![Some('*'), Some('G')]);
    }

    #[test]
    fn test_selection_query() {
        let mut session = EditorSession::from_text("ACGTAC");
        let output = run(
            &mut session,
            &[
                Command::SetSelection { start: 1, end: 4 },
                Command::GetSelectedSequence,
            ],
        );
        assert_eq!(output.into_text().unwrap(), "CGT");
    }

    #[test]
    fn test_mutating_commands_return_no_payload() {
        let mut session = EditorSession::new();
        let output = Command::SequenceInsert { letter: 'A' }.apply(&mut session);
        assert_eq!(output, CommandOutput::None);
        assert_eq!(output.into_view(), None);
    }

    #[test]
    fn test_codon_motion_commands() {
        let mut session = EditorSession::from_text("ACGTACG");
        run(
            &mut session,
            &[
                Command::MoveCursor { index: 4 },
                Command::MoveCursorToCodonStart,
            ],
        );
        assert_eq!(session.cursor_position(), 3);
        Command::MoveCursorToCodonEnd.apply(&mut session);
        assert_eq!(session.cursor_position(), 6);
        Command::MoveCursorToCodonEnd.apply(&mut session);
        assert_eq!(session.cursor_position(), 7);
    }
}
