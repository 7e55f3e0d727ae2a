//! End-to-end scenarios driving the engine through its command surface,
//! the way a front-end would: every mutation followed by a state query.

use std::io::Write;
use std::sync::Arc;

use codonedit::command::{Command, CommandOutput};
use codonedit::script::run_script;
use codonedit::session::{EditorSession, SharedSession};

fn view_of(session: &mut EditorSession) -> Arc<codonedit::view::SequenceView> {
    Command::CalculateSequenceData { force: false }
        .apply(session)
        .into_view()
        .expect("query returns a view")
}

#[test]
fn typing_builds_codons_and_peptides() {
    let mut session = EditorSession::new();
    for letter in "ATGTTTTAG".chars() {
        Command::SequenceInsert { letter }.apply(&mut session);
    }

    let view = view_of(&mut session);
    assert_eq!(view.bp_count, 9);
    assert_eq!(view.cursor.position, 9);
    assert!(view.cursor.is_at_end);

    let codons: Vec<&str> = view.items.iter().map(|i| i.codon.as_str()).collect();
    assert_eq!(codons, ["ATG", "TTT", "TAG"]);
    let peptides: Vec<Option<char>> = view.items.iter().map(|i| i.peptide).collect();
    assert_eq!(peptides, [Some('M'), Some('F'), Some('*')]);

    // Antistrand is the per-symbol complement at the same indices
    let anticodons: Vec<&str> = view.items.iter().map(|i| i.anticodon.as_str()).collect();
    assert_eq!(anticodons, ["TAC", "AAA", "ATC"]);
}

#[test]
fn start_indices_follow_triplet_layout() {
    let mut session = EditorSession::from_text("ACGTACGTAC");
    let view = view_of(&mut session);
    let starts: Vec<usize> = view.items.iter().map(|i| i.start_index).collect();
    assert_eq!(starts, [0, 3, 6, 9]);
    assert!(view.items.last().unwrap().is_partial());
}

#[test]
fn selection_echo_and_extraction() {
    let mut session = EditorSession::from_text("ACGTAC");
    Command::SetSelection { start: 1, end: 4 }.apply(&mut session);

    let view = view_of(&mut session);
    let selection = view.selection.expect("selection echoed in the view");
    assert_eq!((selection.start, selection.end), (1, 4));

    let text = Command::GetSelectedSequence
        .apply(&mut session)
        .into_text()
        .unwrap();
    assert_eq!(text, "CGT");
}

#[test]
fn backspace_over_a_codon_boundary() {
    let mut session = EditorSession::from_text("ATGC");
    Command::SequenceDelete.apply(&mut session);
    Command::SequenceDelete.apply(&mut session);

    let view = view_of(&mut session);
    assert_eq!(view.bp_count, 2);
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].codon, "AT");
    assert_eq!(view.items[0].peptide, None);
}

#[test]
fn query_without_mutation_reuses_the_snapshot() {
    let mut session = EditorSession::from_text("ACGTAC");
    let first = view_of(&mut session);
    let second = view_of(&mut session);
    assert!(Arc::ptr_eq(&first, &second));

    // A cursor move is a mutation of the echoed state, so the memo drops
    Command::MoveCursorLeft.apply(&mut session);
    let third = view_of(&mut session);
    assert!(!Arc::ptr_eq(&second, &third));
    assert_eq!(third.cursor.position, 5);
}

#[test]
fn shared_session_across_threads() {
    let shared = SharedSession::new();
    shared.with(|s| s.insert_all("ATG"));

    let writer = {
        let shared = shared.clone();
        std::thread::spawn(move || {
            for _ in 0..100 {
                shared.with(|s| {
                    s.move_cursor_to_end();
                    s.insert('C');
                });
            }
        })
    };
    let reader = {
        let shared = shared.clone();
        std::thread::spawn(move || {
            for _ in 0..100 {
                // Each query sees a consistent snapshot, never a torn one
                let view = shared.sequence_view(false);
                let letters: usize = view.items.iter().map(|i| i.codon.len()).sum();
                assert_eq!(letters, view.bp_count);
                assert!(view.cursor.position <= view.bp_count);
            }
        })
    };
    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(shared.sequence_view(false).bp_count, 103);
}

#[test]
fn script_file_drives_a_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# exercise motion, selection, and editing").unwrap();
    writeln!(file, "paste ACGTAC").unwrap();
    writeln!(file, "goto 4").unwrap();
    writeln!(file, "codon-start").unwrap();
    writeln!(file, "select 1 4").unwrap();
    writeln!(file, "selected").unwrap();
    writeln!(file, "delete").unwrap();
    writeln!(file, "view").unwrap();
    file.flush().unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    let mut session = EditorSession::new();
    let outputs = run_script(&mut session, &text).unwrap();

    let selected = outputs
        .iter()
        .find_map(|o| match o {
            CommandOutput::Text(t) => Some(t.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(selected, "CGT");

    let view = outputs.last().cloned().unwrap().into_view().unwrap();
    assert_eq!(view.bp_count, 3);
    assert_eq!(session.to_letters(), "AAC");
    assert_eq!(view.cursor.position, 1);
}
