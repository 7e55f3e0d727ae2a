//! codonedit - Codon-Aware Sequence Editing Engine
//!
//! A thin command-line front-end around the editing engine. Edits are given
//! as a line-oriented command script (see `script`); the final state is
//! printed as a double-strand pretty view or as JSON.
//!
//! ## Usage
//!
//! ```bash
//! codonedit -s ATGCGT                 # print the view of a sequence
//! codonedit edits.txt                 # run a command script
//! echo "paste ATG" | codonedit -      # script from stdin
//! codonedit -s ATGCGT -o json         # JSON snapshot for front-ends
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use codonedit::command::CommandOutput;
use codonedit::script::run_script;
use codonedit::session::EditorSession;
use codonedit::view::SequenceView;

/// Output format for the final state snapshot.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputArg {
    /// Strand, antistrand, and peptide rows
    Pretty,
    /// The raw SequenceView as JSON
    Json,
}

/// codonedit - a codon-aware editor engine for nucleic-acid sequences
///
/// Runs an edit script against a single sequence session and prints the
/// resulting state. Without a script, just materializes the preloaded
/// sequence.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command script to run ("-" for stdin); one command per line
    script: Option<PathBuf>,

    /// Preload the session with a sequence (invalid characters dropped)
    #[arg(short = 's', long = "sequence")]
    sequence: Option<String>,

    /// Output format for the final snapshot
    #[arg(short = 'o', long = "output", value_enum, default_value = "pretty")]
    output: OutputArg,
}

/// Renders the snapshot as aligned strand / antistrand / peptide rows, in
/// 5'→3' orientation with the antistrand beneath at the same indices.
fn render_pretty(view: &SequenceView) -> String {
    let strand: String = view.items.iter().map(|i| i.codon.as_str()).collect();
    let antistrand: String = view.items.iter().map(|i| i.anticodon.as_str()).collect();
    let peptides: String = view
        .items
        .iter()
        .map(|i| match i.peptide {
            Some(p) => format!(" {} ", p),
            None => " ".repeat(i.codon.len()),
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!("5' {} 3'\n", strand));
    out.push_str(&format!("3' {} 5'\n", antistrand));
    if !peptides.trim().is_empty() {
        out.push_str(&format!("   {}\n", peptides.trim_end()));
    }
    out.push_str(&format!(
        "bp: {}  cursor: {}{}",
        view.bp_count,
        view.cursor.position,
        if view.cursor.is_at_end { " (end)" } else { "" }
    ));
    if let Some(selection) = &view.selection {
        out.push_str(&format!(
            "  selection: {}..{}",
            selection.start, selection.end
        ));
    }
    out.push('\n');
    out
}

fn read_script(path: &PathBuf) -> Result<String> {
    if path.to_str() == Some("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read script from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut session = match &args.sequence {
        Some(text) => EditorSession::from_text(text),
        None => EditorSession::new(),
    };

    if let Some(path) = &args.script {
        let text = read_script(path)?;
        let outputs = run_script(&mut session, &text)?;
        // Echo query payloads in order; mutations produce none
        for output in outputs {
            if let CommandOutput::Text(text) = output {
                println!("{}", text);
            }
        }
    }

    let view = session.sequence_view(false);
    match args.output {
        OutputArg::Pretty => print!("{}", render_pretty(&view)),
        OutputArg::Json => println!("{}", serde_json::to_string_pretty(&*view)?),
    }

    Ok(())
}
