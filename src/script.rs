//! Text form of the command set.
//!
//! Parses line-oriented command scripts for the CLI front-end and for
//! integration tests. One command per line; blank lines and `#` comments are
//! skipped. This is transport plumbing around the engine, not part of the
//! engine itself.
//!
//! ```text
//! paste ATGCGT
//! goto 3
//! select 1 4
//! selected
//! view
//! ```

use thiserror::Error;

use crate::command::{Command, CommandOutput};
use crate::session::EditorSession;

/// Errors that can occur while parsing a command script.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command {name:?}")]
    UnknownCommand { line: usize, name: String },

    #[error("line {line}: {command} expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: invalid argument {value:?} for {command}")]
    InvalidArgument {
        line: usize,
        command: &'static str,
        value: String,
    },

    #[error("line {line}: unexpected trailing arguments after {command}")]
    TrailingArguments { line: usize, command: &'static str },
}

/// Result type for script parsing.
pub type ScriptResult<T> = Result<T, ScriptError>;

fn parse_index(
    line: usize,
    command: &'static str,
    token: Option<&str>,
    expected: &'static str,
) -> ScriptResult<usize> {
    let token = token.ok_or(ScriptError::MissingArgument {
        line,
        command,
        expected,
    })?;
    token.parse().map_err(|_| ScriptError::InvalidArgument {
        line,
        command,
        value: token.to_string(),
    })
}

fn expect_no_more(
    line: usize,
    command: &'static str,
    mut rest: std::str::SplitWhitespace<'_>,
) -> ScriptResult<()> {
    if rest.next().is_some() {
        return Err(ScriptError::TrailingArguments { line, command });
    }
    Ok(())
}

/// Parses a single script line into a command.
///
/// Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line_number: usize, line: &str) -> ScriptResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let name = tokens.next().unwrap_or_default();

    let command = match name {
        "view" => {
            let force = match tokens.next() {
                None => false,
                Some("force") => true,
                Some(other) => {
                    return Err(ScriptError::InvalidArgument {
                        line: line_number,
                        command: "view",
                        value: other.to_string(),
                    })
                }
            };
            Command::CalculateSequenceData { force }
        }
        "insert" => {
            let arg = tokens.next().ok_or(ScriptError::MissingArgument {
                line: line_number,
                command: "insert",
                expected: "a single letter",
            })?;
            let mut chars = arg.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(letter), None) => letter,
                _ => {
                    return Err(ScriptError::InvalidArgument {
                        line: line_number,
                        command: "insert",
                        value: arg.to_string(),
                    })
                }
            };
            Command::SequenceInsert { letter }
        }
        "paste" => {
            // The rest of the line verbatim; the engine filters invalid
            // characters itself
            let text = tokens.collect::<Vec<_>>().join(" ");
            if text.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line: line_number,
                    command: "paste",
                    expected: "text to insert",
                });
            }
            return Ok(Some(Command::SequenceInsertAll { text }));
        }
        "delete" => Command::SequenceDelete,
        "delete-next" => Command::SequenceDeleteNext,
        "goto" => {
            let index = parse_index(line_number, "goto", tokens.next(), "an index")?;
            Command::MoveCursor { index }
        }
        "left" => Command::MoveCursorLeft,
        "right" => Command::MoveCursorRight,
        "codon-start" => Command::MoveCursorToCodonStart,
        "codon-end" => Command::MoveCursorToCodonEnd,
        "start" => Command::MoveCursorToStart,
        "end" => Command::MoveCursorToEnd,
        "select" => {
            let start = parse_index(line_number, "select", tokens.next(), "start and end")?;
            let end = parse_index(line_number, "select", tokens.next(), "start and end")?;
            Command::SetSelection { start, end }
        }
        "select-all" => Command::SetSelectionAll,
        "deselect" => Command::ResetSelection,
        "expand-left" => Command::ExpandSelectionLeft,
        "expand-right" => Command::ExpandSelectionRight,
        "selected" => Command::GetSelectedSequence,
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_number,
                name: other.to_string(),
            })
        }
    };

    let name = command_keyword(&command);
    expect_no_more(line_number, name, tokens)?;
    Ok(Some(command))
}

fn command_keyword(command: &Command) -> &'static str {
    match command {
        Command::CalculateSequenceData { .. } => "view",
        Command::SequenceInsert { .. } => "insert",
        Command::SequenceInsertAll { .. } => "paste",
        Command::SequenceDelete => "delete",
        Command::SequenceDeleteNext => "delete-next",
        Command::MoveCursor { .. } => "goto",
        Command::MoveCursorLeft => "left",
        Command::MoveCursorRight => "right",
        Command::MoveCursorToCodonStart => "codon-start",
        Command::MoveCursorToCodonEnd => "codon-end",
        Command::MoveCursorToStart => "start",
        Command::MoveCursorToEnd => "end",
        Command::SetSelection { .. } => "select",
        Command::SetSelectionAll => "select-all",
        Command::ResetSelection => "deselect",
        Command::ExpandSelectionLeft => "expand-left",
        Command::ExpandSelectionRight => "expand-right",
        Command::GetSelectedSequence => "selected",
    }
}

/// Parses a whole script into a command list.
pub fn parse_script(text: &str) -> ScriptResult<Vec<Command>> {
    let mut commands = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(command) = parse_line(i + 1, line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parses and applies a script against a session, returning each command's
/// output in order.
pub fn run_script(session: &mut EditorSession, text: &str) -> ScriptResult<Vec<CommandOutput>> {
    let commands = parse_script(text)?;
    Ok(commands.iter().map(|c| c.apply(session)).collect())
}
