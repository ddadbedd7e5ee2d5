//! The read-execute-print loop around an [`Interpreter`].
//!
//! Input comes from a [`LineSource`], so the same loop serves the interactive
//! terminal ([`EditorSource`]) and scripted runs ([`ScriptSource`]).

use crate::error::ShellError;
use crate::interpreter::{HELP_TEXT, Interpreter};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};
use tracing::debug;

/// Presentation settings for a session.
#[derive(Clone, Debug)]
pub struct ShellConfig {
    /// Printed before every interactive read.
    pub prompt: String,
    /// Print the help text once at startup.
    pub show_banner: bool,
    /// Prefix each response with a tab.
    pub indent_responses: bool,
    /// Write each command back before its response.
    pub echo_commands: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "Type your command here:".to_owned(),
            show_banner: true,
            indent_responses: true,
            echo_commands: false,
        }
    }
}

/// A supplier of input lines. `Ok(None)` signals end of input.
pub trait LineSource {
    /// Reads the next line, without its trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying terminal or reader fails.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}

/// Interactive source backed by rustyline, with in-memory history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(&format!("{prompt}\n")) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Non-interactive source reading one command per line, e.g. from a file.
pub struct ScriptSource<R> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, ShellError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of input lines handed to the interpreter.
    pub commands: usize,
    /// `true` if the session ended with `EXIT`, `false` on end of input.
    pub exited: bool,
}

/// Runs `interpreter` until `EXIT` or end of input, writing responses to `out`.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run<S, W>(
    interpreter: &mut Interpreter,
    source: &mut S,
    out: &mut W,
    config: &ShellConfig,
) -> Result<RunSummary, ShellError>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    if config.show_banner {
        writeln!(out, "{HELP_TEXT}")?;
    }

    let mut commands = 0;
    while let Some(line) = source.read_line(&config.prompt)? {
        commands += 1;
        if config.echo_commands {
            writeln!(out, "> {line}")?;
        }

        let response = interpreter.execute(&line);
        if !response.should_continue() {
            writeln!(out, "{}", response.message)?;
            out.flush()?;
            debug!(commands, "session exited");
            return Ok(RunSummary {
                commands,
                exited: true,
            });
        }

        if !response.message.is_empty() {
            if config.indent_responses {
                writeln!(out, "\t{}", response.message)?;
            } else {
                writeln!(out, "{}", response.message)?;
            }
        }
        out.flush()?;
    }

    debug!(commands, "end of input");
    Ok(RunSummary {
        commands,
        exited: false,
    })
}
