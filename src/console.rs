//! Line-oriented console abstraction
//!
//! The session state machine talks to the terminal only through [`LineIo`],
//! so it can be driven by a scripted reader in tests and by piped stdin in
//! non-interactive runs.

use std::io::{BufRead, Write};

use anyhow::Result;
use thiserror::Error;

/// Error reading a line from the console
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream ended (Ctrl-D, or a scripted reader ran out of lines)
    #[error("input stream closed")]
    Closed,
    /// The underlying reader failed
    #[error("could not read input: {0}")]
    Read(String),
}

/// One blocking prompt/read plus line output
pub trait LineIo {
    /// Print `prompt` (no trailing newline) and read one line, without the
    /// line terminator. Returns [`InputError::Closed`] at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Print one line of output
    fn write_line(&mut self, text: &str);
}

/// Interactive console backed by rustyline
pub struct StdConsole {
    editor: rustyline::DefaultEditor,
}

impl StdConsole {
    pub fn new() -> Result<Self> {
        let config = rustyline::Config::builder()
            .auto_add_history(true)
            .build();
        let editor = rustyline::DefaultEditor::with_config(config)?;
        Ok(Self { editor })
    }
}

impl LineIo for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            // Ctrl-C is treated like Ctrl-D: the session winds down cleanly
            Err(rustyline::error::ReadlineError::Eof)
            | Err(rustyline::error::ReadlineError::Interrupted) => Err(InputError::Closed),
            Err(e) => Err(InputError::Read(e.to_string())),
        }
    }

    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Console over arbitrary reader/writer pairs
///
/// Used when stdin is not a terminal (piped input) and by tests, which feed
/// a `Cursor` of scripted lines and inspect the collected output.
pub struct BufferedIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> BufferedIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console and hand back the writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> LineIo for BufferedIo<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{}", prompt).map_err(|e| InputError::Read(e.to_string()))?;
        self.writer.flush().map_err(|e| InputError::Read(e.to_string()))?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)
            .map_err(|e| InputError::Read(e.to_string()))?;
        if read == 0 {
            return Err(InputError::Closed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn write_line(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{}", text);
    }
}
