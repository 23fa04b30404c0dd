//! Interpret a template.
//!
//! Text is copied to the output until a `%` marker is found. `%%` is a
//! literal `%`. Any other marker starts a directive, which is everything up
//! to the end of the line (the command line).
//!
//! Directives that take the whole line (`%file`, `%next`, `%empty`,
//! `%bytes` and `%stop`) consume the newline too. Numeric directives only
//! consume their name and the digits of their argument, so the rest of the
//! line is copied as normal text.

use crate::buffers::Buffers;
use crate::error::{Error, Result};
use crate::forms::{self, Command, Matched};
use crate::render::ByteDump;
use memchr::memchr;
use std::io::Write;

mod loader;


pub use loader::{FileSystem, Loader};

/// Marker to start a directive.
const MARKER: u8 = b'%';

/// What to do after a directive.
#[derive(PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

pub struct Interpreter<L, O, D> {
    loader: L,
    output: O,
    diagnostics: D,
    buffers: Buffers,
}

impl<L, O, D> Interpreter<L, O, D>
where
    L: Loader,
    O: Write,
    D: Write,
{
    /// Create a new interpreter.
    ///
    /// `output` receives the rendered template, and `diagnostics` a
    /// `command %<line>` line for every directive.
    pub fn new(loader: L, output: O, diagnostics: D) -> Self {
        Interpreter {
            loader,
            output,
            diagnostics,
            buffers: Buffers::new(),
        }
    }

    /// Data and context after the last directive.
    pub fn buffers(&self) -> &Buffers {
        &self.buffers
    }

    /// Interpret the whole template.
    ///
    /// The output is not flushed.
    pub fn run(&mut self, template: &str) -> Result<()> {
        let bytes = template.as_bytes();
        let mut cursor = 0;

        while cursor < bytes.len() {
            // Copy text up to the next marker.
            let marker = match memchr(MARKER, &bytes[cursor..]) {
                Some(offset) => cursor + offset,
                None => {
                    self.output.write_all(&bytes[cursor..])?;
                    break;
                }
            };

            self.output.write_all(&bytes[cursor..marker])?;
            cursor = marker;

            if bytes.get(cursor + 1) == Some(&MARKER) {
                self.output.write_all(&[MARKER])?;
                cursor += 2;
                continue;
            }

            let end = memchr(b'\n', &bytes[cursor..]).unwrap_or(bytes.len() - cursor);
            let line = &template[cursor + 1..cursor + end];

            writeln!(self.diagnostics, "command %{}", line)?;

            match forms::match_line(line)? {
                Matched::Line { command, argument } => {
                    cursor += end + 1;

                    if self.execute(command, argument)? == Flow::Stop {
                        let rest = template.get(cursor..).unwrap_or_default();
                        tracing::debug!(bytes = rest.len(), "stop interpreting directives");
                        self.output.write_all(rest.as_bytes())?;
                        break;
                    }
                }

                Matched::Span {
                    format,
                    index,
                    consumed,
                } => {
                    tracing::trace!(?format, index, "render");
                    format.write(self.buffers.context(), index, &mut self.output)?;
                    cursor += 1 + consumed;
                }
            }
        }

        Ok(())
    }

    /// Execute a directive that takes the whole command line.
    fn execute(&mut self, command: Command, argument: &str) -> Result<Flow> {
        match command {
            Command::Load => {
                let data = self.loader.load(argument).map_err(|source| Error::Load {
                    path: argument.to_owned(),
                    source,
                })?;

                tracing::debug!(path = argument, bytes = data.len(), "file loaded");
                self.buffers.load(data);
            }

            Command::Next => {
                let count = forms::parse_count(argument)?;
                self.buffers.next(count)?;
                tracing::debug!(
                    context = self.buffers.context().len(),
                    remaining = self.buffers.data().len(),
                    "context taken"
                );
            }

            Command::Empty => self.buffers.ensure_empty()?,

            Command::Bytes => write!(self.output, "{}", ByteDump(self.buffers.context()))?,

            Command::Stop => return Ok(Flow::Stop),
        }

        Ok(Flow::Continue)
    }
}

/// Interpret `template` with files from the file system.
pub fn interpret(template: &str, output: impl Write, diagnostics: impl Write) -> Result<()> {
    Interpreter::new(FileSystem, output, diagnostics).run(template)
}
