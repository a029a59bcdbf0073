//! Line-oriented console abstraction.
//!
//! The session only talks to a [`Console`], so it can be driven by the real
//! terminal or by in-memory buffers.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::error::RosterResult;

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Read-line/write-line capability used by the session.
pub trait Console {
    /// Reads one line without its trailing line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> RosterResult<Option<String>>;

    /// Writes text without a trailing newline.
    fn write(&mut self, text: &str) -> RosterResult<()>;

    /// Writes text followed by a newline.
    fn write_line(&mut self, text: &str) -> RosterResult<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Clears the visible screen.
    fn clear(&mut self) -> RosterResult<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self) -> RosterResult<Option<String>> {
        (**self).read_line()
    }

    fn write(&mut self, text: &str) -> RosterResult<()> {
        (**self).write(text)
    }

    fn write_line(&mut self, text: &str) -> RosterResult<()> {
        (**self).write_line(text)
    }

    fn clear(&mut self) -> RosterResult<()> {
        (**self).clear()
    }
}

/// A [`Console`] over any buffered reader and writer.
///
/// # Example
///
/// ```
/// use salary_roster::session::{Console, IoConsole};
/// use std::io::Cursor;
///
/// let mut console = IoConsole::new(Cursor::new("Ana\r\n"), Vec::new());
/// console.write("Digite o nome: ").unwrap();
/// assert_eq!(console.read_line().unwrap(), Some("Ana".to_string()));
/// assert_eq!(console.read_line().unwrap(), None);
/// assert_eq!(console.into_writer(), b"Digite o nome: ");
/// ```
#[derive(Debug)]
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoConsole<R, W> {
    /// Creates a console reading from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl IoConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> RosterResult<Option<String>> {
        // Prompts are written without a newline; make them visible first.
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> RosterResult<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn clear(&mut self) -> RosterResult<()> {
        self.writer.write_all(CLEAR_SCREEN.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
