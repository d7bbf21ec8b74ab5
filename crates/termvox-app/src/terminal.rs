//! Terminal setup and frame output.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing::{debug, warn};

/// Where rendered frames go.
pub trait TerminalOutput {
    /// Put the cursor at the top-left corner so the next write overdraws
    /// the previous frame.
    fn move_cursor_home(&mut self) -> io::Result<()>;

    /// Write frame text.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Flush everything written so far.
    fn flush(&mut self) -> io::Result<()>;
}

/// Writes frames to stdout, or to any other writer.
///
/// Raw mode turns off output post-processing, so `\n` is written as `\r\n`
/// to return to the first column.
#[derive(Debug)]
pub struct StdoutOutput<W: Write = Stdout> {
    out: BufWriter<W>,
}

impl Default for StdoutOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutOutput {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> StdoutOutput<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            out: BufWriter::with_capacity(16 * 1024, writer),
        }
    }

    /// The underlying writer. Unflushed output is not visible here.
    pub fn get_ref(&self) -> &W {
        self.out.get_ref()
    }
}

impl<W: Write> TerminalOutput for StdoutOutput<W> {
    fn move_cursor_home(&mut self) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.out.write_all(b"\r\n")?;
            }
            self.out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Keeps frames in memory, one string per `move_cursor_home`.
#[derive(Debug, Default, Clone)]
pub struct MemoryOutput {
    frames: Vec<String>,
    flushes: usize,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame written, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub const fn flushes(&self) -> usize {
        self.flushes
    }
}

impl TerminalOutput for MemoryOutput {
    fn move_cursor_home(&mut self) -> io::Result<()> {
        self.frames.push(String::new());
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        match self.frames.last_mut() {
            Some(frame) => frame.push_str(text),
            None => self.frames.push(text.to_owned()),
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Puts the terminal into the mode the frame loop needs and restores it on
/// drop.
///
/// Raw mode delivers keys without waiting for Enter and without echo. A step
/// that fails is logged and skipped; the app keeps running with whatever the
/// terminal supports.
#[derive(Debug)]
pub struct TerminalSession {
    raw_mode: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
}

impl TerminalSession {
    pub fn enter(alternate_screen: bool) -> Self {
        let raw_mode = match enable_raw_mode() {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to enable raw mode, input will be line buffered: {e}");
                false
            }
        };

        let mut stdout = io::stdout();
        let alternate_screen = alternate_screen
            && match execute!(stdout, EnterAlternateScreen) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Failed to enter alternate screen: {e}");
                    false
                }
            };
        if !alternate_screen {
            if let Err(e) = execute!(stdout, Clear(ClearType::All)) {
                warn!("Failed to clear screen: {e}");
            }
        }

        let cursor_hidden = match execute!(stdout, Hide) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to hide cursor: {e}");
                false
            }
        };

        debug!(raw_mode, alternate_screen, cursor_hidden, "terminal session entered");
        Self {
            raw_mode,
            alternate_screen,
            cursor_hidden,
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.cursor_hidden {
            if let Err(e) = execute!(stdout, Show) {
                warn!("Failed to show cursor: {e}");
            }
        }
        if self.alternate_screen {
            if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
                warn!("Failed to leave alternate screen: {e}");
            }
        }
        if self.raw_mode {
            if let Err(e) = disable_raw_mode() {
                warn!("Failed to disable raw mode: {e}");
            }
        }
        debug!("terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_output_splits_frames_at_cursor_home() {
        let mut out = MemoryOutput::new();
        out.move_cursor_home().unwrap();
        out.write("ab\n").unwrap();
        out.write("cd\n").unwrap();
        out.flush().unwrap();
        out.move_cursor_home().unwrap();
        out.write("ef\n").unwrap();

        assert_eq!(out.frames(), &["ab\ncd\n".to_owned(), "ef\n".to_owned()]);
        assert_eq!(out.last_frame(), Some("ef\n"));
        assert_eq!(out.flushes(), 1);
    }

    #[test]
    fn stdout_output_writes_crlf() {
        let mut out = StdoutOutput::with_writer(Vec::new());
        out.move_cursor_home().unwrap();
        out.write("@o\x1B[0m\n  \x1B[0m\n").unwrap();
        out.flush().unwrap();

        let written = String::from_utf8(out.get_ref().clone()).unwrap();
        assert_eq!(written, "\x1B[1;1H@o\x1B[0m\r\n  \x1B[0m\r\n");
    }

    #[test]
    fn memory_output_without_home_starts_a_frame() {
        let mut out = MemoryOutput::new();
        out.write("x").unwrap();
        assert_eq!(out.frames().len(), 1);
    }
}
