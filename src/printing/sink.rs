use std::convert::Infallible;
use std::io::{self, LineWriter, Write};

/// The line terminator used between lines of output.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// The line terminator used between lines of output.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const SPACES: &str = "                                                                ";

/// A destination for pretty-printed text.
pub trait Sink {
    /// An error that can happen when writing. It is forbidden from containing non-static
    /// references, so that it can be boxed or wrapped by callers.
    type Error: std::error::Error + 'static;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error>;

    /// Write `width` spaces.
    fn write_indent(&mut self, width: usize) -> Result<(), Self::Error> {
        let mut remaining = width;
        while remaining > 0 {
            let n = remaining.min(SPACES.len());
            self.write_str(&SPACES[..n])?;
            remaining -= n;
        }
        Ok(())
    }

    fn write_line_end(&mut self) -> Result<(), Self::Error> {
        self.write_str(LINE_ENDING)
    }
}

impl Sink for String {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.push_str(s);
        Ok(())
    }
}

/// A line-buffered [`Sink`] over any byte stream. Text is written as UTF-8.
///
/// Dropping the sink releases the underlying stream (closing it, if it's a file), after making a
/// best-effort attempt to flush. Call [`IoSink::finish`] instead to find out whether the final
/// flush succeeded.
#[derive(Debug)]
pub struct IoSink<W: Write> {
    writer: LineWriter<W>,
}

impl<W: Write> IoSink<W> {
    pub fn new(writer: W) -> IoSink<W> {
        IoSink {
            writer: LineWriter::new(writer),
        }
    }

    /// Flush any buffered output, then release the stream.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> Sink for IoSink<W> {
    type Error = io::Error;

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_indent() {
        let mut out = String::new();
        out.write_indent(0).unwrap();
        assert_eq!(out, "");
        out.write_indent(SPACES.len() + 3).unwrap();
        assert_eq!(out.len(), SPACES.len() + 3);
        assert!(out.chars().all(|ch| ch == ' '));
    }

    #[test]
    fn test_io_sink() {
        let mut bytes = Vec::new();
        let mut sink = IoSink::new(&mut bytes);
        sink.write_str("héllo").unwrap();
        sink.write_line_end().unwrap();
        sink.write_str("partial").unwrap();
        sink.finish().unwrap();
        assert_eq!(bytes, format!("héllo{}partial", LINE_ENDING).into_bytes());
    }
}
