//! Line-oriented link collaborators.
//!
//! A link supplies newline-delimited command text and accepts reply lines.
//! The wired link is always considered attached; the wireless link only
//! receives replies while a peer is connected.

use heapless::String;

/// Longest accepted command line, in bytes.
pub const MAX_LINE_LEN: usize = 256;

/// One received command line, terminator excluded.
pub type Line = String<MAX_LINE_LEN>;

/// A bidirectional text link.
pub trait Link {
    /// Check whether a complete line is waiting.
    fn available(&mut self) -> bool;

    /// Take the next complete line, without its terminator.
    fn read_line(&mut self) -> Option<Line>;

    /// Send one line; the link appends the terminator.
    fn write_line(&mut self, line: &str);

    /// Check whether a remote peer is attached.
    fn has_peer(&self) -> bool {
        true
    }
}

/// Strip a trailing `\r` and surrounding whitespace from a received line.
#[inline]
pub fn clean_line(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n']).trim()
}

#[cfg(feature = "std")]
pub use self::stdio::StdioLink;

#[cfg(feature = "std")]
mod stdio {
    use std::io::{BufRead, ErrorKind, Write};

    use crate::log::log_warn;

    use super::{Line, Link, MAX_LINE_LEN};

    /// Link over any buffered reader and writer (stdin/stdout, a serial
    /// port opened as a file, a TCP stream).
    pub struct StdioLink<R, W> {
        reader: R,
        writer: W,
        pending: Option<Line>,
        eof: bool,
    }

    impl<R: BufRead, W: Write> StdioLink<R, W> {
        /// Wrap a reader and writer.
        pub fn new(reader: R, writer: W) -> Self {
            Self {
                reader,
                writer,
                pending: None,
                eof: false,
            }
        }

        /// Check whether the reader is exhausted.
        pub fn is_closed(&self) -> bool {
            self.eof && self.pending.is_none()
        }

        /// Read until one acceptable line is pending or the reader ends.
        ///
        /// Lines longer than [`MAX_LINE_LEN`] or not valid UTF-8 are dropped
        /// whole, never truncated.
        fn fill(&mut self) {
            let mut buf = std::vec::Vec::new();
            while self.pending.is_none() && !self.eof {
                buf.clear();
                match self.reader.read_until(b'\n', &mut buf) {
                    Ok(0) => self.eof = true,
                    Ok(_) => self.pending = decode_line(&buf),
                    Err(e) if e.kind() == ErrorKind::Interrupted => {}
                    Err(_) => self.eof = true,
                }
            }
        }
    }

    fn decode_line(raw: &[u8]) -> Option<Line> {
        let mut end = raw.len();
        while end > 0 && matches!(raw[end - 1], b'\n' | b'\r') {
            end -= 1;
        }
        let raw = &raw[..end];

        if raw.len() > MAX_LINE_LEN {
            log_warn!("dropped line of {} bytes", raw.len());
            return None;
        }
        match core::str::from_utf8(raw) {
            Ok(text) => Line::try_from(text).ok(),
            Err(_) => {
                log_warn!("dropped non-UTF-8 line");
                None
            }
        }
    }

    impl<R: BufRead, W: Write> Link for StdioLink<R, W> {
        fn available(&mut self) -> bool {
            self.fill();
            self.pending.is_some()
        }

        fn read_line(&mut self) -> Option<Line> {
            self.fill();
            self.pending.take()
        }

        fn write_line(&mut self, line: &str) {
            let _ = writeln!(self.writer, "{}", line);
            let _ = self.writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line() {
        assert_eq!(clean_line("HEALTH\r"), "HEALTH");
        assert_eq!(clean_line("  H30,X0 \r\n"), "H30,X0");
        assert_eq!(clean_line(""), "");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_stdio_link_reads_lines() {
        let input: &[u8] = b"HOME\r\nX10,Y5\n";
        let mut out = std::vec::Vec::new();
        {
            let mut link = StdioLink::new(input, &mut out);
            assert!(link.available());
            assert_eq!(link.read_line().unwrap().as_str(), "HOME");
            assert_eq!(link.read_line().unwrap().as_str(), "X10,Y5");
            assert!(link.read_line().is_none());
            assert!(link.is_closed());
            link.write_line("OK");
        }
        assert_eq!(out, b"OK\n");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_stdio_link_drops_overlong_line() {
        let mut input = std::vec::Vec::new();
        while input.len() < MAX_LINE_LEN {
            input.extend_from_slice(b"X0,");
        }
        input.extend_from_slice(b"H75\nH10\n");

        let mut link = StdioLink::new(&input[..], std::io::sink());
        assert_eq!(link.read_line().unwrap().as_str(), "H10");
        assert!(link.read_line().is_none());
        assert!(link.is_closed());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_stdio_link_accepts_full_length_line() {
        let mut input = std::vec![b'1'; MAX_LINE_LEN];
        input.extend_from_slice(b"\r\n");

        let mut link = StdioLink::new(&input[..], std::io::sink());
        assert_eq!(link.read_line().map(|l| l.len()), Some(MAX_LINE_LEN));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_stdio_link_survives_invalid_utf8() {
        let input: &[u8] = b"H\xff10\nH10\n";
        let mut link = StdioLink::new(input, std::io::sink());
        assert!(link.available());
        assert!(!link.is_closed());
        assert_eq!(link.read_line().unwrap().as_str(), "H10");
        assert!(link.read_line().is_none());
    }
}
