//! Output destinations.
//!
//! Rendering writes through the [`Sink`] trait, so every entry point shares the
//! same formatting code and only differs in where the text goes:
//!
//! - `String`: the whole rendering
//! - [`SizeCounter`]: only the length, nothing materialized
//! - [`TruncatingBuffer`]: at most `N` bytes of a caller buffer, plus the total
//!   length the full rendering would have had
//!
//! Implement [`Sink`] for your own type and pass it to [`format_into`](crate::format_into)
//! to receive the text piece by piece.
//!
//! ```rust
//! use textfmt::{args, format_to_n};
//!
//! let mut buf = [0u8; 5];
//! let result = format_to_n(&mut buf, "{}", &args![1_000_000]).unwrap();
//! assert_eq!(&buf[..result.written], b"10000");
//! assert_eq!(result.size, 7);
//! assert!(result.is_truncated());
//! ```

/// Receives rendered text.
pub trait Sink {
    fn write_str(&mut self, s: &str);

    fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf));
    }
}

impl Sink for String {
    fn write_str(&mut self, s: &str) {
        self.push_str(s);
    }

    fn write_char(&mut self, c: char) {
        self.push(c);
    }
}

/// Counts the bytes a rendering would produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizeCounter {
    size: usize,
}

impl SizeCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Sink for SizeCounter {
    fn write_str(&mut self, s: &str) {
        self.size += s.len();
    }

    fn write_char(&mut self, c: char) {
        self.size += c.len_utf8();
    }
}

/// Writes into a fixed byte buffer and keeps counting past its end.
///
/// The written prefix is always valid UTF-8: once a character doesn't fit, nothing
/// more is written, so `written` may stop short of the buffer length.
#[derive(Debug)]
pub struct TruncatingBuffer<'b> {
    buf: &'b mut [u8],
    written: usize,
    size: usize,
    full: bool,
}

impl<'b> TruncatingBuffer<'b> {
    pub fn new(buf: &'b mut [u8]) -> Self {
        TruncatingBuffer {
            buf,
            written: 0,
            size: 0,
            full: false,
        }
    }

    /// Bytes stored in the buffer.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Bytes the untruncated rendering has.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The stored prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only whole characters are ever copied in.
        std::str::from_utf8(&self.buf[..self.written]).unwrap_or_default()
    }
}

impl Sink for TruncatingBuffer<'_> {
    fn write_str(&mut self, s: &str) {
        self.size += s.len();
        if self.full {
            return;
        }

        let available = self.buf.len() - self.written;
        if s.len() <= available {
            self.buf[self.written..self.written + s.len()].copy_from_slice(s.as_bytes());
            self.written += s.len();
            return;
        }

        let mut fits = 0;
        for (i, ch) in s.char_indices() {
            if i + ch.len_utf8() > available {
                break;
            }
            fits = i + ch.len_utf8();
        }
        self.buf[self.written..self.written + fits].copy_from_slice(&s.as_bytes()[..fits]);
        self.written += fits;
        self.full = true;
    }
}

/// Outcome of [`format_to_n`](crate::format_to_n).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatToN {
    /// Bytes written into the buffer.
    pub written: usize,
    /// Bytes of the complete rendering.
    pub size: usize,
}

impl FormatToN {
    /// Whether the buffer received less than the whole rendering.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.written < self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink() {
        let mut out = String::new();
        Sink::write_str(&mut out, "ab");
        Sink::write_char(&mut out, 'c');
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_size_counter() {
        let mut counter = SizeCounter::new();
        counter.write_str("hello");
        counter.write_char('é');
        assert_eq!(counter.size(), 7);
    }

    #[test]
    fn test_truncating_buffer_fits() {
        let mut buf = [0u8; 8];
        let mut sink = TruncatingBuffer::new(&mut buf);
        sink.write_str("abc");
        sink.write_str("de");
        assert_eq!(sink.as_str(), "abcde");
        assert_eq!((sink.written(), sink.size()), (5, 5));
    }

    #[test]
    fn test_truncating_buffer_overflow() {
        let mut buf = [0u8; 4];
        let mut sink = TruncatingBuffer::new(&mut buf);
        sink.write_str("abc");
        sink.write_str("def");
        sink.write_str("g");
        assert_eq!(sink.as_str(), "abcd");
        assert_eq!((sink.written(), sink.size()), (4, 7));
    }

    #[test]
    fn test_truncating_buffer_keeps_utf8() {
        let mut buf = [0u8; 4];
        let mut sink = TruncatingBuffer::new(&mut buf);
        sink.write_str("aé");
        sink.write_str("é");
        sink.write_str("b");
        assert_eq!(sink.as_str(), "aé");
        assert_eq!((sink.written(), sink.size()), (3, 6));
    }

    #[test]
    fn test_zero_capacity() {
        let mut buf = [0u8; 0];
        let mut sink = TruncatingBuffer::new(&mut buf);
        sink.write_str("xyz");
        assert_eq!((sink.written(), sink.size()), (0, 3));
    }

    #[test]
    fn test_format_to_n_truncated() {
        let short = FormatToN {
            written: 3,
            size: 4,
        };
        assert!(short.is_truncated());
        assert!(!FormatToN { size: 3, ..short }.is_truncated());
    }
}
