// No-alloc fmt::Write buffer for telemetry lines and display text.
// Silently truncates on overflow; callers size N for their longest line.

use core::fmt::{self, Write};

#[derive(Clone)]
pub struct StackFmt<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> StackFmt<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    /// Buffer holding the formatted `args`.
    pub fn from_args(args: fmt::Arguments<'_>) -> Self {
        let mut s = Self::new();
        let _ = s.write_fmt(args);
        s
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<const N: usize> Default for StackFmt<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for StackFmt<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // never split a UTF-8 sequence when truncating
        let mut n = s.len().min(N - self.len);
        while !s.is_char_boundary(n) {
            n -= 1;
        }
        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        Ok(())
    }
}

impl<const N: usize> PartialEq<str> for StackFmt<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> fmt::Debug for StackFmt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_and_truncates() {
        let s = StackFmt::<8>::from_args(format_args!("{:.3}\n", 0.5f32));
        assert_eq!(s.as_str(), "0.500\n");

        let t = StackFmt::<4>::from_args(format_args!("{}", 123456));
        assert_eq!(t.as_str(), "1234");
    }

    #[test]
    fn truncation_keeps_valid_utf8() {
        let s = StackFmt::<4>::from_args(format_args!("ab\u{e9}\u{e9}"));
        assert_eq!(s.as_str(), "ab\u{e9}");
    }

    #[test]
    fn clear_reuses_the_buffer() {
        let mut s = StackFmt::<8>::new();
        let _ = write!(s, "12");
        s.clear();
        let _ = write!(s, "0");
        assert!(s == *"0");
        assert_eq!(s.len(), 1);
    }
}
