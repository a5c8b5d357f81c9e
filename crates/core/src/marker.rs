// crates/core/src/marker.rs
//! コメントマーカー (固定長バイト列)

use core::fmt;

use crate::error::MarkerError;

/// Longest marker the scanner accepts, in bytes.
pub const MAX_MARKER_LEN: usize = 16;

/// A comment marker stored inline so the scanner never touches the heap.
///
/// Markers are raw bytes. Bytes the scanner consumes before matching
/// (ASCII blanks, `\n`, UTF-8 continuation bytes) are rejected because a
/// marker containing them could never complete.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    bytes: [u8; MAX_MARKER_LEN],
    len: u8,
}

impl Marker {
    /// Validate `bytes` and store them as a marker.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError`] for empty, oversized or unmatchable input.
    pub fn new(bytes: &[u8]) -> Result<Self, MarkerError> {
        if bytes.is_empty() {
            return Err(MarkerError::Empty);
        }
        if bytes.len() > MAX_MARKER_LEN {
            return Err(MarkerError::TooLong { len: bytes.len(), max: MAX_MARKER_LEN });
        }
        if let Some(offset) = bytes.iter().position(|&b| !is_matchable(b)) {
            return Err(MarkerError::Unmatchable { byte: bytes[offset], offset });
        }
        Ok(Self::from_literal(bytes))
    }

    /// Build a marker from a literal known to be valid.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn from_literal(bytes: &[u8]) -> Self {
        let mut buf = [0u8; MAX_MARKER_LEN];
        let mut i = 0;
        while i < bytes.len() {
            buf[i] = bytes[i];
            i += 1;
        }
        Self { bytes: buf, len: bytes.len() as u8 }
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; empty markers are unrepresentable.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) const fn first(&self) -> u8 {
        self.bytes[0]
    }

    #[inline]
    pub(crate) const fn byte_at(&self, pos: usize) -> u8 {
        self.bytes[pos]
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marker(\"{}\")", self.as_bytes().escape_ascii())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_bytes().escape_ascii())
    }
}

/// Bytes that reach the marker-matching stage of the scanner.
#[inline]
pub(crate) const fn is_matchable(b: u8) -> bool {
    !(is_continuation(b) || is_blank(b) || b == b'\n')
}

#[inline]
pub(crate) const fn is_continuation(b: u8) -> bool {
    b & 0b1100_0000 == 0b1000_0000
}

/// HT, VT, FF, CR and SPACE. Newline is handled separately.
#[inline]
pub(crate) const fn is_blank(b: u8) -> bool {
    matches!(b, 0x09 | 0x0B | 0x0C | 0x0D | 0x20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_bytes_inline() {
        let marker = Marker::new(b"<!--").unwrap();
        assert_eq!(marker.as_bytes(), b"<!--");
        assert_eq!(marker.len(), 4);
        assert_eq!(marker.first(), b'<');
        assert_eq!(marker.byte_at(3), b'-');
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert_eq!(Marker::new(b""), Err(MarkerError::Empty));
        assert_eq!(
            Marker::new(&[b'#'; MAX_MARKER_LEN + 1]),
            Err(MarkerError::TooLong { len: MAX_MARKER_LEN + 1, max: MAX_MARKER_LEN })
        );
        assert!(Marker::new(&[b'#'; MAX_MARKER_LEN]).is_ok());
    }

    #[test]
    fn rejects_bytes_the_scanner_skips() {
        assert_eq!(
            Marker::new(b"/ *"),
            Err(MarkerError::Unmatchable { byte: b' ', offset: 1 })
        );
        assert_eq!(
            Marker::new(b"--\n"),
            Err(MarkerError::Unmatchable { byte: b'\n', offset: 2 })
        );
        // "é" = C3 A9; A9 is a continuation byte
        assert_eq!(
            Marker::new("é".as_bytes()),
            Err(MarkerError::Unmatchable { byte: 0xA9, offset: 1 })
        );
    }

    #[test]
    fn lead_bytes_are_matchable() {
        assert!(is_matchable(0xC3));
        assert!(!is_matchable(0x80));
        assert!(!is_matchable(b'\t'));
    }

    #[test]
    fn debug_escapes_bytes() {
        let marker = Marker::from_literal(b"(*");
        assert_eq!(format!("{marker:?}"), "Marker(\"(*\")");
    }
}
