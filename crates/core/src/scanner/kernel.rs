// crates/core/src/scanner/kernel.rs
//! # Byte kernel
//!
//! Advances a [`ScanState`] by one chunk of bytes. Chunk boundaries may fall
//! anywhere, including inside a marker: the match pointers carry over, so
//! feeding `a` then `b` is identical to feeding `a ∥ b`.
//!
//! ## Per-byte rules
//!
//! | Byte | Effect |
//! |------|--------|
//! | UTF-8 continuation | ignored entirely |
//! | `HT VT FF CR SPACE` | resets all match pointers |
//! | `\n` | terminates the line, leaves a single-line comment |
//! | inside `//`-style comment | skipped up to the next `\n` |
//! | inside block comment | matched against the closer only |
//! | otherwise | matched against both openers; counted as valid if neither advanced |
//!
//! Marker matching is a naive prefix match with greedy reset: on a mismatch
//! at position `k > 0` the byte is re-tested against position 0. Markers
//! with self-overlapping prefixes (`"aab"` on `"aaab"`) can therefore miss.
//!
//! Bytes that advance a pointer without completing a marker are not counted
//! as valid characters, even if the match later fails.

use memchr::memchr;

use super::state::{Phase, ScanState};
use crate::marker::{Marker, is_blank, is_continuation};

/// The byte advanced the single-line opener without completing it.
const PARTIAL_SINGLE: u8 = 0b01;
/// The byte advanced the block opener without completing it.
const PARTIAL_MSTART: u8 = 0b10;

impl ScanState {
    /// Advance the state by exactly `chunk`. Never allocates.
    pub fn feed(&mut self, chunk: &[u8]) {
        let Some(&last) = chunk.last() else {
            return;
        };

        let mut i = 0;
        while i < chunk.len() {
            let b = chunk[i];
            i += 1;

            if is_continuation(b) {
                continue;
            }
            if is_blank(b) {
                self.reset_pointers();
                continue;
            }
            if b == b'\n' {
                self.reset_pointers();
                self.end_line();
                continue;
            }

            match self.phase {
                Phase::SingleLine => i = next_newline(chunk, i),
                Phase::MultiLine => self.match_block_end(b),
                Phase::Code => {
                    self.match_code(b);
                    if self.phase == Phase::SingleLine {
                        i = next_newline(chunk, i);
                    }
                }
            }
        }

        self.last_byte = Some(last);
    }

    fn match_block_end(&mut self, b: u8) {
        let Some(end) = self.config.markers.multiline_end() else {
            return;
        };
        if advance(end, &mut self.p_mend, b) && self.p_mend == end.len() {
            self.enter(Phase::Code);
        }
    }

    fn match_code(&mut self, b: u8) {
        let markers = self.config.markers;
        let mut partial = 0u8;
        let mut opened = None;

        // Block opener first: it wins a tie with the single-line opener.
        if let Some(start) = markers.multiline_start()
            && advance(start, &mut self.p_mstart, b)
        {
            if self.p_mstart == start.len() {
                opened = Some(Phase::MultiLine);
            } else {
                partial |= PARTIAL_MSTART;
            }
        }

        if let Some(single) = markers.singleline()
            && advance(single, &mut self.p_single, b)
        {
            if self.p_single == single.len() {
                opened = opened.or(Some(Phase::SingleLine));
            } else {
                partial |= PARTIAL_SINGLE;
            }
        }

        if let Some(phase) = opened {
            self.enter(phase);
        } else if partial == 0 {
            self.valid_chars += 1;
        }
    }
}

/// Step a match pointer over `b`. Returns whether the pointer advanced.
#[inline]
fn advance(marker: &Marker, pos: &mut usize, b: u8) -> bool {
    if marker.byte_at(*pos) == b {
        *pos += 1;
        true
    } else if *pos > 0 && marker.first() == b {
        *pos = 1;
        true
    } else {
        *pos = 0;
        false
    }
}

/// Index of the next `\n` at or after `from`, or the end of the chunk.
#[inline]
fn next_newline(chunk: &[u8], from: usize) -> usize {
    memchr(b'\n', &chunk[from..]).map_or(chunk.len(), |offset| from + offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CommentMarkers, ScanConfig};
    use crate::stats::LineTally;

    fn scan(markers: CommentMarkers, threshold: usize, input: &[u8]) -> LineTally {
        let mut state = ScanState::new(ScanConfig::new(markers).with_threshold(threshold));
        state.feed(input);
        state.finish()
    }

    fn c_like() -> CommentMarkers {
        CommentMarkers::new(b"//", b"/*", b"*/").unwrap()
    }

    #[test]
    fn counts_plain_lines() {
        assert_eq!(scan(c_like(), 0, b"a\nb\nc\n"), LineTally::new(3, 3));
    }

    #[test]
    fn blank_lines_are_not_loc() {
        assert_eq!(scan(c_like(), 0, b"a\n\n  \nb\n"), LineTally::new(4, 2));
    }

    #[test]
    fn singleline_comment_line() {
        assert_eq!(scan(c_like(), 0, b"// just a comment\ncode;\n"), LineTally::new(2, 1));
    }

    #[test]
    fn block_comment_spanning_lines() {
        assert_eq!(scan(c_like(), 0, b"/* block\nstill block */\nx\n"), LineTally::new(3, 1));
    }

    #[test]
    fn inline_block_comment() {
        assert_eq!(scan(c_like(), 0, b"x /* mid */ y\n"), LineTally::new(1, 1));
    }

    #[test]
    fn missing_trailing_newline() {
        assert_eq!(scan(c_like(), 0, b"abc"), LineTally::new(1, 1));
    }

    #[test]
    fn hash_comments_without_block_markers() {
        let markers = CommentMarkers::new(b"#", b"", b"").unwrap();
        assert_eq!(scan(markers, 0, b"# hello\nprint(1)\n"), LineTally::new(2, 1));
    }

    #[test]
    fn byte_sized_chunks_match_whole_buffer() {
        let input = b"a;\n".repeat(16);
        let whole = scan(c_like(), 0, &input);

        let mut state = ScanState::new(ScanConfig::new(c_like()));
        for byte in input.chunks(1) {
            state.feed(byte);
        }
        assert_eq!(state.finish(), whole);
        assert_eq!(whole, LineTally::new(16, 16));
    }

    #[test]
    fn block_closer_inside_singleline_text() {
        // "// */" inside a block closes it; the rest of the file is comments or code
        let input = b"// Nested comments!\n/* Here's a multiline block\n//\n// */\n// The above line should end the commmented block\nint main(){return 0;}";
        assert_eq!(scan(c_like(), 0, input), LineTally::new(6, 1));
    }

    #[test]
    fn asymmetric_block_markers() {
        let markers = CommentMarkers::new(b"", b"<!--", b"-->").unwrap();
        assert_eq!(scan(markers, 0, b"<!-- Start\nContinuation\nEnd -->"), LineTally::new(3, 0));
    }

    #[test]
    fn marker_split_across_chunks() {
        let mut state = ScanState::new(ScanConfig::new(c_like()));
        state.feed(b"x = 1; /");
        state.feed(b"* comment *");
        assert_eq!(state.phase(), Phase::MultiLine);
        state.feed(b"/\n");
        assert_eq!(state.phase(), Phase::Code);
        assert_eq!(state.finish(), LineTally::new(1, 1));
    }

    #[test]
    fn whitespace_breaks_marker() {
        // "/ /" is two slashes, not a comment opener
        let mut state = ScanState::new(ScanConfig::new(c_like()));
        state.feed(b"/ /");
        assert_eq!(state.phase(), Phase::Code);
    }

    #[test]
    fn continuation_bytes_do_not_break_marker() {
        let mut state = ScanState::new(ScanConfig::new(c_like()));
        state.feed(&[b'/', 0x80, b'/']);
        assert_eq!(state.phase(), Phase::SingleLine);
    }

    #[test]
    fn aborted_prefix_is_not_counted() {
        // '/' starts both openers, then 'x' breaks them: only 'x' counts
        let mut state = ScanState::new(ScanConfig::new(c_like()));
        state.feed(b"/x");
        assert_eq!(state.valid_chars(), 1);
    }

    #[test]
    fn greedy_reset_retests_first_byte() {
        let markers = CommentMarkers::new(b"--", b"", b"").unwrap();
        let mut state = ScanState::new(ScanConfig::new(markers));
        state.feed(b"a-");
        state.feed(b"-b");
        assert_eq!(state.phase(), Phase::SingleLine);

        // closer "*/" reached through "**/"
        let mut state = ScanState::new(ScanConfig::new(c_like()));
        state.feed(b"/* x **/ y");
        assert_eq!(state.phase(), Phase::Code);
        assert_eq!(state.valid_chars(), 1);
    }

    #[test]
    fn block_opener_wins_tie() {
        let markers = CommentMarkers::new(b"#", b"#", b"!").unwrap();
        let mut state = ScanState::new(ScanConfig::new(markers));
        state.feed(b"# still open\nx ! y\n");
        assert_eq!(state.finish(), LineTally::new(2, 1));
    }

    #[test]
    fn first_completed_opener_wins() {
        // Julia-style: "#" completes before "#=" can
        let markers = CommentMarkers::new(b"#", b"#=", b"=#").unwrap();
        let mut state = ScanState::new(ScanConfig::new(markers));
        state.feed(b"#= x\n");
        assert_eq!(state.phase(), Phase::Code);
        assert_eq!(state.finish(), LineTally::new(1, 0));
    }

    #[test]
    fn threshold_filters_short_lines() {
        let input = b"}\nx = 1;\n";
        assert_eq!(scan(c_like(), 0, input), LineTally::new(2, 2));
        assert_eq!(scan(c_like(), 2, input), LineTally::new(2, 1));
        assert_eq!(scan(c_like(), 4, input), LineTally::new(2, 1));
        assert_eq!(scan(c_like(), 5, input), LineTally::new(2, 0));
    }

    #[test]
    fn trailing_singleline_comment_is_not_loc() {
        assert_eq!(scan(c_like(), 0, b"x\n// x"), LineTally::new(2, 1));
    }

    #[test]
    fn no_markers_counts_non_blank_lines() {
        assert_eq!(scan(CommentMarkers::none(), 0, b"// a\n\t\n#b"), LineTally::new(3, 2));
    }

    #[test]
    fn non_ascii_lead_bytes_are_valid() {
        let mut state = ScanState::new(ScanConfig::new(c_like()));
        state.feed("日本".as_bytes());
        assert_eq!(state.valid_chars(), 2);
    }

    #[test]
    fn empty_chunk_is_a_no_op() {
        let mut state = ScanState::new(ScanConfig::new(c_like()));
        state.feed(b"");
        assert!(!state.has_input());
        state.feed(b"a\n");
        state.feed(b"");
        assert_eq!(state.finish(), LineTally::new(1, 1));
    }
}
