// crates/core/src/scanner/state.rs
//! スキャナの状態 (ファイルごとに生成)

use crate::config::ScanConfig;
use crate::stats::LineTally;

/// Comment phase of the scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Code,
    /// Inside `singleline ... \n`.
    SingleLine,
    /// Inside `multiline_start ... multiline_end`. Survives newlines.
    MultiLine,
}

/// Mutable scanner state for one byte stream.
///
/// Created per file, advanced by [`ScanState::feed`], and consumed by
/// [`ScanState::finish`] or [`ScanState::finalize`].
///
/// ```
/// use count_loc_core::{CommentMarkers, LineTally, ScanConfig, ScanState};
///
/// let markers = CommentMarkers::new(b"//", b"/*", b"*/").unwrap();
/// let mut state = ScanState::new(ScanConfig::new(markers));
/// state.feed(b"int x; /");
/// state.feed(b"/ trailing\n/* block */\n");
/// assert_eq!(state.finish(), LineTally::new(2, 1));
/// ```
#[derive(Debug, Clone)]
pub struct ScanState {
    pub(super) config: ScanConfig,
    pub(super) phase: Phase,
    pub(super) p_single: usize,
    pub(super) p_mstart: usize,
    pub(super) p_mend: usize,
    pub(super) valid_chars: usize,
    pub(super) total_lines: usize,
    pub(super) loc: usize,
    pub(super) last_byte: Option<u8>,
}

impl ScanState {
    #[must_use]
    pub const fn new(config: ScanConfig) -> Self {
        Self {
            config,
            phase: Phase::Code,
            p_single: 0,
            p_mstart: 0,
            p_mend: 0,
            valid_chars: 0,
            total_lines: 0,
            loc: 0,
            last_byte: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Valid characters seen so far on the current line.
    #[must_use]
    pub const fn valid_chars(&self) -> usize {
        self.valid_chars
    }

    /// Whether at least one byte has been fed.
    #[must_use]
    pub const fn has_input(&self) -> bool {
        self.last_byte.is_some()
    }

    /// Counts of the lines terminated so far; a pending partial line is not included.
    #[must_use]
    pub const fn terminated(&self) -> LineTally {
        LineTally::new(self.total_lines, self.loc)
    }

    /// Credit the trailing partial line if the stream did not end with `\n`.
    ///
    /// An empty stream yields `(0, 0)` regardless of the flag.
    #[must_use]
    pub fn finalize(mut self, last_byte_was_newline: bool) -> LineTally {
        if self.has_input() && !last_byte_was_newline {
            self.end_line();
        }
        self.terminated()
    }

    /// [`finalize`](Self::finalize) using the last byte recorded by `feed`.
    #[must_use]
    pub fn finish(self) -> LineTally {
        let ends_with_newline = self.last_byte == Some(b'\n');
        self.finalize(ends_with_newline)
    }

    pub(super) fn end_line(&mut self) {
        self.total_lines += 1;
        if self.config.is_loc(self.valid_chars) {
            self.loc += 1;
        }
        self.valid_chars = 0;
        if self.phase == Phase::SingleLine {
            self.phase = Phase::Code;
        }
    }

    #[inline]
    pub(super) const fn reset_pointers(&mut self) {
        self.p_single = 0;
        self.p_mstart = 0;
        self.p_mend = 0;
    }

    pub(super) const fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.reset_pointers();
    }
}
