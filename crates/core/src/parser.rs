use crate::config::ScanConfig;
use crate::scanner::ScanState;
use crate::stats::LineTally;

/// Count total lines and LOC in a fully buffered byte slice.
///
/// This is the core entry point for the library. Empty input returns
/// `(0, 0)` without touching the scanner.
///
/// ```
/// use count_loc_core::{CommentStyle, LineTally, ScanConfig, count_bytes};
///
/// let config = ScanConfig::new(CommentStyle::Hash.markers());
/// assert_eq!(count_bytes(b"# hello\nprint(1)\n", &config), LineTally::new(2, 1));
/// ```
#[must_use]
pub fn count_bytes(input: &[u8], config: &ScanConfig) -> LineTally {
    if input.is_empty() {
        return LineTally::default();
    }
    let mut state = ScanState::new(*config);
    state.feed(input);
    state.finish()
}

/// Count a stream delivered as successive chunks.
///
/// Equivalent to [`count_bytes`] on the concatenation of `chunks`.
#[must_use]
pub fn count_chunks<'a, I>(chunks: I, config: &ScanConfig) -> LineTally
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut state = ScanState::new(*config);
    for chunk in chunks {
        state.feed(chunk);
    }
    state.finish()
}
