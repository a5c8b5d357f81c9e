// src/lib.rs
//! Count total lines and lines of code (LOC) in a source file.
//!
//! The embedder supplies the bytes (or a path) and the comment markers of the
//! file's language; the crate returns `(total_lines, loc)`.
//!
//! ```
//! use count_loc::{CommentStyle, LineTally, ScanConfig, count};
//!
//! let config = ScanConfig::new(CommentStyle::CStyle.markers());
//! let tally = count(&b"x /* mid */ y\n// only a comment\n"[..], &config).unwrap();
//! assert_eq!(tally, LineTally::new(2, 1));
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use count_loc_core::{
    CommentMarkers, CommentStyle, ConfigError, LineTally, MAX_MARKER_LEN, Marker, MarkerError,
    MarkerField, Phase, ScanConfig, ScanState, count_bytes, count_chunks,
};
pub use count_loc_infra::{
    DEFAULT_CHUNK_SIZE, ReadMode, ReadOptions, Source, measurement::strategies::count_reader,
};
pub use count_loc_shared_kernel::{CountLocError, ErrorContext, Result};

/// Count `source` with the default reader (4 MiB chunks).
///
/// # Errors
///
/// Returns the classified I/O error when a path source cannot be read.
/// In-memory sources never fail.
pub fn count<'a>(source: impl Into<Source<'a>>, config: &ScanConfig) -> Result<LineTally> {
    count_with(source, config, &ReadOptions::default())
}

/// Count `source`, reading paths according to `options`.
///
/// # Errors
///
/// Returns `InvalidConfig` for unusable options, otherwise as [`count`].
pub fn count_with<'a>(
    source: impl Into<Source<'a>>,
    config: &ScanConfig,
    options: &ReadOptions,
) -> Result<LineTally> {
    count_loc_infra::measure(source.into(), config, options)
}

/// Build a [`ScanConfig`] from raw markers and a threshold.
///
/// Empty marker slices mean the language lacks that kind of comment.
///
/// # Errors
///
/// Returns `InvalidConfig` naming the rejected marker.
pub fn scan_config(
    singleline: &[u8],
    multiline_start: &[u8],
    multiline_end: &[u8],
    threshold: usize,
) -> Result<ScanConfig> {
    let markers = CommentMarkers::new(singleline, multiline_start, multiline_end)?;
    Ok(ScanConfig::new(markers).with_threshold(threshold))
}
