// crates/core/src/lib.rs
//! Single-pass byte scanner counting total lines and lines of code.
//!
//! The crate is `no_std` and never allocates while scanning. Reading files,
//! mapping memory and error reporting live in `count_loc_infra`.
#![cfg_attr(not(test), no_std)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod language;
pub mod marker;
pub mod parser;
pub mod scanner;
pub mod stats;

pub use config::{CommentMarkers, ScanConfig};
pub use error::{ConfigError, ConfigResult, MarkerError, MarkerField};
pub use language::CommentStyle;
pub use marker::{MAX_MARKER_LEN, Marker};
pub use parser::{count_bytes, count_chunks};
pub use scanner::{Phase, ScanState};
pub use stats::LineTally;
