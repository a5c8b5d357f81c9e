// crates/infra/src/lib.rs
//! Infrastructure adapters feeding files into the `count_loc_core` scanner.
#![allow(clippy::multiple_crate_versions)]

pub mod measurement;
pub mod options;
pub mod persistence;

pub use measurement::{Source, measure, measure_path};
pub use options::{DEFAULT_CHUNK_SIZE, ReadMode, ReadOptions};
