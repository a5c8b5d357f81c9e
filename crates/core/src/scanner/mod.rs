// crates/core/src/scanner/mod.rs
mod kernel;
mod state;

pub use state::{Phase, ScanState};
