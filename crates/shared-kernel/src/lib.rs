// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{CountLocError, ErrorContext, Result};

pub mod error;
