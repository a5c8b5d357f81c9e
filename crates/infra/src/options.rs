// crates/infra/src/options.rs
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use count_loc_shared_kernel::{CountLocError, Result};

/// Chunk size used by the streaming reader (4 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024 * 1024;

/// How a file's bytes reach the scanner. All modes produce identical counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadMode {
    /// Read the whole file into one buffer.
    Full,
    /// Stream the file in fixed-size chunks.
    #[default]
    Chunked,
    /// Scan a read-only memory mapping of the file.
    Mapped,
}

impl FromStr for ReadMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" | "comp" | "complete" => Ok(Self::Full),
            "chunked" | "buf" | "buffered" => Ok(Self::Chunked),
            "mapped" | "mmap" => Ok(Self::Mapped),
            other => Err(format!("Unknown read mode: {other}")),
        }
    }
}

/// Reader configuration for path sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    pub mode: ReadMode,
    /// Bytes per read in [`ReadMode::Chunked`]. Ignored by the other modes.
    pub chunk_size: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { mode: ReadMode::default(), chunk_size: DEFAULT_CHUNK_SIZE }
    }
}

impl ReadOptions {
    #[must_use]
    pub fn new(mode: ReadMode) -> Self {
        Self { mode, ..Self::default() }
    }

    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` when `chunk_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(CountLocError::invalid_config(
                "chunk_size",
                "chunk size must be greater than zero",
            ));
        }
        Ok(())
    }
}
