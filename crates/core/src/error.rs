// crates/core/src/error.rs
//! 設定値の検証エラー

use core::fmt;

use thiserror::Error;

/// Which configured marker a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerField {
    Singleline,
    MultilineStart,
    MultilineEnd,
}

impl MarkerField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Singleline => "singleline",
            Self::MultilineStart => "multiline_start",
            Self::MultilineEnd => "multiline_end",
        }
    }
}

impl fmt::Display for MarkerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a byte sequence cannot be used as a comment marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("marker is empty")]
    Empty,

    #[error("marker is {len} bytes long, at most {max} are supported")]
    TooLong { len: usize, max: usize },

    /// The scanner consumes this byte before marker matching, so the marker could never fire.
    #[error("byte 0x{byte:02X} at offset {offset} can never be matched")]
    Unmatchable { byte: u8, offset: usize },
}

/// Configuration rejected during construction or deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {field} marker: {source}")]
    InvalidMarker {
        field: MarkerField,
        #[source]
        source: MarkerError,
    },

    /// Block comments need both an opener and a closer.
    #[error("{field} is required when the other block comment marker is set")]
    UnpairedBlockMarker { field: MarkerField },
}

impl ConfigError {
    /// Name of the offending configuration field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidMarker { field, .. } | Self::UnpairedBlockMarker { field } => {
                field.as_str()
            }
        }
    }
}

pub type ConfigResult<T> = core::result::Result<T, ConfigError>;
