// crates/core/src/config.rs
use alloc::string::String;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ConfigError, ConfigResult, MarkerError, MarkerField};
use crate::marker::Marker;

/// Comment markers of one language. Any of them may be absent.
///
/// Block markers are configured as a pair: an opener without a closer (or the
/// reverse) is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "MarkersRepr")]
pub struct CommentMarkers {
    singleline: Option<Marker>,
    multiline_start: Option<Marker>,
    multiline_end: Option<Marker>,
}

impl CommentMarkers {
    /// Build markers from raw byte sequences. An empty sequence means "absent".
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the offending field.
    pub fn new(
        singleline: &[u8],
        multiline_start: &[u8],
        multiline_end: &[u8],
    ) -> ConfigResult<Self> {
        let singleline = optional_marker(MarkerField::Singleline, singleline)?;
        let multiline_start = optional_marker(MarkerField::MultilineStart, multiline_start)?;
        let multiline_end = optional_marker(MarkerField::MultilineEnd, multiline_end)?;

        match (multiline_start, multiline_end) {
            (Some(_), None) => {
                Err(ConfigError::UnpairedBlockMarker { field: MarkerField::MultilineEnd })
            }
            (None, Some(_)) => {
                Err(ConfigError::UnpairedBlockMarker { field: MarkerField::MultilineStart })
            }
            _ => Ok(Self { singleline, multiline_start, multiline_end }),
        }
    }

    /// Markers for a language without comments: every non-blank line is code.
    #[must_use]
    pub const fn none() -> Self {
        Self { singleline: None, multiline_start: None, multiline_end: None }
    }

    /// Preset constructor for literals known to be valid.
    pub(crate) const fn from_literals(
        singleline: Option<&'static str>,
        block: Option<(&'static str, &'static str)>,
    ) -> Self {
        let singleline = match singleline {
            Some(s) => Some(Marker::from_literal(s.as_bytes())),
            None => None,
        };
        let (multiline_start, multiline_end) = match block {
            Some((start, end)) => (
                Some(Marker::from_literal(start.as_bytes())),
                Some(Marker::from_literal(end.as_bytes())),
            ),
            None => (None, None),
        };
        Self { singleline, multiline_start, multiline_end }
    }

    #[inline]
    #[must_use]
    pub const fn singleline(&self) -> Option<&Marker> {
        self.singleline.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn multiline_start(&self) -> Option<&Marker> {
        self.multiline_start.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn multiline_end(&self) -> Option<&Marker> {
        self.multiline_end.as_ref()
    }
}

fn optional_marker(field: MarkerField, bytes: &[u8]) -> ConfigResult<Option<Marker>> {
    match Marker::new(bytes) {
        Ok(marker) => Ok(Some(marker)),
        Err(MarkerError::Empty) => Ok(None),
        Err(source) => Err(ConfigError::InvalidMarker { field, source }),
    }
}

/// Deserialized form: markers as (possibly missing) strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MarkersRepr {
    singleline: Option<String>,
    multiline_start: Option<String>,
    multiline_end: Option<String>,
}

impl TryFrom<MarkersRepr> for CommentMarkers {
    type Error = ConfigError;

    fn try_from(repr: MarkersRepr) -> ConfigResult<Self> {
        Self::new(
            repr_bytes(repr.singleline.as_ref()),
            repr_bytes(repr.multiline_start.as_ref()),
            repr_bytes(repr.multiline_end.as_ref()),
        )
    }
}

fn repr_bytes(text: Option<&String>) -> &[u8] {
    text.map(String::as_bytes).unwrap_or_default()
}

/// Serialized form, borrowed from the markers.
#[derive(Serialize)]
struct MarkersView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    singleline: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multiline_start: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multiline_end: Option<&'a str>,
}

/// Markers are written as strings. A marker that is not valid UTF-8 fails
/// serialization instead of being rewritten lossily.
impl Serialize for CommentMarkers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MarkersView {
            singleline: marker_text(MarkerField::Singleline, self.singleline())?,
            multiline_start: marker_text(MarkerField::MultilineStart, self.multiline_start())?,
            multiline_end: marker_text(MarkerField::MultilineEnd, self.multiline_end())?,
        }
        .serialize(serializer)
    }
}

fn marker_text<E: serde::ser::Error>(
    field: MarkerField,
    marker: Option<&Marker>,
) -> Result<Option<&str>, E> {
    marker
        .map(|m| {
            core::str::from_utf8(m.as_bytes())
                .map_err(|_| E::custom(format_args!("{field} marker is not valid UTF-8")))
        })
        .transpose()
}

/// Scanner configuration, fixed for the lifetime of one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanConfig {
    pub markers: CommentMarkers,
    /// Minimum number of valid characters for a line to count as LOC.
    #[serde(default)]
    pub threshold: usize,
}

impl ScanConfig {
    #[must_use]
    pub const fn new(markers: CommentMarkers) -> Self {
        Self { markers, threshold: 0 }
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Whether a line with `valid_chars` valid characters counts as LOC.
    #[inline]
    #[must_use]
    pub const fn is_loc(&self, valid_chars: usize) -> bool {
        valid_chars > 0 && valid_chars >= self.threshold
    }
}
