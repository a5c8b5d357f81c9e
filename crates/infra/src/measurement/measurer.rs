//! 入力ソースごとの計測ディスパッチ

use std::path::{Path, PathBuf};

use log::debug;
#[cfg(not(feature = "mmap"))]
use log::warn;

use crate::{
    measurement::strategies::{measure_chunked, measure_entire_file},
    options::{ReadMode, ReadOptions},
};
use count_loc_core::{LineTally, ScanConfig, count_bytes};
use count_loc_shared_kernel::Result;

/// Where the bytes to scan come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// Bytes already in memory.
    Bytes(&'a [u8]),
    /// A regular file, read according to [`ReadOptions`].
    Path(&'a Path),
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Path> for Source<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for Source<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Self::Path(path)
    }
}

/// Count total lines and LOC for `source`.
///
/// # Errors
///
/// Returns `InvalidConfig` for unusable options and the classified I/O error
/// when a path cannot be opened, read or mapped.
pub fn measure(source: Source<'_>, config: &ScanConfig, options: &ReadOptions) -> Result<LineTally> {
    match source {
        Source::Bytes(bytes) => Ok(count_bytes(bytes, config)),
        Source::Path(path) => measure_path(path, config, options),
    }
}

/// Count a file using the read mode selected in `options`.
///
/// # Errors
///
/// See [`measure`].
pub fn measure_path(path: &Path, config: &ScanConfig, options: &ReadOptions) -> Result<LineTally> {
    options.validate()?;

    let tally = match options.mode {
        ReadMode::Full => measure_entire_file(path, config)?,
        ReadMode::Chunked => measure_chunked(path, config, options.chunk_size)?,
        ReadMode::Mapped => measure_mapped_or_chunked(path, config, options)?,
    };

    debug!(
        "{} ({:?}): {} lines, {} loc",
        path.display(),
        options.mode,
        tally.total_lines,
        tally.loc
    );
    Ok(tally)
}

#[cfg(feature = "mmap")]
fn measure_mapped_or_chunked(
    path: &Path,
    config: &ScanConfig,
    options: &ReadOptions,
) -> Result<LineTally> {
    crate::measurement::strategies::measure_mapped(path, config, options.chunk_size)
}

#[cfg(not(feature = "mmap"))]
fn measure_mapped_or_chunked(
    path: &Path,
    config: &ScanConfig,
    options: &ReadOptions,
) -> Result<LineTally> {
    warn!("memory mapping disabled at build time, reading {} in chunks", path.display());
    measure_chunked(path, config, options.chunk_size)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use count_loc_core::CommentStyle;
    use count_loc_shared_kernel::CountLocError;

    struct TempFile {
        // keep the NamedTempFile so it's removed on Drop
        file: NamedTempFile,
    }

    impl TempFile {
        fn new(content: &[u8]) -> Self {
            let mut file = NamedTempFile::new().expect("create temp file");
            file.write_all(content).expect("write temp file");
            file.flush().expect("flush temp file");
            Self { file }
        }

        fn path(&self) -> &Path {
            self.file.path()
        }
    }

    fn c_config() -> ScanConfig {
        ScanConfig::new(CommentStyle::CStyle.markers())
    }

    const MODES: [ReadMode; 3] = [ReadMode::Full, ReadMode::Chunked, ReadMode::Mapped];

    #[test]
    fn all_modes_agree() {
        let file = TempFile::new(b"/* header */\nint x;\n\n// note\nint y; /* tail */");
        for mode in MODES {
            for chunk_size in [1, 3, 4096] {
                let options = ReadOptions::new(mode).with_chunk_size(chunk_size);
                let tally = measure_path(file.path(), &c_config(), &options).unwrap();
                assert_eq!(tally, LineTally::new(5, 2), "{mode:?} / {chunk_size}");
            }
        }
    }

    #[test]
    fn empty_file_is_zero_in_every_mode() {
        let file = TempFile::new(b"");
        for mode in MODES {
            let tally = measure_path(file.path(), &c_config(), &ReadOptions::new(mode)).unwrap();
            assert_eq!(tally, LineTally::default(), "{mode:?}");
        }
    }

    #[test]
    fn bytes_source_skips_io() {
        let tally =
            measure(Source::from(&b"a\nb"[..]), &c_config(), &ReadOptions::default()).unwrap();
        assert_eq!(tally, LineTally::new(2, 2));
    }

    #[test]
    fn invalid_options_fail_before_opening() {
        let options = ReadOptions::default().with_chunk_size(0);
        let err = measure_path(Path::new("does/not/exist"), &c_config(), &options).unwrap_err();
        assert!(matches!(err, CountLocError::InvalidConfig { field: "chunk_size", .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.c");
        for mode in MODES {
            let err = measure_path(&missing, &c_config(), &ReadOptions::new(mode)).unwrap_err();
            assert!(matches!(err, CountLocError::NotFound { .. }), "{mode:?}: {err}");
            assert_eq!(err.path(), Some(missing.as_path()));
        }
    }
}
