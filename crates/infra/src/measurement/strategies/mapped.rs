use std::path::Path;

use log::debug;
use memmap2::Mmap;

use super::chunked::count_reader;
use crate::persistence::FileReader;
use count_loc_core::{LineTally, ScanConfig, count_bytes};
use count_loc_shared_kernel::{CountLocError, Result};

/// Measure a file through a read-only memory mapping.
///
/// Files reporting a length of zero are never mapped: they are streamed in
/// `fallback_chunk_size` chunks instead, since procfs-style files have
/// content behind a zero size. The mapping and the file handle are released
/// when this function returns, on every path.
pub fn measure_mapped(
    path: &Path,
    config: &ScanConfig,
    fallback_chunk_size: usize,
) -> Result<LineTally> {
    let (file, len) = FileReader::open_regular(path)?;
    if len == 0 {
        debug!("{} reports 0 bytes, streaming instead of mapping", path.display());
        return count_reader(file, config, fallback_chunk_size)
            .map_err(|e| CountLocError::from_io("read", path, e));
    }

    // SAFETY: the mapping is read-only and dropped before returning. A file
    // truncated by another process while mapped is outside what we can guard.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| CountLocError::from_io("mmap", path, e))?;

    #[cfg(unix)]
    if let Err(e) = mmap.advise(memmap2::Advice::Sequential) {
        debug!("madvise(SEQUENTIAL) failed for {}: {e}", path.display());
    }

    debug!("mapped {len} bytes from {}", path.display());
    Ok(count_bytes(&mmap, config))
}
