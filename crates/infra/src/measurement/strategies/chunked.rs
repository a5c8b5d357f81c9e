use std::{
    io::{self, Read},
    path::Path,
};

use log::{debug, trace};

use crate::persistence::FileReader;
use count_loc_core::{LineTally, ScanConfig, ScanState};
use count_loc_shared_kernel::{CountLocError, Result};

/// Stream a file through the scanner `chunk_size` bytes at a time.
pub fn measure_chunked(path: &Path, config: &ScanConfig, chunk_size: usize) -> Result<LineTally> {
    let (file, len) = FileReader::open_regular(path)?;
    // never allocate more than the file needs; procfs-style files report 0
    let chunk_size = match usize::try_from(len) {
        Ok(len) if len > 0 => chunk_size.min(len),
        _ => chunk_size,
    };
    debug!("streaming {len} bytes from {} in {chunk_size}-byte chunks", path.display());
    count_reader(file, config, chunk_size).map_err(|e| CountLocError::from_io("read", path, e))
}

/// Scan any reader chunk by chunk. Interrupted reads are retried.
///
/// # Errors
///
/// Returns the first non-`Interrupted` I/O error; no partial result is kept.
pub fn count_reader<R: Read>(
    mut reader: R,
    config: &ScanConfig,
    chunk_size: usize,
) -> io::Result<LineTally> {
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut state = ScanState::new(*config);
    let mut chunks = 0usize;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        state.feed(&buf[..n]);
        chunks += 1;
        trace!("chunk {chunks}: {n} bytes, {} lines so far", state.terminated().total_lines);
    }

    Ok(state.finish())
}
