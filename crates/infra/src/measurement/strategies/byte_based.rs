use std::path::Path;

use log::debug;

use crate::persistence::FileReader;
use count_loc_core::{LineTally, ScanConfig, count_bytes};
use count_loc_shared_kernel::Result;

/// Measure a file by reading it into memory and scanning it in one pass.
pub fn measure_entire_file(path: &Path, config: &ScanConfig) -> Result<LineTally> {
    let buf = FileReader::read_to_end(path)?;
    debug!("buffered {} bytes from {}", buf.len(), path.display());
    Ok(count_bytes(&buf, config))
}
