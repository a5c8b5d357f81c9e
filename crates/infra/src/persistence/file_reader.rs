use std::{
    fs::File,
    io::Read,
    path::Path,
};

use count_loc_shared_kernel::{CountLocError, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> Result<File> {
        File::open(path).map_err(|e| CountLocError::from_io("open", path, e))
    }

    /// Open a regular file and return it together with its length.
    ///
    /// Directories and other non-regular paths are rejected.
    pub fn open_regular(path: &Path) -> Result<(File, u64)> {
        let file = Self::open(path)?;
        let meta = file.metadata().map_err(|e| CountLocError::from_io("stat", path, e))?;
        if !meta.is_file() {
            return Err(CountLocError::from_io(
                "stat",
                path,
                std::io::Error::other("not a regular file"),
            ));
        }
        Ok((file, meta.len()))
    }

    /// Read the entire file into memory.
    ///
    /// The buffer is reserved up front so an allocation failure surfaces as
    /// `OutOfMemory` instead of aborting the process.
    pub fn read_to_end(path: &Path) -> Result<Vec<u8>> {
        let (mut file, len) = Self::open_regular(path)?;
        let out_of_memory = || CountLocError::OutOfMemory { path: path.to_path_buf(), requested: len };

        let capacity = usize::try_from(len).map_err(|_| out_of_memory())?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity).map_err(|_| out_of_memory())?;
        file.read_to_end(&mut buf).map_err(|e| CountLocError::from_io("read", path, e))?;
        Ok(buf)
    }
}
