pub mod byte_based;
pub mod chunked;
#[cfg(feature = "mmap")]
pub mod mapped;

pub use byte_based::measure_entire_file;
pub use chunked::{count_reader, measure_chunked};
#[cfg(feature = "mmap")]
pub use mapped::measure_mapped;
