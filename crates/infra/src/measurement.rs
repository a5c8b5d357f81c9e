pub mod measurer;
pub mod strategies;

pub use measurer::{Source, measure, measure_path};
