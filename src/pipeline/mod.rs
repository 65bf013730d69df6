pub mod cropper;
pub mod extractor;
pub mod fs_ops;
pub mod png_writer;
pub mod sprite;

pub use extractor::{IconOutcome, RunSummary, run};
