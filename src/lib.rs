// Library exports for geocache-icon-cutter

pub mod config;
pub mod console;
pub mod error;
pub mod event;
pub mod extract_worker;
pub mod model;
pub mod pipeline;

pub use config::Config;
pub use error::SetupError;
pub use pipeline::{RunSummary, run};
