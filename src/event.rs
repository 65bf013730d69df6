use std::path::PathBuf;

use crate::pipeline::extractor::RunSummary;

#[derive(Clone, Debug)]
pub enum ExtractMsg {
    Started,
    SpriteFound(PathBuf),
    OutputDirReady(PathBuf),
    SpriteLoaded { width: u32, height: u32 },
    CuttingStarted(usize),

    // Per icon
    IconWritten {
        name: String,
        x: u32,
        y: u32,
        file_name: String,
    },
    IconFailed { name: String, error: String },

    // Run end
    Completed(RunSummary),
    Failed {
        message: String,
        hint: Option<String>,
        exit_code: i32,
    },
}
