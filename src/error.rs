use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a run before any icon is cut.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("PNG support is not available in this build")]
    MissingCapability,

    #[error("Sprite sheet not found, looked in: {}", .0.display())]
    SpriteNotFound(PathBuf),

    #[error("Cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open sprite {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl SetupError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SetupError::MissingCapability => 2,
            _ => 1,
        }
    }

    /// Extra lines telling the user how to fix the problem.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SetupError::MissingCapability => Some(
                "Rebuild with the `png` feature of the `image` crate enabled (it is on by default)",
            ),
            SetupError::SpriteNotFound(_) => {
                Some("Check that geocaching-sprite.png exists in the assets directory")
            }
            _ => None,
        }
    }
}
