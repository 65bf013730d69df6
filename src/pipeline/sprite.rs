use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::error::SetupError;

/// Fails when the linked `image` build cannot both read and write PNG.
pub fn check_png_support() -> Result<(), SetupError> {
    if ImageFormat::Png.reading_enabled() && ImageFormat::Png.writing_enabled() {
        Ok(())
    } else {
        Err(SetupError::MissingCapability)
    }
}

pub fn check_sprite_exists(path: &Path) -> Result<(), SetupError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(SetupError::SpriteNotFound(path.to_path_buf()))
    }
}

pub fn load_sprite(path: &Path) -> Result<DynamicImage, SetupError> {
    image::open(path).map_err(|source| SetupError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
