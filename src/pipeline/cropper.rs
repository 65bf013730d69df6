use anyhow::{Result, anyhow, bail};
use image::{DynamicImage, GenericImageView};

use crate::model::IconDescriptor;

/// Copies the descriptor's rectangle out of `sprite` into a new image of
/// exactly `width`x`height` pixels. Rectangles that leave the sprite are
/// rejected rather than clamped.
pub fn crop_icon(sprite: &DynamicImage, icon: &IconDescriptor) -> Result<DynamicImage> {
    if icon.width == 0 || icon.height == 0 {
        bail!("empty crop {}x{}", icon.width, icon.height);
    }

    let (left, top, right, bottom) = icon
        .rect()
        .ok_or_else(|| anyhow!("crop box overflows at ({}, {})", icon.x, icon.y))?;

    let (sprite_w, sprite_h) = sprite.dimensions();
    if right > sprite_w || bottom > sprite_h {
        bail!(
            "crop box ({}, {}, {}, {}) is outside the {}x{} sprite",
            left,
            top,
            right,
            bottom,
            sprite_w,
            sprite_h
        );
    }

    log::debug!(
        "cropping {} at ({}, {}, {}, {})",
        icon.name,
        left,
        top,
        right,
        bottom
    );
    Ok(sprite.crop_imm(left, top, icon.width, icon.height))
}
