//! Conversion from decoded frames into `image` crate types

use image::RgbaImage;

use crate::types::{Frame, Sprite};

/// Converts a decoded frame into an [`RgbaImage`].
///
/// Returns `None` for frames without a raster, such as
/// [`FrameType::Empty`](crate::types::FrameType::Empty) entries.
#[must_use]
pub fn frame_to_image(frame: &Frame) -> Option<RgbaImage> {
    if !frame.has_raster() {
        return None;
    }
    RgbaImage::from_raw(
        u32::from(frame.width),
        u32::from(frame.height),
        frame.rgba.clone(),
    )
}

/// Converts every frame of an atlas, skipping those without a raster.
///
/// Each element pairs the frame's index in the atlas with its image.
#[must_use]
pub fn sprite_to_images(sprite: &Sprite) -> Vec<(usize, RgbaImage)> {
    sprite
        .frames
        .iter()
        .enumerate()
        .filter_map(|(i, frame)| frame_to_image(frame).map(|img| (i, img)))
        .collect()
}
