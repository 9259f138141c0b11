//! Conversion from decoded glyphs into `image` crate types

use image::RgbaImage;

use crate::types::Glyph;

/// Converts a decoded glyph into an [`RgbaImage`].
///
/// Returns `None` for empty glyph slots.
#[must_use]
pub fn glyph_to_image(glyph: &Glyph) -> Option<RgbaImage> {
    if !glyph.has_raster() {
        return None;
    }
    RgbaImage::from_raw(
        u32::from(glyph.width),
        u32::from(glyph.height),
        glyph.rgba.clone(),
    )
}
