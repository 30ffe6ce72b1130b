//! Pixel transforms applied between decode and encode.
//!
//! Each step takes the image by value and returns the next one, so the
//! pipeline reads as a chain of local rebindings:
//!
//! ```text
//! decoded → normalize_palette → shrink_to_fit → flatten_alpha → encode
//! ```

use super::calculations::{bounding_box, calculate_fit_dimensions};
use super::params::{EncodeParams, SizeLimit};
use crate::config::OutputFormat;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
/// Offset of the colour-type byte inside the IHDR chunk of a PNG stream.
const PNG_COLOR_TYPE_OFFSET: usize = 25;
const PNG_COLOR_TYPE_INDEXED: u8 = 3;

/// Whether the encoded bytes store pixels as palette indices.
///
/// Decoders expand palettes on the fly, so this has to be read from the
/// source stream: PNG colour type 3, or any GIF.
pub fn is_palette_encoded(bytes: &[u8]) -> bool {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => {
            bytes.starts_with(PNG_SIGNATURE)
                && bytes.get(12..16) == Some(b"IHDR".as_slice())
                && bytes.get(PNG_COLOR_TYPE_OFFSET) == Some(&PNG_COLOR_TYPE_INDEXED)
        }
        Ok(ImageFormat::Gif) => true,
        _ => false,
    }
}

/// Expand palette images to full RGBA so later resampling works on real colours.
pub fn normalize_palette(img: DynamicImage, palette: bool) -> DynamicImage {
    if palette {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        img
    }
}

/// Downscale to fit the size limit, preserving aspect ratio.
///
/// Images that already fit are returned untouched; nothing is ever upscaled.
pub fn shrink_to_fit(img: DynamicImage, limit: SizeLimit) -> DynamicImage {
    let source = img.dimensions();
    let Some(bound) = bounding_box(source, (limit.max_width, limit.max_height)) else {
        return img;
    };
    match calculate_fit_dimensions(source, bound) {
        Some((width, height)) => img.resize_exact(width, height, FilterType::Lanczos3),
        None => img,
    }
}

/// Prepare channels for the target format.
///
/// For lossy targets an alpha channel is composited onto a transparent white
/// background, using the image's own alpha as the mask. JPEG then drops to
/// three channels; WebP keeps RGB or RGBA. PNG output is left alone.
pub fn flatten_alpha(img: DynamicImage, format: OutputFormat) -> DynamicImage {
    if !format.is_lossy() {
        return img;
    }
    let img = if img.color().has_alpha() {
        DynamicImage::ImageRgba8(composite_on_white(img.to_rgba8()))
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    };
    match format {
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => img,
    }
}

/// Run every transform for one downloaded image.
pub fn prepare(img: DynamicImage, palette: bool, params: &EncodeParams) -> DynamicImage {
    let img = normalize_palette(img, palette);
    let img = shrink_to_fit(img, params.limit);
    flatten_alpha(img, params.format)
}

/// Paste `img` onto a (255, 255, 255, 0) canvas with its alpha as the mask.
///
/// Every channel, alpha included, is blended as `src * a + bg * (1 - a)`.
fn composite_on_white(mut img: RgbaImage) -> RgbaImage {
    for pixel in img.pixels_mut() {
        let a = pixel[3] as u32;
        let inv = 255 - a;
        for c in 0..3 {
            pixel[c] = blend(pixel[c] as u32, 255, a, inv);
        }
        pixel[3] = blend(a, 0, a, inv);
    }
    img
}

#[inline]
fn blend(src: u32, bg: u32, a: u32, inv: u32) -> u8 {
    ((src * a + bg * inv + 127) / 255) as u8
}
