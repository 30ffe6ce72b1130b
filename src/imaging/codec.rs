//! Decoding downloaded bytes and encoding the final image.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, GIF, WebP) | `image::load_from_memory` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` with quality |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (lossless, quality ignored) |
//! | Encode → WebP | `webp` (libwebp), lossy, method 6 |
//!
//! The `image` crate's own WebP encoder is lossless-only, which is why WebP
//! goes through libwebp.

use super::operations::is_palette_encoded;
use super::params::Quality;
use crate::config::OutputFormat;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, GenericImageView};
use thiserror::Error;

/// Slowest, best-compressing libwebp method.
const WEBP_METHOD: i32 = 6;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("not a supported image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("{0}")]
    Encode(String),
}

/// A decoded image plus the one fact about the source stream the pixels lose.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub image: DynamicImage,
    /// Source stored palette indices (see [`is_palette_encoded`]).
    pub palette: bool,
}

/// Decode downloaded bytes, sniffing the format from content.
pub fn decode(bytes: &[u8]) -> Result<Decoded, ImagingError> {
    let image = image::load_from_memory(bytes).map_err(ImagingError::Decode)?;
    Ok(Decoded {
        image,
        palette: is_palette_encoded(bytes),
    })
}

/// Encode to the target format.
///
/// `quality` applies to WebP and JPEG and is ignored for PNG.
pub fn encode(
    img: &DynamicImage,
    format: OutputFormat,
    quality: Quality,
) -> Result<Vec<u8>, ImagingError> {
    match format {
        OutputFormat::Webp => encode_webp(img, quality),
        OutputFormat::Jpeg => encode_jpeg(img, quality),
        OutputFormat::Png => encode_png(img),
    }
}

fn encode_jpeg(img: &DynamicImage, quality: Quality) -> Result<Vec<u8>, ImagingError> {
    // JPEG has no alpha and the encoder rejects anything but L8/Rgb8
    let rgb;
    let img = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => img,
        other => {
            rgb = DynamicImage::ImageRgb8(other.to_rgb8());
            &rgb
        }
    };
    let mut buf = Vec::new();
    // The encoder's floor is 1
    let q = quality.value().max(1) as u8;
    img.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, q))
        .map_err(|e| ImagingError::Encode(format!("JPEG encode failed: {e}")))?;
    Ok(buf)
}

fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, ImagingError> {
    let widened;
    let img = match img {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            widened = DynamicImage::ImageRgba16(img.to_rgba16());
            &widened
        }
        other => other,
    };
    let mut buf = Vec::new();
    img.write_with_encoder(PngEncoder::new(&mut buf))
        .map_err(|e| ImagingError::Encode(format!("PNG encode failed: {e}")))?;
    Ok(buf)
}

fn encode_webp(img: &DynamicImage, quality: Quality) -> Result<Vec<u8>, ImagingError> {
    let mut config = webp::WebPConfig::new()
        .map_err(|()| ImagingError::Encode("WebP encoder config rejected".into()))?;
    config.lossless = 0;
    config.quality = quality.value() as f32;
    config.method = WEBP_METHOD;

    let (width, height) = img.dimensions();
    let encoded = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        let encoder = webp::Encoder::from_rgba(rgba.as_raw(), width, height);
        encoder.encode_advanced(&config)
    } else {
        let rgb = img.to_rgb8();
        let encoder = webp::Encoder::from_rgb(rgb.as_raw(), width, height);
        encoder.encode_advanced(&config)
    }
    .map_err(|e| ImagingError::Encode(format!("WebP encode failed: {e:?}")))?;

    Ok(encoded.to_vec())
}
