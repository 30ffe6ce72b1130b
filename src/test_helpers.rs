//! Shared test utilities.
//!
//! Synthetic image builders (no fixture files needed) and a recording
//! [`MockFetcher`] that stands in for the network.
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let fetcher = MockFetcher::new()
//!     .with_body("https://img/a.png", gradient_png_bytes(1000, 500))
//!     .with_status("https://img/b.png", 404);
//!
//! // ... run the pipeline ...
//! assert_eq!(fetcher.calls(), vec!["https://img/a.png"]);
//! ```

use crate::fetch::{FetchError, Fetcher};
use image::{DynamicImage, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::collections::HashMap;
use std::sync::Mutex;

// =========================================================================
// Synthetic images
// =========================================================================

/// PNG bytes of an opaque RGB gradient.
pub fn gradient_png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    png_bytes(&DynamicImage::ImageRgb8(img))
}

/// PNG bytes of an RGBA image whose alpha varies across the width.
pub fn translucent_png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([200, (y % 256) as u8, 40, (x * 255 / width.max(1)) as u8])
    });
    png_bytes(&DynamicImage::ImageRgba8(img))
}

/// Encode any image as PNG.
pub fn png_bytes(img: &DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf)
        .write_image(
            img.as_bytes(),
            img.width(),
            img.height(),
            img.color().into(),
        )
        .unwrap();
    buf
}

/// Deterministic high-entropy image, so lossy quality settings visibly
/// change the encoded size.
pub fn noisy_rgb_image(width: u32, height: u32) -> DynamicImage {
    let mut state: u32 = 0x2545_f491;
    let img = RgbImage::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        };
        Rgb([next(), next(), next()])
    });
    DynamicImage::ImageRgb8(img)
}

/// GIF bytes of a small two-colour checkerboard. GIF always stores palette
/// indices.
pub fn checker_gif_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([220, 30, 30, 255])
        } else {
            Rgba([30, 30, 220, 255])
        }
    });
    let mut buf = Vec::new();
    {
        // The GIF trailer is written when the encoder drops
        let mut encoder = image::codecs::gif::GifEncoder::new(&mut buf);
        encoder
            .encode(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
            .unwrap();
    }
    buf
}

/// The first 33 bytes of a PNG stream declaring an 8-bit indexed image.
///
/// Enough for format sniffing and palette detection, not for decoding.
pub fn indexed_png_header() -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&16u32.to_be_bytes());
    bytes.extend_from_slice(&16u32.to_be_bytes());
    // bit depth, colour type (3 = indexed), compression, filter, interlace
    bytes.extend_from_slice(&[8, 3, 0, 0, 0]);
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

// =========================================================================
// Network mock
// =========================================================================

enum MockResponse {
    Body(Vec<u8>),
    Status(u16),
}

/// Fetcher that serves canned responses and records every URL requested.
/// Unknown URLs answer 404.
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: Vec<u8>) -> Self {
        self.responses
            .insert(url.to_string(), MockResponse::Body(body));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), MockResponse::Status(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
