//! Image processing, pure Rust except for the libwebp encoder.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::load_from_memory` |
//! | **Palette expansion** | `DynamicImage::to_rgba8` |
//! | **Shrink to fit** | Lanczos3 via `DynamicImage::resize_exact` |
//! | **Alpha flattening** | manual composite onto transparent white |
//! | **Encode** | `image` (JPEG, PNG), `webp` (lossy WebP) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing the output
//! - **Operations**: Pixel transforms, each consuming and returning an image
//! - **Codec**: Decode from bytes, encode to bytes

mod calculations;
pub mod codec;
pub mod operations;
mod params;

pub use calculations::{bounding_box, calculate_fit_dimensions};
pub use codec::{Decoded, ImagingError, decode, encode};
pub use operations::{flatten_alpha, normalize_palette, prepare, shrink_to_fit};
pub use params::{EncodeParams, Quality, SizeLimit};
