//! # web-images
//!
//! Downloads a fixed list of named images and stores resized, re-encoded
//! copies that are ready to serve on the web.
//!
//! # Pipeline
//!
//! A run is a linear batch over the compiled-in source list:
//!
//! ```text
//! enumerate → fetch → decode → resize → re-encode → write
//! ```
//!
//! Outputs are named `<slug>.<format>` inside the output directory. An
//! existing output is the only state a run consults: unless `--force` is
//! given, entries whose file is already there are skipped without any
//! network access, so a second run is a no-op.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`sources`] | The ordered list of `(label, url)` pairs to download |
//! | [`naming`] | Label → filesystem-safe slug |
//! | [`config`] | Defaults, optional `web-images.toml`, CLI overrides, validation |
//! | [`fetch`] | [`Fetcher`](fetch::Fetcher) trait and the blocking HTTP implementation |
//! | [`imaging`] | Decode, palette expansion, shrink-to-fit, alpha flattening, encode |
//! | [`process`] | Per-entry processing and the fail-fast driver |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Sequential and Fail-Fast
//!
//! Images are processed one after another on a single thread, reusing one
//! HTTP client. The first error of any kind ends the run with a non-zero
//! exit status. Files written before the failure are kept, and because
//! existing outputs are skipped, simply running again continues from the
//! failed entry.
//!
//! ## Lossy WebP Through libwebp
//!
//! The `image` crate decodes every input format and encodes JPEG and PNG,
//! but its WebP encoder is lossless-only. Lossy WebP with a quality setting
//! and the slowest, smallest compression method goes through the `webp`
//! crate instead.
//!
//! ## Network Behind a Trait
//!
//! The pipeline only sees [`Fetcher`](fetch::Fetcher). Tests drive the
//! whole pipeline with a canned, call-recording implementation, so
//! skip/force behaviour and failure handling are verified without a
//! network.

pub mod config;
pub mod fetch;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod sources;

#[cfg(test)]
pub(crate) mod test_helpers;
