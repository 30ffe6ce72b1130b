//! Filename slugs for downloaded images.
//!
//! Every source label is turned into a lowercase, hyphen-separated slug that
//! is safe to use as a file stem on any filesystem and inside a URL:
//!
//! - `"ALEX"` → `"alex"`
//! - `"ALEX_B"` → `"alex-b"`
//! - `"  V__MARIN!! "` → `"v-marin"`
//! - `"***"` → `"image"` (fallback when nothing alphanumeric survives)

/// Stem used when a label contains no alphanumeric characters.
pub const FALLBACK_SLUG: &str = "image";

/// Turn a label into a filesystem-safe slug.
///
/// The label is lowercased first, then alphanumeric characters are kept and
/// every run of anything else collapses into a single `-`. Leading and
/// trailing hyphens are dropped.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for ch in raw.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    // Only a trailing separator can survive the loop above
    if slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
