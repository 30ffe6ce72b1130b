//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Resolve the bounding box for a resize.
///
/// A zero maximum leaves that axis unconstrained, which is the same as
/// bounding it by the image's own size. Returns `None` when both maxima are
/// zero, meaning no resize should happen at all.
///
/// # Examples
/// ```
/// # use web_images::imaging::bounding_box;
/// assert_eq!(bounding_box((1000, 500), (800, 0)), Some((800, 500)));
/// assert_eq!(bounding_box((1000, 500), (0, 0)), None);
/// ```
pub fn bounding_box(source: (u32, u32), max: (u32, u32)) -> Option<(u32, u32)> {
    let (src_w, src_h) = source;
    let (max_w, max_h) = max;
    if max_w == 0 && max_h == 0 {
        return None;
    }
    let box_w = if max_w == 0 { src_w } else { max_w };
    let box_h = if max_h == 0 { src_h } else { max_h };
    Some((box_w, box_h))
}

/// Calculate the size that fits `source` inside `bound`, preserving aspect ratio.
///
/// Returns `None` when the source already fits (images are never upscaled).
/// The constrained axis takes the bound exactly; the other axis is rounded
/// to whichever neighbouring integer keeps the aspect ratio closest to the
/// source, and is never smaller than one pixel.
///
/// # Examples
/// ```
/// # use web_images::imaging::calculate_fit_dimensions;
/// // 1000x500 into an 800x800 box → 800x400
/// assert_eq!(calculate_fit_dimensions((1000, 500), (800, 800)), Some((800, 400)));
///
/// // Already fits → untouched
/// assert_eq!(calculate_fit_dimensions((640, 480), (800, 800)), None);
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), bound: (u32, u32)) -> Option<(u32, u32)> {
    let (src_w, src_h) = source;
    let (box_w, box_h) = bound;

    if src_w == 0 || src_h == 0 || box_w == 0 || box_h == 0 {
        return None;
    }
    if src_w <= box_w && src_h <= box_h {
        return None;
    }

    let aspect = src_w as f64 / src_h as f64;
    let (w, h) = if box_w as f64 / box_h as f64 >= aspect {
        // Box is relatively wider: height is the binding constraint
        let w = closest_to_aspect(box_h as f64 * aspect, |n| (aspect - n / box_h as f64).abs());
        (w.min(box_w), box_h)
    } else {
        // Box is relatively taller: width is the binding constraint
        let h = closest_to_aspect(box_w as f64 / aspect, |n| (aspect - box_w as f64 / n).abs());
        (box_w, h.min(box_h))
    };

    Some((w, h))
}

/// Pick floor or ceil of `value`, whichever scores lower, never below 1.
fn closest_to_aspect(value: f64, error: impl Fn(f64) -> f64) -> u32 {
    let floor = value.floor().max(1.0);
    let ceil = value.ceil().max(1.0);
    let best = if error(floor) <= error(ceil) { floor } else { ceil };
    best as u32
}
