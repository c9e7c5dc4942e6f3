// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds correction for zoomed content.

use kurbo::{Size, Vec2};

use crate::transform::ZoomTransform;

/// Corrects `transform` so the scaled content covers the viewport without overshoot.
///
/// Content is scaled about its top‑left origin, so along each axis the valid
/// translation range is `[-size * (scale - 1), 0]`: anything positive would
/// expose empty space before the leading edge and anything smaller would
/// expose it past the trailing edge.
///
/// - If either axis scale is below `min_zoom_scale`, the result is
///   [`ZoomTransform::IDENTITY`] regardless of translation.
/// - Otherwise the scale is kept and each translation component is clipped
///   into its range. Components already in range are returned untouched.
///
/// A zero `content_size` (not yet measured) collapses both ranges to `0`,
/// which locks the content in place.
///
/// ```rust
/// use kurbo::{Size, Vec2};
/// use understory_pinch_zoom::{ZoomTransform, clamp_transform};
///
/// let dragged = ZoomTransform::uniform(2.0, Vec2::new(-350.0, 25.0));
/// let clamped = clamp_transform(dragged, Size::new(300.0, 300.0), 1.0);
/// assert_eq!(clamped.translation(), Vec2::new(-300.0, 0.0));
/// ```
#[must_use]
pub fn clamp_transform(
    transform: ZoomTransform,
    content_size: Size,
    min_zoom_scale: f64,
) -> ZoomTransform {
    if transform.scale_x() < min_zoom_scale || transform.scale_y() < min_zoom_scale {
        return ZoomTransform::IDENTITY;
    }

    let max_x = content_size.width * (transform.scale_x() - 1.0);
    let max_y = content_size.height * (transform.scale_y() - 1.0);
    let t = transform.translation();
    transform.with_translation(Vec2::new(clamp_axis(t.x, max_x), clamp_axis(t.y, max_y)))
}

/// Clips `value` into `[-max, 0]`; a non-positive `max` pins it to `0`.
fn clamp_axis(value: f64, max: f64) -> f64 {
    // Not `f64::clamp`: it panics when the range is inverted (`max < 0`).
    value.max(-max).min(0.0)
}
