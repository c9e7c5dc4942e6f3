// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Scale-then-translate transform applied to zoomable content.
///
/// A content point `p` maps to `scale ⊙ p + translation` in view space, where
/// `scale` is applied per axis. This is the subset of [`Affine`] the zoom
/// controller works with: no rotation or shear, and strictly positive scale.
///
/// Use [`ZoomTransform::to_affine`] to hand the transform to a renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    scale_x: f64,
    scale_y: f64,
    translation: Vec2,
}

impl ZoomTransform {
    /// Scale of `1.0` on both axes and no translation.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from per-axis scale and a view-space translation.
    #[must_use]
    pub const fn new(scale_x: f64, scale_y: f64, translation: Vec2) -> Self {
        Self {
            scale_x,
            scale_y,
            translation,
        }
    }

    /// Creates a transform with the same scale on both axes.
    #[must_use]
    pub const fn uniform(scale: f64, translation: Vec2) -> Self {
        Self::new(scale, scale, translation)
    }

    /// Returns a transform that scales by `scale` while keeping `anchor` fixed.
    ///
    /// This is `translate(+anchor) * scale(scale) * translate(-anchor)`, so a
    /// point at `anchor` maps onto itself and everything else moves away from
    /// (or towards) it.
    #[must_use]
    pub fn anchored_scale(anchor: Point, scale: f64) -> Self {
        let anchor = anchor.to_vec2();
        Self::uniform(scale, anchor - anchor * scale)
    }

    /// Extracts a zoom transform from a general affine matrix.
    ///
    /// The per-axis scale is the length of the first and second matrix
    /// columns, so it is recovered even when the matrix carries rotation or
    /// shear. Those components are discarded.
    #[must_use]
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self {
            scale_x: Vec2::new(a, b).hypot(),
            scale_y: Vec2::new(c, d).hypot(),
            translation: Vec2::new(e, f),
        }
    }

    /// Converts into a Kurbo [`Affine`] for rendering.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::new([
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.translation.x,
            self.translation.y,
        ])
    }

    /// Horizontal scale factor.
    #[must_use]
    pub fn scale_x(self) -> f64 {
        self.scale_x
    }

    /// Vertical scale factor.
    #[must_use]
    pub fn scale_y(self) -> f64 {
        self.scale_y
    }

    /// Scale factors as a vector `(scale_x, scale_y)`.
    #[must_use]
    pub fn scale(self) -> Vec2 {
        Vec2::new(self.scale_x, self.scale_y)
    }

    /// View-space translation applied after scaling.
    #[must_use]
    pub fn translation(self) -> Vec2 {
        self.translation
    }

    /// Returns a copy with the translation replaced.
    #[must_use]
    pub fn with_translation(self, translation: Vec2) -> Self {
        Self {
            translation,
            ..self
        }
    }

    /// Multiplies the scale, leaving the translation untouched.
    ///
    /// The scale pivots about the transform's existing origin, so the content
    /// grows right and down from wherever its origin currently sits.
    #[must_use]
    pub fn scaled_by(self, sx: f64, sy: f64) -> Self {
        Self {
            scale_x: self.scale_x * sx,
            scale_y: self.scale_y * sy,
            translation: self.translation,
        }
    }

    /// Offsets the translation, leaving the scale untouched.
    #[must_use]
    pub fn translated_by(self, dx: f64, dy: f64) -> Self {
        Self {
            translation: self.translation + Vec2::new(dx, dy),
            ..self
        }
    }

    /// Composes two transforms: `self` is applied first, then `next`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            scale_x: self.scale_x * next.scale_x,
            scale_y: self.scale_y * next.scale_y,
            translation: Vec2::new(
                self.translation.x * next.scale_x,
                self.translation.y * next.scale_y,
            ) + next.translation,
        }
    }

    /// Follows this transform with a uniform scale about `anchor`.
    #[must_use]
    pub fn scaled_about(self, anchor: Point, scale: f64) -> Self {
        self.then(Self::anchored_scale(anchor, scale))
    }

    /// Maps a content-space point into view space.
    #[must_use]
    pub fn map_point(self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale_x + self.translation.x,
            pt.y * self.scale_y + self.translation.y,
        )
    }

    /// Maps a view-space point back into content space.
    ///
    /// Returns `None` when either scale is zero or not finite.
    #[must_use]
    pub fn inverse_map_point(self, pt: Point) -> Option<Point> {
        if !self.is_invertible() {
            return None;
        }
        Some(Point::new(
            (pt.x - self.translation.x) / self.scale_x,
            (pt.y - self.translation.y) / self.scale_y,
        ))
    }

    /// Converts a view-space delta into content space by dividing out the scale.
    ///
    /// Axes with a degenerate scale contribute no movement.
    #[must_use]
    pub fn view_delta_to_content(self, delta: Vec2) -> Vec2 {
        let div = |v: f64, s: f64| if s.is_finite() && s != 0.0 { v / s } else { 0.0 };
        Vec2::new(div(delta.x, self.scale_x), div(delta.y, self.scale_y))
    }

    /// Interpolates each component linearly; `t = 0` yields `self`, `t = 1` yields `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            scale_x: self.scale_x + (other.scale_x - self.scale_x) * t,
            scale_y: self.scale_y + (other.scale_y - self.scale_y) * t,
            translation: self.translation.lerp(other.translation, t),
        }
    }

    /// Returns `true` if every component differs by at most `tolerance`.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.scale_x - other.scale_x).abs() <= tolerance
            && (self.scale_y - other.scale_y).abs() <= tolerance
            && (self.translation.x - other.translation.x).abs() <= tolerance
            && (self.translation.y - other.translation.y).abs() <= tolerance
    }

    /// Returns `true` if this is the identity transform within `tolerance`.
    #[must_use]
    pub fn is_identity(self, tolerance: f64) -> bool {
        self.approx_eq(Self::IDENTITY, tolerance)
    }

    fn is_invertible(self) -> bool {
        self.scale_x.is_finite()
            && self.scale_y.is_finite()
            && self.scale_x != 0.0
            && self.scale_y != 0.0
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<ZoomTransform> for Affine {
    fn from(transform: ZoomTransform) -> Self {
        transform.to_affine()
    }
}
