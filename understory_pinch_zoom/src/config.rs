// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Settings fixed when a [`crate::TransformController`] attaches to content.
///
/// ```rust
/// use core::time::Duration;
/// use understory_pinch_zoom::ZoomConfig;
///
/// let config = ZoomConfig::default()
///     .with_double_tap_zoom_scale(2.0)
///     .with_snap_duration(Duration::from_millis(80));
/// assert_eq!(config.min_zoom_scale, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Smallest scale a gesture may settle at; anything below snaps back to identity.
    ///
    /// Must be positive. The default of `1.0` keeps content at least at its
    /// natural size.
    pub min_zoom_scale: f64,
    /// Scale reached by double-tapping content at rest.
    pub double_tap_zoom_scale: f64,
    /// Duration of the snap back applied when a pinch or drag ends.
    pub snap_duration: Duration,
    /// Duration of the double-tap zoom toggle.
    pub double_tap_duration: Duration,
    /// Per-component tolerance when deciding whether content is at identity.
    pub identity_tolerance: f64,
}

impl ZoomConfig {
    /// Sets [`ZoomConfig::min_zoom_scale`].
    #[must_use]
    pub fn with_min_zoom_scale(mut self, scale: f64) -> Self {
        self.min_zoom_scale = scale;
        self
    }

    /// Sets [`ZoomConfig::double_tap_zoom_scale`].
    #[must_use]
    pub fn with_double_tap_zoom_scale(mut self, scale: f64) -> Self {
        self.double_tap_zoom_scale = scale;
        self
    }

    /// Sets [`ZoomConfig::snap_duration`].
    #[must_use]
    pub fn with_snap_duration(mut self, duration: Duration) -> Self {
        self.snap_duration = duration;
        self
    }

    /// Sets [`ZoomConfig::double_tap_duration`].
    #[must_use]
    pub fn with_double_tap_duration(mut self, duration: Duration) -> Self {
        self.double_tap_duration = duration;
        self
    }

    /// Sets [`ZoomConfig::identity_tolerance`].
    #[must_use]
    pub fn with_identity_tolerance(mut self, tolerance: f64) -> Self {
        self.identity_tolerance = tolerance;
        self
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom_scale: 1.0,
            double_tap_zoom_scale: 3.0,
            snap_duration: Duration::from_millis(100),
            double_tap_duration: Duration::from_millis(150),
            identity_tolerance: 1e-6,
        }
    }
}
