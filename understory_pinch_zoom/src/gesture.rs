// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture input and the bookkeeping for one in-progress manipulation.

use kurbo::{Size, Vec2};

use crate::transform::ZoomTransform;

/// Input delivered to [`crate::TransformController::handle`].
///
/// Platform recognizers (pinch, pan, double tap) and layout callbacks are
/// merged into one ordered stream of these events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The content's natural size was measured.
    Measured(Size),
    /// Cumulative magnification since the pinch began.
    PinchChanged(f64),
    /// The pinch gesture ended.
    PinchEnded,
    /// Cumulative translation in view pixels since the drag began.
    DragChanged(Vec2),
    /// The drag gesture ended.
    DragEnded,
    /// A double tap was recognized.
    DoubleTap,
}

/// Cumulative recognizer values for the manipulation currently in progress.
///
/// Pinch and drag may be active at the same time. Both are applied against
/// the same committed baseline, so neither reads the other's intermediate
/// result. When one recognizer ends while the other keeps going, the
/// survivor's value at that moment becomes its new zero point (`*_base`),
/// because the committed baseline already includes it.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Manipulation {
    pinch: Option<f64>,
    pinch_base: Option<f64>,
    drag: Option<Vec2>,
    drag_base: Vec2,
}

impl Manipulation {
    /// Returns `true` while either recognizer is active.
    pub(crate) fn is_active(&self) -> bool {
        self.pinch.is_some() || self.drag.is_some()
    }

    pub(crate) fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub(crate) fn update_pinch(&mut self, factor: f64) {
        self.pinch = Some(factor);
    }

    pub(crate) fn update_drag(&mut self, translation: Vec2) {
        self.drag = Some(translation);
    }

    /// Ends the pinch; a drag still in progress restarts from its current value.
    pub(crate) fn end_pinch(&mut self) {
        self.pinch = None;
        self.pinch_base = None;
        if let Some(drag) = self.drag {
            self.drag_base = drag;
        }
    }

    /// Ends the drag; a pinch still in progress restarts from its current value.
    pub(crate) fn end_drag(&mut self) {
        self.drag = None;
        self.drag_base = Vec2::ZERO;
        if let Some(pinch) = self.pinch {
            self.pinch_base = Some(pinch);
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Effective magnification relative to the committed baseline.
    fn pinch_factor(&self) -> f64 {
        match (self.pinch, self.pinch_base) {
            (Some(factor), Some(base)) if base > 0.0 => factor / base,
            (Some(factor), _) => factor,
            (None, _) => 1.0,
        }
    }

    /// Effective view-space translation relative to the committed baseline.
    fn drag_translation(&self) -> Vec2 {
        self.drag.map_or(Vec2::ZERO, |drag| drag - self.drag_base)
    }

    /// Applies both recognizers to `committed`.
    ///
    /// The drag is converted to content space using the scale the pinch
    /// produces, so panning speed tracks the finger at any zoom level.
    pub(crate) fn apply(&self, committed: ZoomTransform) -> ZoomTransform {
        let factor = self.pinch_factor();
        let scaled = committed.scaled_by(factor, factor);
        let delta = scaled.view_delta_to_content(self.drag_translation());
        scaled.translated_by(delta.x, delta.y)
    }
}
