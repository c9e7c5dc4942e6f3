// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Size, Vec2};

use crate::animation::{Curve, Motion, TransformSink, TransformUpdate, Transition};
use crate::clamp::clamp_transform;
use crate::config::ZoomConfig;
use crate::gesture::{GestureEvent, Manipulation};
use crate::transform::ZoomTransform;

/// Pinch, pan, and double-tap zoom state for one piece of content.
///
/// The controller keeps two transforms:
/// - the **committed** transform, the resting state that gestures compose
///   against;
/// - the **live** transform, what the host should currently show. It equals
///   the committed transform at rest and departs from it while a gesture or
///   animation is in progress.
///
/// Gesture handlers never clamp while the user's fingers are down, so the
/// content may overshoot its bounds for responsive feedback. Bounds are
/// enforced once, when a pinch or drag ends, by snapping back through
/// [`clamp_transform`].
///
/// Every handler returns the [`TransformUpdate`] the host should apply. The
/// controller does not animate anything itself; see [`TransformSink`] and
/// [`TransformController::dispatch`] for the side-effecting half.
#[derive(Clone, Debug)]
pub struct TransformController {
    config: ZoomConfig,
    committed: ZoomTransform,
    live: ZoomTransform,
    content_size: Size,
    manipulation: Manipulation,
    in_flight: Option<InFlight>,
    revision: u64,
}

#[derive(Clone, Copy, Debug)]
struct InFlight {
    transition: Transition,
    /// Whether `transition.to` becomes committed only when the host reports completion.
    commit_on_finish: bool,
}

impl TransformController {
    /// Creates a controller at identity with unmeasured (zero) content size.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        debug_assert!(
            config.min_zoom_scale > 0.0,
            "min_zoom_scale must be positive, got {}",
            config.min_zoom_scale
        );
        Self {
            config,
            committed: ZoomTransform::IDENTITY,
            live: ZoomTransform::IDENTITY,
            content_size: Size::ZERO,
            manipulation: Manipulation::default(),
            in_flight: None,
            revision: 0,
        }
    }

    /// Returns the configuration fixed at construction.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the transform the host should currently display.
    #[must_use]
    pub fn current_transform(&self) -> ZoomTransform {
        self.live
    }

    /// Returns the resting transform gestures compose against.
    #[must_use]
    pub fn committed_transform(&self) -> ZoomTransform {
        self.committed
    }

    /// Returns the last measured content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Monotonic counter bumped whenever [`Self::current_transform`] changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` while a pinch or drag is in progress.
    #[must_use]
    pub fn is_manipulating(&self) -> bool {
        self.manipulation.is_active()
    }

    /// Returns `true` while an animated transition awaits completion.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns the transition the host is expected to be running, if any.
    #[must_use]
    pub fn in_flight_transition(&self) -> Option<&Transition> {
        self.in_flight.as_ref().map(|in_flight| &in_flight.transition)
    }

    /// Records the content's natural size.
    ///
    /// Negative or non-finite extents are treated as zero. Repeating the
    /// current size is a no-op. The transforms are not touched; the new size
    /// takes effect at the next clamp or double tap.
    pub fn measure_content(&mut self, size: Size) {
        let size = Size::new(non_negative(size.width), non_negative(size.height));
        if self.content_size == size {
            return;
        }
        self.content_size = size;
        #[cfg(feature = "tracing")]
        tracing::debug!(width = size.width, height = size.height, "content measured");
    }

    /// Handles a pinch update carrying the cumulative `factor` since the pinch began.
    ///
    /// Returns `None` for non-positive or non-finite factors, which are ignored.
    pub fn on_pinch_changed(&mut self, factor: f64) -> Option<TransformUpdate> {
        if !(factor.is_finite() && factor > 0.0) {
            return None;
        }
        self.interrupt_animation();
        self.manipulation.update_pinch(factor);
        Some(self.track_manipulation(Motion::Immediate))
    }

    /// Handles a drag update carrying the cumulative view-space `translation`.
    ///
    /// The translation is divided by the live scale, so content follows the
    /// finger at any zoom level. Returns `None` for non-finite input.
    pub fn on_drag_changed(&mut self, translation: Vec2) -> Option<TransformUpdate> {
        if !translation.is_finite() {
            return None;
        }
        self.interrupt_animation();
        self.manipulation.update_drag(translation);
        Some(self.track_manipulation(Motion::Interactive))
    }

    /// Ends the pinch, clamping and committing the live transform.
    pub fn on_pinch_ended(&mut self) -> TransformUpdate {
        self.interrupt_animation();
        self.manipulation.end_pinch();
        self.snap_back()
    }

    /// Ends the drag, clamping and committing the live transform.
    pub fn on_drag_ended(&mut self) -> TransformUpdate {
        self.interrupt_animation();
        self.manipulation.end_drag();
        self.snap_back()
    }

    /// Toggles between identity and a zoom about the content center.
    ///
    /// At identity the target is [`ZoomConfig::double_tap_zoom_scale`]
    /// anchored at the center of the content; anywhere else the target is
    /// identity. The target is shown immediately and committed when the host
    /// calls [`Self::on_animation_finished`].
    pub fn on_double_tap(&mut self) -> TransformUpdate {
        self.interrupt_animation();
        self.manipulation.clear();

        let from = self.live;
        let to = if from.is_identity(self.config.identity_tolerance) {
            let center = self.content_size.to_rect().center();
            ZoomTransform::IDENTITY.scaled_about(center, self.config.double_tap_zoom_scale)
        } else {
            ZoomTransform::IDENTITY
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(?from, ?to, "double tap");

        self.start_transition(
            from,
            to,
            self.config.double_tap_duration,
            Curve::Linear,
            true,
        )
    }

    /// Snaps back to identity and commits it immediately.
    pub fn reset(&mut self) -> TransformUpdate {
        self.interrupt_animation();
        self.manipulation.clear();
        let from = self.live;
        self.committed = ZoomTransform::IDENTITY;
        self.start_transition(
            from,
            ZoomTransform::IDENTITY,
            self.config.snap_duration,
            Curve::Snap,
            false,
        )
    }

    /// Reports that the host has presented the in-flight transition up to linear `progress`.
    ///
    /// This is optional. When reported, a gesture that interrupts the
    /// transition adopts the presented transform as its baseline instead of
    /// the transition target. Returns the presented transform, or `None`
    /// when no transition is in flight.
    pub fn on_animation_frame(&mut self, progress: f64) -> Option<ZoomTransform> {
        let presented = self.in_flight?.transition.sample(progress);
        self.set_live(presented);
        Some(presented)
    }

    /// Reports that the in-flight transition completed.
    ///
    /// Commits the target of a double-tap toggle. Stale completions for a
    /// transition that was already interrupted are ignored.
    pub fn on_animation_finished(&mut self) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };
        let target = in_flight.transition.to;
        if in_flight.commit_on_finish {
            self.committed = target;
        }
        self.set_live(target);
        #[cfg(feature = "tracing")]
        tracing::debug!(committed = ?self.committed, "animation finished");
    }

    /// Routes one event from the merged gesture stream.
    pub fn handle(&mut self, event: GestureEvent) -> Option<TransformUpdate> {
        match event {
            GestureEvent::Measured(size) => {
                self.measure_content(size);
                None
            }
            GestureEvent::PinchChanged(factor) => self.on_pinch_changed(factor),
            GestureEvent::PinchEnded => Some(self.on_pinch_ended()),
            GestureEvent::DragChanged(translation) => self.on_drag_changed(translation),
            GestureEvent::DragEnded => Some(self.on_drag_ended()),
            GestureEvent::DoubleTap => Some(self.on_double_tap()),
        }
    }

    /// Handles `event` and forwards any resulting update to `sink`.
    pub fn dispatch<S: TransformSink + ?Sized>(&mut self, event: GestureEvent, sink: &mut S) {
        if let Some(update) = self.handle(event) {
            sink.apply(&update);
        }
    }

    /// Converts a view-space point into content space through the live transform.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Option<Point> {
        self.live.inverse_map_point(pt)
    }

    /// Converts a content-space point into view space through the live transform.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.live.map_point(pt)
    }

    /// Snapshot of the current controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            config: self.config,
            committed: self.committed,
            live: self.live,
            content_size: self.content_size,
            pinching: self.manipulation.is_pinching(),
            dragging: self.manipulation.is_dragging(),
            in_flight: self.in_flight.map(|in_flight| in_flight.transition),
            revision: self.revision,
        }
    }

    fn set_live(&mut self, transform: ZoomTransform) {
        if self.live != transform {
            self.live = transform;
            self.revision = self.revision.wrapping_add(1);
        }
    }

    fn track_manipulation(&mut self, motion: Motion) -> TransformUpdate {
        let live = self.manipulation.apply(self.committed);
        self.set_live(live);
        TransformUpdate {
            transform: live,
            motion,
        }
    }

    /// Clamps the live transform, commits it, and animates to it.
    fn snap_back(&mut self) -> TransformUpdate {
        let from = self.live;
        let clamped = clamp_transform(from, self.content_size, self.config.min_zoom_scale);
        self.committed = clamped;
        #[cfg(feature = "tracing")]
        tracing::debug!(?from, ?clamped, "gesture committed");
        self.start_transition(
            from,
            clamped,
            self.config.snap_duration,
            Curve::Snap,
            false,
        )
    }

    fn start_transition(
        &mut self,
        from: ZoomTransform,
        to: ZoomTransform,
        duration: Duration,
        curve: Curve,
        commit_on_finish: bool,
    ) -> TransformUpdate {
        let transition = Transition {
            from,
            to,
            duration,
            curve,
        };
        self.set_live(to);
        self.in_flight = Some(InFlight {
            transition,
            commit_on_finish,
        });
        TransformUpdate {
            transform: to,
            motion: Motion::Animated(transition),
        }
    }

    /// Cancels any in-flight transition before new input is applied.
    ///
    /// Between gestures the transform on screen (the last reported frame, or
    /// the target when no frame was reported) becomes the new baseline. In
    /// the middle of a manipulation the baseline is already committed and
    /// the transition is simply dropped.
    fn interrupt_animation(&mut self) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };
        if !self.manipulation.is_active() {
            self.committed = self.live;
        } else if in_flight.commit_on_finish {
            self.committed = in_flight.transition.to;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(baseline = ?self.committed, "transition interrupted");
    }
}

impl Default for TransformController {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Debug snapshot of a [`TransformController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ControllerDebugInfo {
    /// Configuration fixed at construction.
    pub config: ZoomConfig,
    /// Resting transform gestures compose against.
    pub committed: ZoomTransform,
    /// Transform currently shown.
    pub live: ZoomTransform,
    /// Last measured content size.
    pub content_size: Size,
    /// Whether a pinch is in progress.
    pub pinching: bool,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Transition awaiting completion, if any.
    pub in_flight: Option<Transition>,
    /// Change counter of the live transform.
    pub revision: u64,
}
