// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform updates handed to the host, and the animation contract they carry.
//!
//! The controller never runs an animation itself. Each update says *what* to
//! show and *how* to get there: immediately, tracking a finger, or as a timed
//! [`Transition`]. Hosts with an animation engine hand the transition to it;
//! hosts without one can step [`Transition::sample`] from their frame clock.

use core::time::Duration;

use crate::transform::ZoomTransform;

/// Easing curve for a timed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Curve {
    /// Constant velocity.
    #[default]
    Linear,
    /// Fast start that decelerates into the target (cubic ease‑out).
    ///
    /// Used when snapping content back inside its bounds.
    Snap,
}

impl Curve {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    ///
    /// Inputs outside the unit interval are clamped.
    #[must_use]
    pub fn ease(self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Snap => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

/// A timed move from one transform to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Transform shown when the transition starts.
    pub from: ZoomTransform,
    /// Transform shown when the transition completes.
    pub to: ZoomTransform,
    /// Total duration.
    pub duration: Duration,
    /// Easing applied to progress.
    pub curve: Curve,
}

impl Transition {
    /// Returns the transform to present at linear `progress` in `[0, 1]`.
    #[must_use]
    pub fn sample(&self, progress: f64) -> ZoomTransform {
        self.from.lerp(self.to, self.curve.ease(progress))
    }

    /// Returns the transform to present once `elapsed` time has passed.
    #[must_use]
    pub fn sample_at(&self, elapsed: Duration) -> ZoomTransform {
        self.sample(self.progress_at(elapsed))
    }

    /// Converts elapsed time into linear progress; zero-length transitions are complete.
    #[must_use]
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        }
    }
}

/// How the host should move from what it currently shows to a new transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Jump straight to the new transform.
    Immediate,
    /// Follow the pointer continuously; hosts may apply light smoothing but
    /// must not introduce a fixed-duration animation.
    Interactive,
    /// Animate along the given transition.
    Animated(Transition),
}

/// A new transform for the host to apply to the content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformUpdate {
    /// Transform to display (the end state when animated).
    pub transform: ZoomTransform,
    /// How to reach it.
    pub motion: Motion,
}

impl TransformUpdate {
    /// Returns the transition if this update is animated.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        match &self.motion {
            Motion::Animated(transition) => Some(transition),
            _ => None,
        }
    }
}

/// Side-effecting half of the controller: applies updates to the rendered content.
///
/// Implemented by the host (a view, a retained scene node, a test recorder).
/// The host reports progress and completion of animated updates back through
/// [`crate::TransformController::on_animation_frame`] and
/// [`crate::TransformController::on_animation_finished`].
pub trait TransformSink {
    /// Applies `update` to the content.
    fn apply(&mut self, update: &TransformUpdate);
}

impl<F: FnMut(&TransformUpdate)> TransformSink for F {
    fn apply(&mut self, update: &TransformUpdate) {
        self(update);
    }
}
