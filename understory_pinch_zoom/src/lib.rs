// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pinch_zoom --heading-base-level=0

//! Understory Pinch Zoom: a headless pinch, pan, and double-tap zoom controller.
//!
//! This crate models the interaction state behind zoomable content shown at
//! its natural size inside a fixed viewport (a photo, a page, a map tile):
//! - A scale + translate [`ZoomTransform`] with anchored scaling and
//!   conversion to and from Kurbo's [`Affine`](kurbo::Affine).
//! - A [`TransformController`] that maps pinch, drag, and double-tap gestures
//!   onto that transform.
//! - [`clamp_transform`], which snaps content back so it never shrinks below
//!   a minimum scale or exposes space beyond its own edges.
//!
//! It does **not** recognize gestures, draw, or run animations. Callers are
//! expected to:
//! - Measure the content and report its size with
//!   [`TransformController::measure_content`].
//! - Forward cumulative values from their platform's pinch and pan
//!   recognizers, plus double taps.
//! - Apply each returned [`TransformUpdate`] to the content, running the
//!   requested [`Transition`] in their own animation engine (or stepping
//!   [`Transition::sample`]) and reporting completion back.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_pinch_zoom::{TransformController, ZoomConfig, ZoomTransform};
//!
//! let mut zoom = TransformController::new(ZoomConfig::default());
//! zoom.measure_content(Size::new(300.0, 300.0));
//!
//! // Pinch out to 2x; the transform tracks the fingers without clamping.
//! zoom.on_pinch_changed(2.0);
//! zoom.on_pinch_ended();
//! assert_eq!(zoom.committed_transform().scale(), Vec2::new(2.0, 2.0));
//!
//! // Drag far past the bottom-right corner; the end of the drag snaps back.
//! zoom.on_drag_changed(Vec2::new(-700.0, -700.0));
//! let update = zoom.on_drag_ended();
//! assert_eq!(update.transform.translation(), Vec2::new(-300.0, -300.0));
//!
//! // Double tap away from identity resets.
//! zoom.on_double_tap();
//! zoom.on_animation_finished();
//! assert_eq!(zoom.committed_transform(), ZoomTransform::IDENTITY);
//! ```
//!
//! ## Event stream
//!
//! Simultaneous recognizers can be merged into one ordered stream of
//! [`GestureEvent`]s and fed through [`TransformController::handle`], or
//! through [`TransformController::dispatch`] with a [`TransformSink`] that
//! applies the result:
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_pinch_zoom::{GestureEvent, TransformController, TransformUpdate};
//!
//! let mut zoom = TransformController::default();
//! let mut shown = Vec::new();
//! let mut sink = |update: &TransformUpdate| shown.push(update.transform);
//!
//! for event in [
//!     GestureEvent::Measured(Size::new(400.0, 300.0)),
//!     GestureEvent::PinchChanged(1.5),
//!     GestureEvent::DragChanged(Vec2::new(-30.0, 0.0)),
//!     GestureEvent::PinchEnded,
//!     GestureEvent::DragEnded,
//! ] {
//!     zoom.dispatch(event, &mut sink);
//! }
//! assert_eq!(shown.len(), 4);
//! ```
//!
//! ## Design notes
//!
//! - Pinch and drag values are cumulative since their gesture began, and
//!   both apply against the same committed transform, so simultaneous
//!   recognizers commute.
//! - Clamping only happens when a gesture ends; overshoot is allowed while
//!   the user's fingers are down.
//! - Content scales about its top‑left origin. Rotation is not supported.
//! - A gesture that starts while a transition is in flight cancels it and
//!   continues from what is on screen.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: emit `tracing` events when gestures commit.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod clamp;
mod config;
mod controller;
mod gesture;
mod transform;

pub use animation::{Curve, Motion, TransformSink, TransformUpdate, Transition};
pub use clamp::clamp_transform;
pub use config::ZoomConfig;
pub use controller::{ControllerDebugInfo, TransformController};
pub use gesture::GestureEvent;
pub use transform::ZoomTransform;
