// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomer Gesture: two-finger pinch tracking over raw multi-touch streams.
//!
//! This crate interprets the touch lists a host delivers with each
//! touch-start, touch-move and touch-end event and turns them into a pinch
//! session lifecycle:
//!
//! - [`PinchTracker::try_start`] opens a session once two or more fingers are down.
//! - [`PinchTracker::update`] reports the live centroid, finger distance and
//!   the distance ratio relative to the start of the session.
//! - [`PinchTracker::try_end`] closes the session as soon as either of the two
//!   tracked fingers (matched by identifier, not by list position) is lifted.
//!
//! The tracker does not register listeners or own an event loop. Hosts feed it
//! events while a session is active and stop afterwards.
//!
//! ## Minimal example
//!
//! ```rust
//! use zoomer_gesture::{PinchTracker, TouchPoint};
//!
//! let mut pinch = PinchTracker::default();
//!
//! let down = [TouchPoint::new(1, 100.0, 100.0), TouchPoint::new(2, 200.0, 100.0)];
//! let session = pinch.try_start(&down).unwrap();
//! assert_eq!(session.start_distance, 100.0);
//!
//! // Fingers spread apart to twice the distance.
//! let moved = [TouchPoint::new(1, 50.0, 100.0), TouchPoint::new(2, 250.0, 100.0)];
//! let update = pinch.update(&moved).unwrap();
//! assert_eq!(update.ratio, 2.0);
//!
//! // One of the tracked fingers lifts: the session ends.
//! let end = pinch.try_end(&[TouchPoint::new(2, 250.0, 100.0)]).unwrap();
//! assert_eq!(end.ratio, 2.0);
//! assert!(!pinch.is_pinching());
//! ```
//!
//! Degenerate geometry never leaks out as NaN or infinity: a session whose
//! fingers started on the same spot reports a ratio of `1.0`.
//!
//! This crate is `no_std`.

#![no_std]

mod pinch;
mod touch;

pub use pinch::{DEGENERATE_DISTANCE, PinchEnd, PinchSession, PinchTracker, PinchUpdate, distance_ratio};
pub use touch::{TouchId, TouchPoint, centroid, distance};
