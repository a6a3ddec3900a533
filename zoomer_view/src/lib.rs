// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomer View: pinch-zoom and pan of large content inside a fixed-size frame.
//!
//! This crate keeps the visible part of a piece of content consistent with a
//! two-finger gesture and with the bounds of the frame it is shown in. It is
//! headless: the controller never touches a display directly. Instead it
//! talks to a [`Host`] adapter that measures layout, owns native scrolling and
//! applies the visual transforms the controller produces.
//!
//! The pieces, leaves first:
//! - [`affine`]: post-multiply composition helpers and a guarded inverse.
//! - [`clamp`]: the per-axis boundary correction and its insertion ahead of
//!   an existing transform.
//! - [`ViewState`] and [`compute_transform`]: settled scale/offset, the
//!   fit-to-frame rule, and the pure live-preview transform of one pinch frame.
//! - [`ViewportController`]: the Idle/Pinching state machine wiring touch
//!   events, resize notifications and the host together.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use zoomer_gesture::TouchPoint;
//! use zoomer_view::{Host, TransformInstruction, ViewportController};
//!
//! #[derive(Debug)]
//! struct Page {
//!     frame: Rect,
//!     natural: Rect,
//!     transform: Option<TransformInstruction>,
//! }
//!
//! impl Host for Page {
//!     fn frame_bounds(&self) -> Rect {
//!         self.frame
//!     }
//!     fn content_bounds(&self) -> Rect {
//!         let m = self.transform.map(|t| t.to_affine()).unwrap_or_default();
//!         m.transform_rect_bbox(self.natural)
//!     }
//!     fn scroll_offset(&self) -> Vec2 {
//!         Vec2::ZERO
//!     }
//!     fn set_scroll_offset(&mut self, _offset: Vec2) {}
//!     fn set_native_scroll(&mut self, _enabled: bool) {}
//!     fn apply_transform(&mut self, instruction: TransformInstruction) {
//!         self.transform = Some(instruction);
//!     }
//! }
//!
//! let page = Page {
//!     frame: Rect::new(0.0, 0.0, 200.0, 300.0),
//!     natural: Rect::new(0.0, 0.0, 600.0, 600.0),
//!     transform: None,
//! };
//! let mut view = ViewportController::mount(page);
//!
//! // Fitted: 600x600 shown at 200x200, centered vertically.
//! assert_eq!(view.state().min_scale, 200.0 / 600.0);
//! assert_eq!(view.state().translate, Vec2::new(0.0, 50.0));
//!
//! // Spread two fingers to twice their distance and release.
//! view.on_touch_start(&[TouchPoint::new(0, 50.0, 150.0), TouchPoint::new(1, 150.0, 150.0)]);
//! view.on_touch_move(&[TouchPoint::new(0, 0.0, 150.0), TouchPoint::new(1, 200.0, 150.0)]);
//! view.on_touch_end(&[]);
//! assert!((view.state().scale - 2.0 * view.state().min_scale).abs() < 1e-9);
//! ```
//!
//! ## Composition convention
//!
//! All matrix builders post-multiply, so the operation added last is applied
//! to points first. See [`affine`] for the full chain used by live previews.
//!
//! ## Failure handling
//!
//! Nothing in this crate panics on bad geometry. Zero or non-finite sizes and
//! singular matrices turn into "no transform update this frame", logged at
//! `debug` level through the `log` facade.
//!
//! This crate is `no_std`.

#![no_std]

pub mod affine;
pub mod clamp;
mod controller;
mod host;
mod instruction;
mod state;

pub use affine::SingularMatrix;
pub use controller::{Mode, ViewportController};
pub use host::{EventInterest, Host};
pub use instruction::TransformInstruction;
pub use state::{PinchPreview, ViewState, compute_transform, is_usable};
