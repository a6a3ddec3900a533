// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};

use crate::instruction::TransformInstruction;

/// The environment a [`ViewportController`](crate::ViewportController) drives.
///
/// Implementations wrap whatever owns the frame and content elements: a DOM
/// binding, a native widget, or a recording fake in tests. Layout reads are
/// on demand and must reflect every transform applied so far.
pub trait Host {
    /// Current bounds of the frame, in page coordinates.
    fn frame_bounds(&self) -> Rect;

    /// Current on-screen bounds of the content, in page coordinates.
    fn content_bounds(&self) -> Rect;

    /// Native scroll offset of the frame.
    fn scroll_offset(&self) -> Vec2;

    /// Sets the native scroll offset of the frame.
    fn set_scroll_offset(&mut self, offset: Vec2);

    /// Enables or disables native scrolling of the frame.
    fn set_native_scroll(&mut self, enabled: bool);

    /// Applies a visual transform to the content.
    fn apply_transform(&mut self, instruction: TransformInstruction);
}

bitflags::bitflags! {
    /// Events a controller currently wants delivered.
    ///
    /// Hosts (re)register their listeners from
    /// [`ViewportController::interest`](crate::ViewportController::interest)
    /// after each dispatch.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventInterest: u8 {
        /// Touch-start on the frame.
        const TOUCH_START = 0b0000_0001;
        /// Touch-move anywhere in the window.
        const TOUCH_MOVE  = 0b0000_0010;
        /// Touch-end anywhere in the window.
        const TOUCH_END   = 0b0000_0100;
        /// Frame resize notifications.
        const RESIZE      = 0b0000_1000;
    }
}

impl EventInterest {
    /// Events wanted while no pinch is active.
    pub const IDLE: Self = Self::TOUCH_START.union(Self::RESIZE);

    /// Events wanted during a pinch.
    pub const PINCHING: Self = Self::IDLE
        .union(Self::TOUCH_MOVE)
        .union(Self::TOUCH_END);
}

impl Default for EventInterest {
    fn default() -> Self {
        Self::IDLE
    }
}
