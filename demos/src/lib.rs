// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the Zoomer demos.
//!
//! [`SimulatedPage`] stands in for a browser page: a scrollable frame element
//! with a transformed content element inside it.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use zoomer_view::{Host, TransformInstruction};

/// A frame/content pair with browser-like layout and scrolling.
#[derive(Clone, Debug)]
pub struct SimulatedPage {
    /// Frame bounds in page coordinates.
    pub frame: Rect,
    /// Natural size of the content.
    pub natural: Size,
    /// Whether the frame currently scrolls natively.
    pub native_scroll: bool,
    scroll: Vec2,
    transform: Option<TransformInstruction>,
}

impl SimulatedPage {
    /// Creates a page whose frame sits at the page origin.
    #[must_use]
    pub fn new(frame: Size, natural: Size) -> Self {
        Self {
            frame: Rect::from_origin_size(Point::ORIGIN, frame),
            natural,
            native_scroll: true,
            scroll: Vec2::ZERO,
            transform: None,
        }
    }

    /// The CSS transform text currently assigned to the content.
    #[must_use]
    pub fn css_transform(&self) -> String {
        self.transform
            .map(|t| t.to_string())
            .unwrap_or_else(|| "none".to_owned())
    }

    fn max_scroll(&self) -> Vec2 {
        let local = self.local_content_bounds();
        Vec2::new(
            (local.x1 - self.frame.width()).max(0.0),
            (local.y1 - self.frame.height()).max(0.0),
        )
    }

    fn local_content_bounds(&self) -> Rect {
        let m = self.transform.map(|t| t.to_affine()).unwrap_or(Affine::IDENTITY);
        m.transform_rect_bbox(Rect::from_origin_size(Point::ORIGIN, self.natural))
    }
}

impl Host for SimulatedPage {
    fn frame_bounds(&self) -> Rect {
        self.frame
    }

    fn content_bounds(&self) -> Rect {
        self.local_content_bounds() + self.frame.origin().to_vec2() - self.scroll
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        let max = self.max_scroll();
        self.scroll = Vec2::new(offset.x.clamp(0.0, max.x), offset.y.clamp(0.0, max.y));
    }

    fn set_native_scroll(&mut self, enabled: bool) {
        self.native_scroll = enabled;
    }

    fn apply_transform(&mut self, instruction: TransformInstruction) {
        log::trace!("content transform: {instruction}");
        self.transform = Some(instruction);
    }
}
