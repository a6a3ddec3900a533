// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Identifier a host assigns to a finger for the lifetime of its contact.
pub type TouchId = i32;

/// A single active touch point, in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned identifier, stable while the finger stays down.
    pub id: TouchId,
    /// Position in page coordinates.
    pub page: Point,
}

impl TouchPoint {
    /// Creates a touch point from its identifier and page coordinates.
    #[must_use]
    pub fn new(id: TouchId, page_x: f64, page_y: f64) -> Self {
        Self {
            id,
            page: Point::new(page_x, page_y),
        }
    }
}

/// Midpoint between two touch points.
#[must_use]
pub fn centroid(a: &TouchPoint, b: &TouchPoint) -> Point {
    a.page.midpoint(b.page)
}

/// Euclidean distance between two touch points.
#[must_use]
pub fn distance(a: &TouchPoint, b: &TouchPoint) -> f64 {
    a.page.distance(b.page)
}
