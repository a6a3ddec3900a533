// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary clamping of a candidate transform against a fixed frame.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::affine::{self, SingularMatrix};

/// Maps the natural rectangle `(0, 0)..(width, height)` of `content` through `m`.
#[must_use]
pub fn rendered_bounds(m: Affine, content: Size) -> Rect {
    let top_left = affine::apply(m, Point::ORIGIN);
    let bottom_right = affine::apply(m, Point::new(content.width, content.height));
    Rect::from_points(top_left, bottom_right)
}

/// Smallest screen-space translation that keeps `rendered` sensibly placed in `frame`.
///
/// Each axis is handled independently:
/// - content narrower than the frame is centered;
/// - otherwise a gap on the leading side snaps the leading edge to `0`;
/// - otherwise a gap on the trailing side snaps the trailing edge to the frame edge;
/// - content that already covers the frame is left alone.
#[must_use]
pub fn correction(rendered: Rect, frame: Size) -> Vec2 {
    Vec2::new(
        correct_axis(rendered.x0, rendered.x1, frame.width),
        correct_axis(rendered.y0, rendered.y1, frame.height),
    )
}

fn correct_axis(min: f64, max: f64, extent: f64) -> f64 {
    let len = max - min;
    if len < extent {
        -min + (extent - len) / 2.0
    } else if min > 0.0 {
        -min
    } else if max < extent {
        extent - max
    } else {
        0.0
    }
}

/// Inserts a translation by `offset` ahead of everything `m` already encodes.
///
/// With post-multiply builders only, "translate before everything else" is
/// expressed by inverting `m`, appending the opposite translation and
/// inverting back. The result equals `Affine::translate(offset) * m`.
pub fn insert_correction(m: Affine, offset: Vec2) -> Result<Affine, SingularMatrix> {
    let inverse = affine::invert(m)?;
    affine::invert(affine::translate(inverse, -offset))
}

/// Clamps candidate matrix `m` so the transformed `content` is placed correctly in `frame`.
pub fn clamp_matrix(m: Affine, content: Size, frame: Size) -> Result<Affine, SingularMatrix> {
    let offset = correction(rendered_bounds(m, content), frame);
    insert_correction(m, offset)
}
