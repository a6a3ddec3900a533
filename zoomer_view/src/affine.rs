// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affine composition helpers over [`kurbo::Affine`].
//!
//! Every builder post-multiplies onto the accumulator: `translate(m, d)` is
//! `m * T(d)` and `scale(m, sx, sy)` is `m * S(sx, sy)`. An operation added
//! later in a chain is therefore applied to points *first*. The chain
//!
//! ```text
//! translate(c) -> scale(k) -> translate(-c0) -> translate(t) -> scale(s)
//! ```
//!
//! maps a content point by scaling with `s`, offsetting by `t`, and then
//! zooming by `k` around the pinch centroid.

use core::fmt;

use kurbo::{Affine, Point, Vec2};

/// Determinant magnitude below which a matrix is treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Error returned by [`invert`] for matrices without a usable inverse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingularMatrix {
    /// Determinant of the rejected matrix.
    pub determinant: f64,
}

impl fmt::Display for SingularMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "affine matrix is not invertible (determinant {})",
            self.determinant
        )
    }
}

impl core::error::Error for SingularMatrix {}

/// The identity matrix.
#[must_use]
pub fn identity() -> Affine {
    Affine::IDENTITY
}

/// Post-multiplies a translation by `delta` onto `m`.
#[must_use]
pub fn translate(m: Affine, delta: impl Into<Vec2>) -> Affine {
    m * Affine::translate(delta)
}

/// Post-multiplies a scale by `(sx, sy)` onto `m`.
#[must_use]
pub fn scale(m: Affine, sx: f64, sy: f64) -> Affine {
    m * Affine::scale_non_uniform(sx, sy)
}

/// Inverts `m`, refusing matrices whose inverse would not be finite.
pub fn invert(m: Affine) -> Result<Affine, SingularMatrix> {
    let determinant = m.determinant();
    if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
        return Err(SingularMatrix { determinant });
    }
    let inverse = m.inverse();
    if inverse.is_finite() {
        Ok(inverse)
    } else {
        Err(SingularMatrix { determinant })
    }
}

/// Maps `point` through `m`.
#[must_use]
pub fn apply(m: Affine, point: Point) -> Point {
    m * point
}
