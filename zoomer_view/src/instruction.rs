// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Vec2};

use crate::affine;

/// Visual transform a host applies to the content element.
///
/// The [`Display`](fmt::Display) form is CSS transform syntax, so a browser
/// host can assign it to `style.transform` as is (with `transform-origin: 0 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformInstruction {
    /// Settled placement: scale, then offset by `translate`.
    TranslateScale {
        /// Offset in frame-local pixels.
        translate: Vec2,
        /// Uniform scale.
        scale: f64,
    },
    /// Live pinch preview as a raw affine matrix.
    Matrix(Affine),
}

impl TransformInstruction {
    /// Returns the equivalent affine matrix.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        match *self {
            Self::TranslateScale { translate, scale } => {
                affine::scale(affine::translate(affine::identity(), translate), scale, scale)
            }
            Self::Matrix(m) => m,
        }
    }
}

impl fmt::Display for TransformInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TranslateScale { translate, scale } => {
                write!(
                    f,
                    "translate({}px, {}px) scale({})",
                    translate.x, translate.y, scale
                )
            }
            Self::Matrix(m) => {
                let [a, b, c, d, e, g] = m.as_coeffs();
                write!(f, "matrix({a}, {b}, {c}, {d}, {e}, {g})")
            }
        }
    }
}
