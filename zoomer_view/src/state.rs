// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use zoomer_gesture::{PinchSession, PinchUpdate};

use crate::affine;
use crate::clamp::{self, rendered_bounds};
use crate::instruction::TransformInstruction;

/// Returns `true` for sizes with strictly positive, finite extents.
#[must_use]
pub fn is_usable(size: Size) -> bool {
    size.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Settled scale and offset of the content inside its frame.
///
/// The content is rendered by scaling its natural rectangle by `scale` and
/// then offsetting it by `translate`, in frame-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Current uniform scale.
    pub scale: f64,
    /// Floor for `scale`: the fit-to-frame scale.
    pub min_scale: f64,
    /// Offset applied after scaling.
    pub translate: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            min_scale: 1.0,
            translate: Vec2::ZERO,
        }
    }
}

impl ViewState {
    /// Fits `content` into `frame`, centered, at the largest scale that shows all of it.
    ///
    /// The fitted scale also becomes the floor. Returns `None` if either size is
    /// empty or not finite.
    #[must_use]
    pub fn fit(frame: Size, content: Size) -> Option<Self> {
        if !is_usable(frame) || !is_usable(content) {
            return None;
        }
        let scale = (frame.width / content.width).min(frame.height / content.height);
        let translate = Vec2::new(
            (frame.width - content.width * scale) / 2.0,
            (frame.height - content.height * scale) / 2.0,
        );
        Some(Self {
            scale,
            min_scale: scale,
            translate,
        })
    }

    /// The settled transform: translate, then scale (points are scaled first).
    #[must_use]
    pub fn affine(&self) -> Affine {
        let m = affine::translate(affine::identity(), self.translate);
        affine::scale(m, self.scale, self.scale)
    }

    /// The instruction a host applies to render this state.
    #[must_use]
    pub fn instruction(&self) -> TransformInstruction {
        TransformInstruction::TranslateScale {
            translate: self.translate,
            scale: self.scale,
        }
    }

    /// On-screen rectangle of `content` under this state, in frame-local pixels.
    #[must_use]
    pub fn rendered_rect(&self, content: Size) -> Rect {
        rendered_bounds(self.affine(), content)
    }

    /// Live-preview zoom factor for a pinch `ratio`, floored so the preview
    /// never shows the content below `min_scale`.
    #[must_use]
    pub fn candidate_scale(&self, ratio: f64) -> f64 {
        ratio.max(self.min_scale / self.scale)
    }

    /// State committed at the end of a pinch.
    ///
    /// `offset` is the measured position of the content relative to the frame;
    /// negative components are left to native scrolling.
    #[must_use]
    pub fn committed(&self, ratio: f64, offset: Vec2) -> Self {
        Self {
            scale: (self.scale * ratio).max(self.min_scale),
            min_scale: self.min_scale,
            translate: Vec2::new(offset.x.max(0.0), offset.y.max(0.0)),
        }
    }
}

/// Inputs of one live-preview frame, in frame-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchPreview {
    /// Finger midpoint when the pinch started.
    pub start_centroid: Point,
    /// Current finger midpoint.
    pub centroid: Point,
    /// Current distance ratio.
    pub ratio: f64,
}

impl PinchPreview {
    /// Builds a preview from tracker output, shifting page coordinates by
    /// `frame_origin` so both centroids are frame-local.
    #[must_use]
    pub fn new(session: &PinchSession, update: &PinchUpdate, frame_origin: Point) -> Self {
        let origin = frame_origin.to_vec2();
        Self {
            start_centroid: session.start_centroid - origin,
            centroid: update.centroid - origin,
            ratio: update.ratio,
        }
    }
}

/// Computes the clamped live-preview transform for one pinch frame.
///
/// Returns `None` when the frame should be skipped: degenerate sizes or a
/// candidate matrix that cannot be inverted during clamping.
#[must_use]
pub fn compute_transform(
    state: &ViewState,
    preview: &PinchPreview,
    frame: Size,
    content: Size,
) -> Option<Affine> {
    if !is_usable(frame) || !is_usable(content) {
        log::debug!("skipping pinch frame: degenerate frame {frame:?} or content {content:?}");
        return None;
    }
    let zoom = state.candidate_scale(preview.ratio);

    let mut m = affine::identity();
    m = affine::translate(m, preview.centroid.to_vec2());
    m = affine::scale(m, zoom, zoom);
    m = affine::translate(m, -preview.start_centroid.to_vec2());
    m = affine::translate(m, state.translate);
    m = affine::scale(m, state.scale, state.scale);

    match clamp::clamp_matrix(m, content, frame) {
        Ok(clamped) => Some(clamped),
        Err(err) => {
            log::debug!("skipping pinch frame: {err}");
            None
        }
    }
}
