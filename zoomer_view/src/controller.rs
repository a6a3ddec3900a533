// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};
use zoomer_gesture::{PinchSession, PinchTracker, TouchPoint};

use crate::host::{EventInterest, Host};
use crate::instruction::TransformInstruction;
use crate::state::{PinchPreview, ViewState, compute_transform};

/// Interaction mode of a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No pinch is active; the view rests at its settled state.
    Idle,
    /// A two-finger pinch is driving a live preview.
    Pinching,
}

/// Pinch-zoom and pan controller for content inside a fixed-size frame.
///
/// The controller owns the settled [`ViewState`] and the active pinch session,
/// and pushes every visual change to its [`Host`]. Settled state only changes
/// on mount, on resize and at the end of a pinch; moves during a pinch only
/// produce preview transforms.
///
/// Dropping the controller tears it down, which cancels a pinch the host
/// never finished and restores native scrolling.
#[derive(Debug)]
pub struct ViewportController<H: Host> {
    host: H,
    content: Size,
    state: ViewState,
    tracker: PinchTracker,
    interest: EventInterest,
    instruction: TransformInstruction,
}

impl<H: Host> ViewportController<H> {
    /// Mounts a controller on `host` and fits the content to the frame.
    ///
    /// The content's current on-screen size is taken as its natural size, so
    /// the host must not have applied any transform to it yet.
    pub fn mount(host: H) -> Self {
        let content = host.content_bounds().size();
        let state = ViewState::default();
        let mut controller = Self {
            host,
            content,
            state,
            tracker: PinchTracker::default(),
            interest: EventInterest::IDLE,
            instruction: state.instruction(),
        };
        controller.zoom_to_bounds();
        controller
    }

    /// Fits the content to the current frame, discarding any user zoom.
    ///
    /// Sets both the scale and its floor to the fit-to-frame scale and centers
    /// the content. Degenerate frame or content sizes leave the state untouched.
    pub fn zoom_to_bounds(&mut self) {
        let frame = self.host.frame_bounds().size();
        let Some(state) = ViewState::fit(frame, self.content) else {
            log::debug!(
                "fit-to-frame skipped: frame {frame:?}, content {:?}",
                self.content
            );
            return;
        };
        log::debug!(
            "fit-to-frame: scale {} translate {:?}",
            state.scale,
            state.translate
        );
        self.state = state;
        self.apply(state.instruction());
    }

    /// Handles a touch-start with the full list of active touches.
    ///
    /// Returns `true` when a pinch started, in which case the host should
    /// suppress the event's native default behavior.
    pub fn on_touch_start(&mut self, touches: &[TouchPoint]) -> bool {
        if !self.interest.contains(EventInterest::TOUCH_START) {
            return false;
        }
        let Some(session) = self.tracker.try_start(touches) else {
            return false;
        };
        log::debug!(
            "pinch start: touches {:?}, distance {}",
            session.touch_ids,
            session.start_distance
        );

        // Fold native scroll into the translate so the preview math runs in
        // one coordinate space.
        self.state.translate -= self.host.scroll_offset();
        self.host.set_native_scroll(false);
        self.host.set_scroll_offset(Vec2::ZERO);
        self.apply(self.state.instruction());

        self.interest = EventInterest::PINCHING;
        true
    }

    /// Handles a touch-move during a pinch by applying a clamped preview.
    ///
    /// Moves outside a pinch, with fewer than two touches, or with a
    /// degenerate layout leave the view unchanged.
    pub fn on_touch_move(&mut self, touches: &[TouchPoint]) {
        if !self.interest.contains(EventInterest::TOUCH_MOVE) {
            return;
        }
        let Some(update) = self.tracker.update(touches) else {
            return;
        };
        let Some(session) = self.tracker.session().copied() else {
            return;
        };
        let frame = self.host.frame_bounds();
        let preview = PinchPreview::new(&session, &update, frame.origin());
        if let Some(m) = compute_transform(&self.state, &preview, frame.size(), self.content) {
            log::trace!("pinch preview: ratio {}, matrix {:?}", update.ratio, m);
            self.apply(TransformInstruction::Matrix(m));
        }
    }

    /// Handles a touch-end with the touches that remain down.
    ///
    /// Once either tracked finger is gone, commits the pinch: the scale is
    /// multiplied by the final ratio (floored at the fit scale) and the measured
    /// offset is split between the translate and native scrolling, so the
    /// content does not jump.
    pub fn on_touch_end(&mut self, touches: &[TouchPoint]) {
        if !self.interest.contains(EventInterest::TOUCH_END) {
            return;
        }
        let Some(end) = self.tracker.try_end(touches) else {
            return;
        };

        let frame = self.host.frame_bounds();
        let content = self.host.content_bounds();
        let mut offset = content.origin() - frame.origin();
        if !offset.is_finite() {
            log::debug!("pinch end measured a non-finite offset; using zero");
            offset = Vec2::ZERO;
        }

        self.state = self.state.committed(end.ratio, offset);
        log::debug!(
            "pinch end: ratio {}, scale {}, translate {:?}",
            end.ratio,
            self.state.scale,
            self.state.translate
        );
        self.apply(self.state.instruction());

        self.host.set_native_scroll(true);
        let scroll = self.host.scroll_offset();
        self.host.set_scroll_offset(scroll - offset);
        self.interest = EventInterest::IDLE;
    }

    /// Handles a frame resize: cancels any pinch and fits to the new frame.
    pub fn on_resize(&mut self) {
        if !self.interest.contains(EventInterest::RESIZE) {
            return;
        }
        self.cancel_pinch();
        self.zoom_to_bounds();
    }

    /// Releases the controller's hold on the host.
    ///
    /// Cancels an unfinished pinch, restores native scrolling and clears
    /// [`interest`](Self::interest). Later events are ignored. Calling this
    /// more than once is harmless.
    pub fn teardown(&mut self) {
        if self.interest.is_empty() {
            return;
        }
        self.cancel_pinch();
        self.interest = EventInterest::empty();
        log::debug!("viewport controller torn down");
    }

    /// Events the host should currently deliver.
    #[must_use]
    pub fn interest(&self) -> EventInterest {
        self.interest
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.tracker.is_pinching() {
            Mode::Pinching
        } else {
            Mode::Idle
        }
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.tracker.is_pinching()
    }

    /// The active pinch session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&PinchSession> {
        self.tracker.session()
    }

    /// Settled view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Natural size of the content, measured at mount.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// The most recently applied transform.
    #[must_use]
    pub fn current_instruction(&self) -> TransformInstruction {
        self.instruction
    }

    /// Shared access to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn cancel_pinch(&mut self) {
        if self.tracker.cancel().is_none() {
            return;
        }
        log::debug!("pinch cancelled");
        self.host.set_native_scroll(true);
        self.apply(self.state.instruction());
        self.interest = EventInterest::IDLE;
    }

    fn apply(&mut self, instruction: TransformInstruction) {
        self.instruction = instruction;
        self.host.apply_transform(instruction);
    }
}

impl<H: Host> Drop for ViewportController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
