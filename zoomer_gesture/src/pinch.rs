// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch session tracking: derive centroid, distance and scale ratio from touch lists.
//!
//! ## Usage
//!
//! 1) On touch-start, call [`PinchTracker::try_start`] with the current touch list.
//! 2) On each touch-move, call [`PinchTracker::update`] to get the live centroid and ratio.
//! 3) On touch-end, call [`PinchTracker::try_end`] with the remaining touches; it returns
//!    the final ratio once either tracked finger has lifted.
//! 4) Call [`PinchTracker::cancel`] to drop a session the host will never finish.

use kurbo::Point;

use crate::touch::{TouchId, TouchPoint, centroid, distance};

/// Start distances at or below this many page units count as coincident fingers.
pub const DEGENERATE_DISTANCE: f64 = 1e-6;

/// Ratio of `current` to `start`, or `1.0` when the ratio would not be finite.
#[must_use]
pub fn distance_ratio(current: f64, start: f64) -> f64 {
    if start.is_finite() && start > DEGENERATE_DISTANCE && current.is_finite() {
        current / start
    } else {
        1.0
    }
}

/// An active two-finger pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    /// Identifiers of the two tracked fingers, in the order they were reported at start.
    pub touch_ids: [TouchId; 2],
    /// Midpoint of the tracked fingers when the session started.
    pub start_centroid: Point,
    /// Finger distance when the session started.
    pub start_distance: f64,
    /// Midpoint reported by the most recent update.
    pub latest_centroid: Point,
    /// Finger distance reported by the most recent update.
    pub latest_distance: f64,
}

impl PinchSession {
    /// Returns the latest distance relative to the start distance.
    #[must_use]
    pub fn distance_ratio(&self) -> f64 {
        distance_ratio(self.latest_distance, self.start_distance)
    }

    /// Returns `true` if both tracked fingers are present in `touches`.
    #[must_use]
    pub fn is_tracked_by(&self, touches: &[TouchPoint]) -> bool {
        self.find(touches).is_some()
    }

    fn find(&self, touches: &[TouchPoint]) -> Option<(TouchPoint, TouchPoint)> {
        let [first, second] = self.touch_ids;
        let a = touches.iter().find(|t| t.id == first)?;
        let b = touches.iter().find(|t| t.id == second)?;
        Some((*a, *b))
    }
}

/// Live values produced by [`PinchTracker::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Current midpoint of the tracked fingers.
    pub centroid: Point,
    /// Current distance between the tracked fingers.
    pub distance: f64,
    /// `distance / start_distance`, or `1.0` for a degenerate start.
    pub ratio: f64,
}

/// Result of a finished session, produced by [`PinchTracker::try_end`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchEnd {
    /// The session as it was when it ended.
    pub session: PinchSession,
    /// Final distance ratio.
    pub ratio: f64,
}

/// Tracks at most one pinch session at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchTracker {
    session: Option<PinchSession>,
}

impl PinchTracker {
    /// Opens a session from the first two touches in `touches`.
    ///
    /// Returns `None` and leaves the tracker unchanged when fewer than two
    /// touches are down or a session is already active.
    pub fn try_start(&mut self, touches: &[TouchPoint]) -> Option<PinchSession> {
        if self.session.is_some() {
            return None;
        }
        let [a, b, ..] = touches else {
            return None;
        };
        if a.id == b.id {
            return None;
        }
        let start_centroid = centroid(a, b);
        let start_distance = distance(a, b);
        if start_distance <= DEGENERATE_DISTANCE {
            log::debug!("pinch started with coincident touches; ratio pinned to 1");
        }
        let session = PinchSession {
            touch_ids: [a.id, b.id],
            start_centroid,
            start_distance,
            latest_centroid: start_centroid,
            latest_distance: start_distance,
        };
        self.session = Some(session);
        Some(session)
    }

    /// Feeds a touch-move list into the active session.
    ///
    /// Returns `None` without touching the session when no session is active,
    /// fewer than two touches are present, or either tracked finger is missing.
    pub fn update(&mut self, touches: &[TouchPoint]) -> Option<PinchUpdate> {
        let session = self.session.as_mut()?;
        if touches.len() < 2 {
            return None;
        }
        let (a, b) = session.find(touches)?;
        session.latest_centroid = centroid(&a, &b);
        session.latest_distance = distance(&a, &b);
        Some(PinchUpdate {
            centroid: session.latest_centroid,
            distance: session.latest_distance,
            ratio: session.distance_ratio(),
        })
    }

    /// Ends the session unless both tracked fingers are still present in `touches`.
    ///
    /// Matching is by identifier, so a list that still has two or more touches
    /// ends the session when one of them is a different finger.
    pub fn try_end(&mut self, touches: &[TouchPoint]) -> Option<PinchEnd> {
        let session = self.session?;
        if session.is_tracked_by(touches) {
            return None;
        }
        self.session = None;
        Some(PinchEnd {
            session,
            ratio: session.distance_ratio(),
        })
    }

    /// Drops the active session, if any, without producing an end result.
    pub fn cancel(&mut self) -> Option<PinchSession> {
        self.session.take()
    }

    /// Returns the active session.
    #[must_use]
    pub fn session(&self) -> Option<&PinchSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(d: f64) -> [TouchPoint; 2] {
        [TouchPoint::new(7, 100.0, 100.0), TouchPoint::new(9, 100.0 + d, 100.0)]
    }

    #[test]
    fn new_tracker_is_idle() {
        let pinch = PinchTracker::default();
        assert!(!pinch.is_pinching());
        assert!(pinch.session().is_none());
    }

    #[test]
    fn start_needs_two_touches() {
        let mut pinch = PinchTracker::default();
        assert_eq!(pinch.try_start(&[]), None);
        assert_eq!(pinch.try_start(&[TouchPoint::new(1, 0.0, 0.0)]), None);
        assert!(!pinch.is_pinching());
    }

    #[test]
    fn start_records_first_two_touches() {
        let mut pinch = PinchTracker::default();
        let touches = [
            TouchPoint::new(4, 0.0, 0.0),
            TouchPoint::new(5, 30.0, 40.0),
            TouchPoint::new(6, 500.0, 500.0),
        ];
        let session = pinch.try_start(&touches).unwrap();

        assert_eq!(session.touch_ids, [4, 5]);
        assert_eq!(session.start_centroid, Point::new(15.0, 20.0));
        assert_eq!(session.start_distance, 50.0);
        assert_eq!(session.latest_distance, 50.0);
        assert_eq!(session.distance_ratio(), 1.0);
    }

    #[test]
    fn start_while_pinching_is_ignored() {
        let mut pinch = PinchTracker::default();
        pinch.try_start(&pair(100.0)).unwrap();

        let other = [TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 10.0, 0.0)];
        assert_eq!(pinch.try_start(&other), None);
        assert_eq!(pinch.session().unwrap().touch_ids, [7, 9]);
    }

    #[test]
    fn update_reports_ratio_and_centroid() {
        let mut pinch = PinchTracker::default();
        pinch.try_start(&pair(100.0)).unwrap();

        let update = pinch.update(&pair(50.0)).unwrap();
        assert_eq!(update.distance, 50.0);
        assert_eq!(update.ratio, 0.5);
        assert_eq!(update.centroid, Point::new(125.0, 100.0));
        assert_eq!(pinch.session().unwrap().latest_distance, 50.0);
    }

    #[test]
    fn update_matches_by_identifier_not_position() {
        let mut pinch = PinchTracker::default();
        pinch.try_start(&pair(100.0)).unwrap();

        // Same fingers, reported in reverse order with an extra touch in front.
        let touches = [
            TouchPoint::new(3, 900.0, 900.0),
            TouchPoint::new(9, 300.0, 100.0),
            TouchPoint::new(7, 100.0, 100.0),
        ];
        let update = pinch.update(&touches).unwrap();
        assert_eq!(update.ratio, 2.0);
    }

    #[test]
    fn update_without_session_or_with_one_touch_is_noop() {
        let mut pinch = PinchTracker::default();
        assert_eq!(pinch.update(&pair(10.0)), None);

        pinch.try_start(&pair(100.0)).unwrap();
        assert_eq!(pinch.update(&[TouchPoint::new(7, 0.0, 0.0)]), None);
        assert_eq!(pinch.session().unwrap().latest_distance, 100.0);
    }

    #[test]
    fn update_with_untracked_finger_is_noop() {
        let mut pinch = PinchTracker::default();
        pinch.try_start(&pair(100.0)).unwrap();

        let touches = [TouchPoint::new(7, 0.0, 0.0), TouchPoint::new(11, 10.0, 0.0)];
        assert_eq!(pinch.update(&touches), None);
    }

    #[test]
    fn coincident_start_pins_ratio_to_one() {
        let mut pinch = PinchTracker::default();
        pinch.try_start(&pair(0.0)).unwrap();

        let update = pinch.update(&pair(80.0)).unwrap();
        assert_eq!(update.ratio, 1.0);
        assert!(update.ratio.is_finite());
    }

    #[test]
    fn distance_ratio_guards_non_finite_input() {
        assert_eq!(distance_ratio(10.0, 0.0), 1.0);
        assert_eq!(distance_ratio(10.0, f64::NAN), 1.0);
        assert_eq!(distance_ratio(f64::INFINITY, 10.0), 1.0);
        assert_eq!(distance_ratio(30.0, 10.0), 3.0);
    }

    #[test]
    fn end_keeps_session_while_both_fingers_remain() {
        let mut pinch = PinchTracker::default();
        pinch.try_start(&pair(100.0)).unwrap();

        // A third finger lifted; both tracked fingers are still down.
        assert_eq!(pinch.try_end(&pair(100.0)), None);
        assert!(pinch.is_pinching());
    }

    #[test]
    fn end_fires_when_one_tracked_finger_is_replaced() {
        let mut pinch = PinchTracker::default();
        pinch.try_start(&pair(100.0)).unwrap();
        pinch.update(&pair(200.0)).unwrap();

        // Still two touches, but only one of them is an original finger.
        let touches = [TouchPoint::new(7, 100.0, 100.0), TouchPoint::new(12, 0.0, 0.0)];
        let end = pinch.try_end(&touches).unwrap();

        assert_eq!(end.ratio, 2.0);
        assert_eq!(end.session.touch_ids, [7, 9]);
        assert!(!pinch.is_pinching());
    }

    #[test]
    fn end_without_move_finalizes_at_unit_ratio() {
        let mut pinch = PinchTracker::default();
        pinch.try_start(&pair(100.0)).unwrap();

        let end = pinch.try_end(&[]).unwrap();
        assert_eq!(end.ratio, 1.0);
    }

    #[test]
    fn end_without_session_is_noop() {
        let mut pinch = PinchTracker::default();
        assert_eq!(pinch.try_end(&[]), None);
    }

    #[test]
    fn cancel_drops_session_and_allows_restart() {
        let mut pinch = PinchTracker::default();
        pinch.try_start(&pair(100.0)).unwrap();

        assert!(pinch.cancel().is_some());
        assert!(!pinch.is_pinching());
        assert!(pinch.cancel().is_none());
        assert!(pinch.try_start(&pair(40.0)).is_some());
    }

    #[test]
    fn duplicate_identifiers_do_not_start() {
        let mut pinch = PinchTracker::default();
        let touches = [TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(1, 10.0, 0.0)];
        assert_eq!(pinch.try_start(&touches), None);
    }
}
