/*
player_input.rs

Copyright 2025 The Hexpath authors

This file is part of Hexpath.

Hexpath is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexpath is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexpath. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage the player's move requests.
//!
//! A move is not applied immediately: the player marker first slides from its cell to the target
//! cell. [`MoveController`] runs that animation and applies the move to the [`Game`] once, when
//! the animation completes. While an animation is running, new requests are dropped.
//!
//! On touch screens, [`TapFilter`] discards the second tap of a double tap.
//!
//! The terminal front end types direction indexes and uses [`MoveController::new`]. Pointer-based
//! front ends convert each click or tap with [`Layout::cell_at`], filter taps with
//! [`TapFilter`], and use the shorter animation of [`MoveController::touch`].

use log::debug;
use std::time::{Duration, Instant};

use crate::config::{ANIMATION_DURATION_MS, DOUBLE_TAP_MS, TOUCH_ANIMATION_DURATION_MS};
use crate::game::{Game, MoveError, MoveOutcome};
use crate::generator::hex::Coord;
use crate::layout::Layout;

/// Ignore the taps that follow the previous accepted tap too closely.
#[derive(Debug, Clone)]
pub struct TapFilter {
    window: Duration,
    last_tap: Option<Instant>,
}

impl Default for TapFilter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DOUBLE_TAP_MS))
    }
}

impl TapFilter {
    /// Create a [`TapFilter`] object.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_tap: None,
        }
    }

    /// Whether the tap at the given time must be processed.
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_tap {
            let elapsed: Duration = now.saturating_duration_since(last);
            if !elapsed.is_zero() && elapsed < self.window {
                debug!("Tap ignored {}ms after the previous one", elapsed.as_millis());
                return false;
            }
        }
        self.last_tap = Some(now);
        true
    }
}

/// Ease-out cubic: fast start, slow end.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p: f64 = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Marker animation between two cell centers.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAnimation {
    from: (f64, f64),
    to: (f64, f64),
    start: Instant,
    duration: Duration,
}

impl MoveAnimation {
    pub fn new(from: (f64, f64), to: (f64, f64), start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed: Duration = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Marker position at the given time.
    pub fn position(&self, now: Instant) -> (f64, f64) {
        let e: f64 = ease_out_cubic(self.progress(now));
        (
            self.from.0 + (self.to.0 - self.from.0) * e,
            self.from.1 + (self.to.1 - self.from.1) * e,
        )
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Move being animated.
#[derive(Debug, Clone)]
struct PendingMove {
    target: Coord,
    animation: MoveAnimation,
}

/// Serialize the move requests through the animation.
#[derive(Debug, Clone)]
pub struct MoveController {
    duration: Duration,
    pending: Option<PendingMove>,
}

impl Default for MoveController {
    fn default() -> Self {
        Self::new(Duration::from_millis(ANIMATION_DURATION_MS))
    }
}

impl MoveController {
    /// Create a [`MoveController`] object with the given animation duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending: None,
        }
    }

    /// Create a [`MoveController`] object with the shorter animation used on touch screens.
    pub fn touch() -> Self {
        Self::new(Duration::from_millis(TOUCH_ANIMATION_DURATION_MS))
    }

    /// Whether an animation is running.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start moving the player to the given cell.
    ///
    /// Return `false`, and do nothing, when an animation is already running or when the move is
    /// not allowed.
    pub fn request(&mut self, game: &Game, layout: &Layout, target: Coord, now: Instant) -> bool {
        if self.is_busy() {
            debug!("Move to {target} dropped: animation in progress");
            return false;
        }
        if let Err(e) = game.check_move(target) {
            debug!("Move to {target} ignored: {e}");
            return false;
        }
        let (Some(from), Some(to)) = (layout.center(game.position()), layout.center(target))
        else {
            return false;
        };
        self.pending = Some(PendingMove {
            target,
            animation: MoveAnimation::new(from, to, now, self.duration),
        });
        true
    }

    /// Marker position while an animation is running.
    pub fn marker_position(&self, now: Instant) -> Option<(f64, f64)> {
        self.pending.as_ref().map(|p| p.animation.position(now))
    }

    /// Advance the animation. When it completes, apply the move to the game and return the
    /// result.
    pub fn poll(
        &mut self,
        game: &mut Game,
        now: Instant,
    ) -> Option<Result<MoveOutcome, MoveError>> {
        if !self.pending.as_ref()?.animation.is_complete(now) {
            return None;
        }
        let pending: PendingMove = self.pending.take()?;
        Some(game.attempt_move(pending.target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::Grid;

    #[test]
    fn double_tap_is_ignored() {
        let t0 = Instant::now();
        let mut filter = TapFilter::default();
        assert!(filter.accept(t0));
        assert!(!filter.accept(t0 + Duration::from_millis(200)));
        // The ignored tap does not restart the window
        assert!(filter.accept(t0 + Duration::from_millis(600)));
        assert!(!filter.accept(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn simultaneous_tap_is_accepted() {
        let t0 = Instant::now();
        let mut filter = TapFilter::default();
        assert!(filter.accept(t0));
        assert!(filter.accept(t0));
    }

    #[test]
    fn easing_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn animation_interpolates_positions() {
        let t0 = Instant::now();
        let a = MoveAnimation::new((0.0, 0.0), (100.0, 40.0), t0, Duration::from_millis(300));
        assert_eq!(a.position(t0), (0.0, 0.0));
        assert!(!a.is_complete(t0 + Duration::from_millis(100)));
        let (x, _) = a.position(t0 + Duration::from_millis(150));
        assert!(x > 50.0 && x < 100.0);
        assert!(a.is_complete(t0 + Duration::from_millis(300)));
        assert_eq!(a.position(t0 + Duration::from_millis(900)), (100.0, 40.0));
    }

    #[test]
    fn move_is_applied_once_when_the_animation_completes() {
        let t0 = Instant::now();
        let mut game = Game::new(Grid::new(3), 3);
        let layout = Layout::new(game.grid(), 300.0, 300.0);
        let mut controller = MoveController::default();

        assert!(controller.request(&game, &layout, Coord::new(0, 1), t0));
        assert!(controller.is_busy());
        // A second request during the animation is dropped
        assert!(!controller.request(&game, &layout, Coord::new(-1, 2), t0));

        assert_eq!(controller.poll(&mut game, t0 + Duration::from_millis(100)), None);
        assert_eq!(game.position(), Coord::new(0, 2));
        assert!(controller.marker_position(t0).is_some());

        let outcome = controller.poll(&mut game, t0 + Duration::from_millis(300));
        assert_eq!(outcome, Some(Ok(MoveOutcome::Moved { gained: 0 })));
        assert_eq!(game.position(), Coord::new(0, 1));
        assert!(!controller.is_busy());
        assert_eq!(controller.poll(&mut game, t0 + Duration::from_millis(400)), None);
    }

    #[test]
    fn illegal_request_does_not_start_an_animation() {
        let t0 = Instant::now();
        let game = Game::new(Grid::new(3), 3);
        let layout = Layout::new(game.grid(), 300.0, 300.0);
        let mut controller = MoveController::touch();
        assert!(!controller.request(&game, &layout, Coord::new(0, 0), t0));
        assert!(!controller.is_busy());
    }
}
