//! Frame-driven interpolation of the presented sheet height.

use crate::animation::Animation;
use std::time::Instant;

/// A single interpolation from one height to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub started: Instant,
    pub animation: Animation,
}

impl Tween {
    pub fn new(from: f64, to: f64, started: Instant, animation: Animation) -> Tween {
        Tween {
            from,
            to,
            started,
            animation,
        }
    }

    /// The interpolated value at `now`.
    ///
    /// Times before the start are treated as the start.
    pub fn value_at(&self, now: Instant) -> f64 {
        if self.is_finished(now) {
            return self.to;
        }
        let fraction = self.animation.fraction(self.elapsed(now));
        self.from + (self.to - self.from) * fraction
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.animation.duration
    }

    fn elapsed(&self, now: Instant) -> std::time::Duration {
        // saturates at zero for instants before the start
        now.saturating_duration_since(self.started)
    }
}

/// Holds the height currently shown by the presentation and moves it toward its target.
///
/// This is the animatable value behind a sheet's detent: immediate changes snap, animated changes
/// start a [`Tween`] that [`tick`](DetentAnimator::tick) advances once per frame.
#[derive(Debug, Clone, Default)]
pub struct DetentAnimator {
    presented: f64,
    tween: Option<Tween>,
}

impl DetentAnimator {
    pub fn new() -> DetentAnimator {
        DetentAnimator::default()
    }

    /// The height currently shown.
    pub fn presented(&self) -> f64 {
        self.presented
    }

    /// The height the animator is heading for.
    pub fn target(&self) -> f64 {
        self.tween.map_or(self.presented, |tween| tween.to)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Shows `height` immediately, dropping any running tween.
    pub fn snap_to(&mut self, height: f64) {
        self.tween = None;
        self.presented = height;
    }

    /// Starts moving toward `height`.
    ///
    /// A running tween is superseded; the new one starts from whatever is on screen at `now`.
    pub fn animate_to(&mut self, height: f64, animation: Animation, now: Instant) {
        let from = self.value_at(now);
        self.presented = from;
        if from == height {
            self.tween = None;
            return;
        }
        self.tween = Some(Tween::new(from, height, now, animation));
    }

    /// Advances the running tween to `now`.
    ///
    /// Returns the new presented height if it changed.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let tween = self.tween?;
        let value = tween.value_at(now);
        if tween.is_finished(now) {
            self.tween = None;
        }
        if value == self.presented {
            return None;
        }
        self.presented = value;
        Some(value)
    }

    fn value_at(&self, now: Instant) -> f64 {
        match self.tween {
            Some(tween) => tween.value_at(now),
            None => self.presented,
        }
    }
}
