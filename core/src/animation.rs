//! Animation curves.
//!
//! An [`Animation`] is an opaque token as far as sizing is concerned: the controller only forwards
//! it, and the [`DetentAnimator`](crate::tween::DetentAnimator) turns it into progress over time.

use serde::Deserialize;
use std::time::Duration;

/// Easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// No easing.
    Linear,
    /// Starts slow.
    EaseIn,
    /// Ends slow.
    EaseOut,
    /// Starts and ends slow.
    EaseInOut,
    /// A gentle curve that decelerates for most of its run; the default for sheet resizing.
    Smooth,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Smooth
    }
}

impl Easing {
    /// Maps linear progress in [0, 1] to eased progress in [0, 1].
    pub fn transform(self, fraction: f64) -> f64 {
        match self {
            Easing::Linear => fraction.max(0.).min(1.),
            Easing::EaseIn => cubic_bezier(0.42, 0., 1., 1., fraction),
            Easing::EaseOut => cubic_bezier(0., 0., 0.58, 1., fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0., 0.58, 1., fraction),
            Easing::Smooth => cubic_bezier(0.25, 0.1, 0.25, 1., fraction),
        }
    }
}

/// Evaluates a cubic Bézier timing curve with control points (x1, y1) and (x2, y2) at `x`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0. {
        return 0.;
    }
    if x >= 1. {
        return 1.;
    }

    let cx = 3. * x1;
    let bx = 3. * (x2 - x1) - cx;
    let ax = 1. - cx - bx;

    let cy = 3. * y1;
    let by = 3. * (y2 - y1) - cy;
    let ay = 1. - cy - by;

    let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
    let slope = |a: f64, b: f64, c: f64, t: f64| (3. * a * t + 2. * b) * t + c;

    // solve for the curve parameter t that yields x
    let mut t = x;
    let mut solved = false;
    for _ in 0..8 {
        let err = sample(ax, bx, cx, t) - x;
        if err.abs() < 1e-7 {
            solved = true;
            break;
        }
        let dx = slope(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - err / dx).max(0.).min(1.);
    }

    if !solved {
        // newton didn't converge (flat slope); bisect instead
        let (mut lo, mut hi) = (0., 1.);
        t = x;
        for _ in 0..24 {
            let err = sample(ax, bx, cx, t) - x;
            if err.abs() < 1e-7 {
                break;
            }
            if err > 0. {
                hi = t;
            } else {
                lo = t;
            }
            t = (lo + hi) / 2.;
        }
    }

    sample(ay, by, cy, t)
}

/// An animation curve token: an easing applied over a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub easing: Easing,
    pub duration: Duration,
}

impl Animation {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(350);

    pub fn new(easing: Easing, duration: Duration) -> Animation {
        Animation { easing, duration }
    }

    /// The default sheet resizing animation.
    pub fn smooth() -> Animation {
        Animation::new(Easing::Smooth, Self::DEFAULT_DURATION)
    }

    pub fn linear(duration: Duration) -> Animation {
        Animation::new(Easing::Linear, duration)
    }

    pub fn ease_in(duration: Duration) -> Animation {
        Animation::new(Easing::EaseIn, duration)
    }

    pub fn ease_out(duration: Duration) -> Animation {
        Animation::new(Easing::EaseOut, duration)
    }

    pub fn ease_in_out(duration: Duration) -> Animation {
        Animation::new(Easing::EaseInOut, duration)
    }

    /// Eased progress after `elapsed` time has passed.
    ///
    /// Zero-length animations are complete immediately.
    pub fn fraction(&self, elapsed: Duration) -> f64 {
        if self.duration == Duration::from_secs(0) || elapsed >= self.duration {
            return 1.;
        }
        let linear = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.transform(linear)
    }
}

impl Default for Animation {
    fn default() -> Self {
        Animation::smooth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASINGS: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Smooth,
    ];

    #[test]
    fn easings_hit_endpoints() {
        for easing in EASINGS.iter() {
            assert_eq!(easing.transform(0.), 0., "{:?} at 0", easing);
            assert_eq!(easing.transform(1.), 1., "{:?} at 1", easing);
            assert_eq!(easing.transform(-0.5), 0., "{:?} below 0", easing);
            assert_eq!(easing.transform(1.5), 1., "{:?} above 1", easing);
        }
    }

    #[test]
    fn easings_are_monotonic() {
        for easing in EASINGS.iter() {
            let mut prev = 0.;
            for i in 1..=100 {
                let v = easing.transform(i as f64 / 100.);
                assert!(v + 1e-6 >= prev, "{:?} decreased at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let a = Easing::EaseInOut.transform(0.25);
        let b = Easing::EaseInOut.transform(0.75);
        assert!((a + b - 1.).abs() < 1e-4, "{} + {} should be 1", a, b);
        assert!((Easing::EaseInOut.transform(0.5) - 0.5).abs() < 1e-4);
        assert!(Easing::EaseIn.transform(0.5) < 0.5);
        assert!(Easing::EaseOut.transform(0.5) > 0.5);
    }

    #[test]
    fn animation_fraction() {
        let anim = Animation::linear(Duration::from_millis(200));
        assert_eq!(anim.fraction(Duration::from_millis(0)), 0.);
        assert!((anim.fraction(Duration::from_millis(50)) - 0.25).abs() < 1e-9);
        assert_eq!(anim.fraction(Duration::from_millis(200)), 1.);
        assert_eq!(anim.fraction(Duration::from_secs(5)), 1.);

        let instant = Animation::linear(Duration::from_secs(0));
        assert_eq!(instant.fraction(Duration::from_secs(0)), 1.);

        assert_eq!(Animation::default(), Animation::smooth());
        assert_eq!(Animation::smooth().duration, Duration::from_millis(350));
    }
}
