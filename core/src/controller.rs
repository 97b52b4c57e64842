//! Content-driven sheet height.

use crate::animation::Animation;
use crate::bounds::BoundsProvider;
use crate::config::SheetConfig;
use crate::presentation::Detent;
use cgmath::Vector2;

/// The size of a sheet's content, as reported after a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredContentSize {
    pub size: Vector2<f64>,
}

impl MeasuredContentSize {
    pub fn new(width: f64, height: f64) -> MeasuredContentSize {
        MeasuredContentSize {
            size: Vector2::new(width, height),
        }
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }
}

/// Whether a controller has a real height yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The stored height is the zero sentinel.
    Unmeasured,
    Measured,
}

/// What a measurement did to the stored height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// The height was set without animation.
    Immediate { height: f64 },
    /// The height changed and the change should be animated.
    Animated {
        from: f64,
        to: f64,
        animation: Animation,
    },
    /// The target equals the stored height.
    Unchanged,
}

/// Tracks a sheet's content height and turns it into the sheet's single detent.
///
/// Heights are clamped to `max_fraction` of the display height at the time of each measurement.
/// The first real measurement is applied directly so the sheet doesn't visibly grow into place;
/// later changes are animated.
///
/// "First" is detected with the zero sentinel: if content measures as exactly zero, the next
/// nonzero measurement is applied directly as well.
#[derive(Debug, Clone)]
pub struct SheetHeightController {
    current_height: f64,
    max_fraction: f64,
    animation: Animation,
}

impl Default for SheetHeightController {
    fn default() -> Self {
        SheetHeightController::new()
    }
}

impl SheetHeightController {
    pub fn new() -> SheetHeightController {
        SheetHeightController {
            current_height: 0.,
            max_fraction: SheetConfig::DEFAULT_MAX_FRACTION,
            animation: Animation::smooth(),
        }
    }

    pub fn from_config(config: &SheetConfig) -> SheetHeightController {
        SheetHeightController::new()
            .with_max_fraction(config.max_fraction)
            .with_animation(config.animation())
    }

    /// Sets the animation used for height changes after the first.
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    /// Sets the share of the display height the sheet may take.
    ///
    /// Values above 1 are clamped to 1; zero, negative values and NaN fall back to the default.
    pub fn with_max_fraction(mut self, max_fraction: f64) -> Self {
        self.max_fraction = if max_fraction > 0. {
            max_fraction.min(1.)
        } else {
            SheetConfig::DEFAULT_MAX_FRACTION
        };
        self
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn max_fraction(&self) -> f64 {
        self.max_fraction
    }

    pub fn phase(&self) -> Phase {
        if self.current_height == 0. {
            Phase::Unmeasured
        } else {
            Phase::Measured
        }
    }

    /// The stored height: the detent the presentation should rest at.
    pub fn current_detent(&self) -> f64 {
        self.current_height
    }

    pub fn detent(&self) -> Detent {
        Detent::new(self.current_height)
    }

    /// The height a measurement would resolve to with the given bounds.
    pub fn target_height(&self, height: f64, bounds: &dyn BoundsProvider) -> f64 {
        // negative or NaN input is a caller bug; treat it as empty content
        let height = if height > 0. { height } else { 0. };
        let limit = self.max_fraction * bounds.bound_height();
        height.min(limit)
    }

    /// Reacts to a new content height.
    ///
    /// `bounds` is queried once, now; the result is never reapplied to an older height.
    pub fn on_measurement(&mut self, height: f64, bounds: &dyn BoundsProvider) -> Transition {
        let target = self.target_height(height, bounds);

        if target == self.current_height {
            // also covers a zero target while still at the sentinel, so a running collapse
            // keeps animating
            Transition::Unchanged
        } else if self.current_height == 0. {
            self.current_height = target;
            tracing::trace!(height = target, "initial sheet height");
            Transition::Immediate { height: target }
        } else {
            let from = self.current_height;
            self.current_height = target;
            tracing::trace!(from, to = target, "sheet height changed");
            Transition::Animated {
                from,
                to: target,
                animation: self.animation,
            }
        }
    }

    pub fn on_content_size(
        &mut self,
        size: MeasuredContentSize,
        bounds: &dyn BoundsProvider,
    ) -> Transition {
        self.on_measurement(size.height(), bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;
    use std::time::Duration;

    fn screen(height: f64) -> Rect {
        Rect::from_size(390., height)
    }

    #[test]
    fn scenarios() {
        let bounds = screen(1000.);
        let mut controller = SheetHeightController::new();
        assert_eq!(controller.phase(), Phase::Unmeasured);

        // A: first measurement lands directly
        assert_eq!(
            controller.on_measurement(200., &bounds),
            Transition::Immediate { height: 200. }
        );
        assert_eq!(controller.current_detent(), 200.);
        assert_eq!(controller.phase(), Phase::Measured);

        // B: grows under animation
        assert_eq!(
            controller.on_measurement(500., &bounds),
            Transition::Animated {
                from: 200.,
                to: 500.,
                animation: Animation::smooth(),
            }
        );
        assert_eq!(controller.current_detent(), 500.);

        // C: clamped to 80% of the bound
        assert_eq!(
            controller.on_measurement(900., &bounds),
            Transition::Animated {
                from: 500.,
                to: 800.,
                animation: Animation::smooth(),
            }
        );
        assert_eq!(controller.detent(), Detent::new(800.));
    }

    #[test]
    fn unavailable_bounds_collapse() {
        let no_bounds: Option<Rect> = None;

        // D, first call: stays at the sentinel without animation
        let mut controller = SheetHeightController::new();
        assert_eq!(controller.on_measurement(500., &no_bounds), Transition::Unchanged);
        assert_eq!(controller.current_detent(), 0.);
        assert_eq!(controller.on_measurement(500., &no_bounds), Transition::Unchanged);
        assert_eq!(controller.phase(), Phase::Unmeasured);

        // D, later call: animates down to zero
        let mut controller = SheetHeightController::new();
        controller.on_measurement(300., &screen(1000.));
        match controller.on_measurement(300., &no_bounds) {
            Transition::Animated { from, to, .. } => {
                assert_eq!(from, 300.);
                assert_eq!(to, 0.);
            }
            other => panic!("expected an animated collapse, got {:?}", other),
        }
        assert_eq!(controller.phase(), Phase::Unmeasured);

        // still no bounds: the collapse target is unchanged
        assert_eq!(controller.on_measurement(310., &no_bounds), Transition::Unchanged);
        assert_eq!(controller.current_detent(), 0.);
    }

    #[test]
    fn clamp_holds_for_any_height() {
        let controller = SheetHeightController::new();
        for &bound in &[1., 320., 844., 1000., 2732.] {
            for i in 0..200 {
                let height = i as f64 * 17.5;
                let target = controller.target_height(height, &screen(bound));
                assert!(target <= 0.8 * bound, "{} > 0.8 * {}", target, bound);
                assert_eq!(target, height.min(0.8 * bound));
            }
        }
    }

    #[test]
    fn repeated_targets_do_not_reanimate() {
        let bounds = screen(1000.);
        let mut controller = SheetHeightController::new();
        controller.on_measurement(200., &bounds);
        assert!(matches!(
            controller.on_measurement(400., &bounds),
            Transition::Animated { .. }
        ));
        assert_eq!(controller.on_measurement(400., &bounds), Transition::Unchanged);
        assert_eq!(controller.on_measurement(400., &bounds), Transition::Unchanged);

        // both clamp to 800
        controller.on_measurement(950., &bounds);
        assert_eq!(controller.on_measurement(1200., &bounds), Transition::Unchanged);
    }

    #[test]
    fn bad_heights_are_treated_as_zero() {
        let bounds = screen(1000.);
        let controller = SheetHeightController::new();
        assert_eq!(controller.target_height(-40., &bounds), 0.);
        assert_eq!(controller.target_height(f64::NAN, &bounds), 0.);
        assert_eq!(controller.target_height(f64::INFINITY, &bounds), 800.);
    }

    #[test]
    fn zero_measurement_reenters_sentinel() {
        let bounds = screen(1000.);
        let mut controller = SheetHeightController::new();
        controller.on_measurement(0., &bounds);
        assert_eq!(controller.phase(), Phase::Unmeasured);
        assert_eq!(
            controller.on_measurement(250., &bounds),
            Transition::Immediate { height: 250. }
        );
    }

    #[test]
    fn bound_changes_do_not_reclamp() {
        let mut controller = SheetHeightController::new();
        controller.on_measurement(700., &screen(1000.));
        // the window shrank, but no measurement has arrived yet
        assert_eq!(controller.current_detent(), 700.);
        assert_eq!(
            controller.on_measurement(700., &screen(500.)),
            Transition::Animated {
                from: 700.,
                to: 400.,
                animation: Animation::smooth(),
            }
        );
    }

    #[test]
    fn configured_controller() {
        let config = SheetConfig {
            max_fraction: 0.5,
            ..SheetConfig::default()
        };
        let mut controller = SheetHeightController::from_config(&config)
            .with_animation(Animation::linear(Duration::from_millis(120)));
        assert_eq!(controller.max_fraction(), 0.5);
        controller.on_measurement(100., &screen(1000.));
        assert_eq!(
            controller.on_content_size(MeasuredContentSize::new(390., 900.), &screen(1000.)),
            Transition::Animated {
                from: 100.,
                to: 500.,
                animation: Animation::linear(Duration::from_millis(120)),
            }
        );
        assert_eq!(SheetHeightController::new().with_max_fraction(3.).max_fraction(), 1.);
        assert_eq!(SheetHeightController::new().with_max_fraction(0.).max_fraction(), 0.8);
        assert_eq!(SheetHeightController::new().with_max_fraction(-0.5).max_fraction(), 0.8);
        assert_eq!(
            SheetHeightController::new().with_max_fraction(f64::NAN).max_fraction(),
            0.8
        );
    }
}
