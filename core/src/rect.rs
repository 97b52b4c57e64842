//! Rectangles.

use cgmath::{Point2, Vector2, Zero};

/// A rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Rectangle origin.
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    /// Returns a zero-sized rectangle at the origin.
    pub fn zero() -> Rect {
        Rect {
            origin: Point2::new(0., 0.),
            size: Vector2::zero(),
        }
    }

    /// Returns a rectangle at the origin with the given width and height.
    pub fn from_size(width: f64, height: f64) -> Rect {
        Rect {
            origin: Point2::new(0., 0.),
            size: Vector2::new(width, height),
        }
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Returns true if both dimensions are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.size.x.is_finite()
            && self.size.y.is_finite()
            && self.size.x >= 0.
            && self.size.y >= 0.
    }
}

#[test]
fn test_rect_validity() {
    assert!(Rect::from_size(390., 844.).is_valid());
    assert!(Rect::zero().is_valid());
    assert!(!Rect::from_size(-1., 10.).is_valid());
    assert!(!Rect::from_size(10., f64::NAN).is_valid());
    assert!(!Rect::from_size(10., f64::INFINITY).is_valid());
    assert_eq!(Rect::from_size(390., 844.).height(), 844.);
}
