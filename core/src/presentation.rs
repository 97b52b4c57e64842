//! Traits for presentation backends.

use core::fmt;

/// A discrete height at which a sheet may rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detent {
    pub height: f64,
}

impl Detent {
    pub fn new(height: f64) -> Detent {
        Detent { height }
    }
}

/// A platform's sheet presentation facility.
///
/// Animation happens on this side of the boundary: during a transition the backend receives one
/// detent per frame and only needs to re-render at the given height.
pub trait Presentation {
    /// Error type.
    type Error: fmt::Debug;

    /// Replaces the sheet's detent set with the single given detent.
    fn apply_detent(&mut self, detent: Detent) -> Result<(), Self::Error>;
}

impl<P: Presentation + ?Sized> Presentation for Box<P> {
    type Error = P::Error;

    fn apply_detent(&mut self, detent: Detent) -> Result<(), Self::Error> {
        (**self).apply_detent(detent)
    }
}
