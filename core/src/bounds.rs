//! Display bounds.
//!
//! The controller never asks the platform for its window size directly; the current bounds are
//! handed to it on every measurement through a [`BoundsProvider`].

use crate::rect::Rect;
use parking_lot::RwLock;
use std::sync::Arc;

/// Supplies the bounds available to a sheet presentation (usually the current window or screen).
pub trait BoundsProvider {
    /// Returns the current display bounds, or `None` if there is no active window context.
    fn display_bounds(&self) -> Option<Rect>;

    /// The height of the current display bounds.
    ///
    /// Missing or malformed bounds are treated as zero, which collapses the sheet.
    fn bound_height(&self) -> f64 {
        match self.display_bounds() {
            Some(rect) if rect.is_valid() => rect.height(),
            _ => 0.,
        }
    }
}

impl BoundsProvider for Rect {
    fn display_bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl BoundsProvider for Option<Rect> {
    fn display_bounds(&self) -> Option<Rect> {
        *self
    }
}

impl<T: BoundsProvider + ?Sized> BoundsProvider for &T {
    fn display_bounds(&self) -> Option<Rect> {
        (**self).display_bounds()
    }
}

/// Bounds shared with the window thread.
///
/// Clones refer to the same storage; the window updates it on resize and the sheet reads it
/// fresh whenever a measurement arrives.
#[derive(Debug, Clone, Default)]
pub struct SharedBounds(Arc<RwLock<Option<Rect>>>);

impl SharedBounds {
    pub fn new(bounds: Option<Rect>) -> SharedBounds {
        SharedBounds(Arc::new(RwLock::new(bounds)))
    }

    /// Replaces the current bounds.
    pub fn set(&self, bounds: Option<Rect>) {
        *self.0.write() = bounds;
    }

    /// Marks the window context as gone.
    pub fn clear(&self) {
        self.set(None);
    }
}

impl BoundsProvider for SharedBounds {
    fn display_bounds(&self) -> Option<Rect> {
        *self.0.read()
    }
}
