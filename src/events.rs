//! Events.

use perch_core::MeasuredContentSize;
use std::time::Instant;

/// Events delivered from the platform to a sheet host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetEvent {
    /// The sheet's content finished a layout pass.
    Measured(MeasuredContentSize),

    /// The display is about to draw a frame.
    Frame(Instant),

    /// The sheet was dismissed.
    Dismiss,
}

impl From<MeasuredContentSize> for SheetEvent {
    fn from(size: MeasuredContentSize) -> Self {
        SheetEvent::Measured(size)
    }
}
