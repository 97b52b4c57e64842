//! Content-sized bottom sheets.
//!
//! The sizing logic lives in `perch-core`; this crate connects it to a platform. A [`SheetHost`]
//! receives [`SheetEvent`]s (content measurements from a [`GeometryHandler`], frame ticks,
//! dismissal), and hands the resulting detents to a [`Presentation`] backend.

pub mod events;
mod host;
mod measure;

pub use events::SheetEvent;
pub use host::{SheetHost, SheetId};
pub use measure::GeometryHandler;
pub use perch_core::{
    Animation, BoundsProvider, ConfigError, Detent, Easing, MeasuredContentSize, Phase,
    Presentation, Rect, SharedBounds, SheetConfig, SheetHeightController, Transition,
};
