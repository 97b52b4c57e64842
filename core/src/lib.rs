//! Sheet sizing.
//!
//! # Conceptual overview
//! Perch sizes bottom sheets to fit their content. It doesn't lay anything out or draw anything
//! itself: the host reports how tall the sheet's content turned out to be, and perch tells the
//! host's sheet presentation which height to rest at.
//!
//! ## Measurements
//! Every time the content finishes a layout pass, its size is reported as a
//! [`MeasuredContentSize`]. Measurements can arrive as often as the content changes (text
//! reflowing, list items appearing) so handling one has to be cheap.
//!
//! ## Heights and detents
//! A [`SheetHeightController`] turns a measured height into a target height by clamping it to a
//! share (80% by default) of the current display height. The display height is never cached: it
//! comes from a [`BoundsProvider`] at the time of each measurement, and if there is no display
//! to ask, the bound is zero and the sheet collapses.
//!
//! The stored height is the sheet's one and only [`Detent`]. The first measurement sets it
//! directly so the sheet appears at its size; later changes are animated.
//!
//! ## Animation
//! Presentation backends don't animate on their own. A [`DetentAnimator`] holds the height that
//! is actually on screen and a [`Tween`] toward the stored height, and the host advances it once
//! per frame, handing each intermediate height to the [`Presentation`]. A new target arriving
//! mid-animation simply starts a new tween from wherever the sheet currently is.
//!
//! ## Failure
//! Sizing can't fail. Bad measurements and missing bounds degrade to zero; the worst outcome is
//! a sheet at the wrong size. The only errors in this crate come from loading a
//! [`SheetConfig`].

pub mod animation;
pub mod bounds;
pub mod config;
pub mod controller;
pub mod error;
pub mod presentation;
mod rect;
pub mod tween;

pub use animation::{Animation, Easing};
pub use bounds::{BoundsProvider, SharedBounds};
pub use config::{AnimationConfig, SheetConfig};
pub use controller::{MeasuredContentSize, Phase, SheetHeightController, Transition};
pub use error::ConfigError;
pub use presentation::{Detent, Presentation};
pub use rect::Rect;
pub use tween::{DetentAnimator, Tween};
