//! Animated gradient button for iced
//!
//! A button whose horizontal gradient endlessly rotates through a color
//! palette, cross-fading one cyclic shift into the next, with a translucent
//! highlight while pressed.
//!
//! - [`ui::animation::GradientRotation`] holds the animation state
//! - [`ui::primitives::GradientButton`] draws it and handles presses
//! - [`features::settings`] loads the demo's button configuration

pub mod features;
pub mod ui;
pub mod utils;

pub use ui::animation::{GradientAnimated, GradientRotation};
pub use ui::primitives::GradientButton;
