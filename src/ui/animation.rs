//! Animation system for the gradient button
//!
//! Timing comes from `iced::animation`, driven by explicit instants so the
//! host application decides when frames arrive.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gradient_button::ui::animation::GradientRotation;
//!
//! let mut rotation = GradientRotation::animated(palette, Instant::now());
//! // on every frame
//! rotation.tick(now);
//! let colors = rotation.colors(now);
//! ```

mod rotation;

pub use rotation::{
    DEFAULT_DURATION, GradientAnimated, GradientRotation, MAX_DURATION, MIN_DURATION,
    clamp_duration, normalize_palette, rotation_states,
};
