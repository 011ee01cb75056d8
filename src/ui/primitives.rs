//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `Widget` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not know about the demo app
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`GradientButton`] - Gradient-filled button with press highlight

pub mod gradient_button;

pub use gradient_button::{GradientButton, Outcome, Press, gradient_background, gradient_stops};
