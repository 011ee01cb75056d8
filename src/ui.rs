//! UI module for the gradient button
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Animation** (`animation`): Palette rotation state and timing
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): Composable UI patterns without business logic

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;
