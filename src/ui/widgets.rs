//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They must not depend on the demo application.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level Widget trait implementations
//! - **Widgets** (this module): Composable UI patterns

pub mod gradient_button;

pub use gradient_button::{gradient_button, titled as titled_gradient_button};
