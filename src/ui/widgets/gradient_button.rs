//! Titled gradient button widget
//!
//! Combines a [`GradientRotation`] snapshot with the [`GradientButton`]
//! primitive and a title label.
//! This is a reusable widget that does not depend on application-specific types.
//!
//! # Design
//!
//! Uses generic Message type; the caller owns the rotation and ticks it.

use std::time::Instant;

use iced::Element;
use iced::font::Weight;
use iced::widget::text;

use crate::ui::animation::GradientRotation;
use crate::ui::primitives::GradientButton;
use crate::ui::theme;

/// Title font weight
const TITLE_WEIGHT: Weight = Weight::Semibold;

/// Gradient button showing the rotation's colors at `now`
pub fn gradient_button<'a, Message: Clone + 'a>(
    rotation: &GradientRotation,
    now: Instant,
    content: impl Into<Element<'a, Message>>,
) -> GradientButton<'a, Message> {
    GradientButton::new(content, rotation.colors(now))
}

/// Gradient button with a white semibold title
///
/// # Arguments
/// * `rotation` - Animation state providing the gradient colors
/// * `now` - Instant to sample the rotation at
/// * `title` - Button label
/// * `size` - Label font size
pub fn titled<'a, Message: Clone + 'a>(
    rotation: &GradientRotation,
    now: Instant,
    title: &'a str,
    size: f32,
) -> GradientButton<'a, Message> {
    let label = text(title)
        .size(size)
        .color(theme::TEXT_ON_GRADIENT)
        .font(iced::Font {
            weight: TITLE_WEIGHT,
            ..Default::default()
        });

    gradient_button(rotation, now, label)
}
