//! Theme colors for the gradient button and its demo screen
//! Supports both dark and light modes

use iced::color;
use iced::widget::container;
use iced::{Background, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

// ============================================================================
// Gradient Button
// ============================================================================

/// Overlay drawn over the gradient while the button is pressed (20% black)
pub const HIGHLIGHT_OVERLAY: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.2);

/// Title color on top of the gradient (same for both modes)
pub const TEXT_ON_GRADIENT: Color = Color::WHITE;

/// Demo palette: violet to deep blue
pub const DEMO_PALETTE: [Color; 2] = [color!(0x8e2de2), color!(0x4a00e0)];

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}
