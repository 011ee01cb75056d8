//! Application state definitions

use iced::time::Instant;

use gradient_button::features::Settings;
use gradient_button::ui::animation::GradientRotation;

/// Main application state
pub struct App {
    /// Loaded settings
    pub settings: Settings,
    /// The demo's gradient button
    pub button: ButtonState,
}

/// State behind the demo's gradient button
pub struct ButtonState {
    pub rotation: GradientRotation,
    /// Completed taps, for the log line
    pub taps: u64,
}

impl ButtonState {
    /// Build the rotation from settings, starting it if configured to animate
    pub fn new(settings: &Settings, now: Instant) -> Self {
        let mut rotation = GradientRotation::new(settings.button.palette());
        rotation.set_duration(settings.button.duration());
        if settings.button.animated {
            rotation.start(now);
        }

        Self { rotation, taps: 0 }
    }
}
