//! Demo application: a single screen hosting one gradient button

mod message;
mod state;
mod update;
mod view;

use iced::time::Instant;
use iced::{Task, Theme};

use gradient_button::features::Settings;

pub use message::Message;
pub use state::{App, ButtonState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(
            "Starting demo with {} palette color(s), animated: {}",
            settings.button.palette.len(),
            settings.button.animated
        );

        (Self::with_settings(settings, Instant::now()), Task::none())
    }

    /// Build the app from already loaded settings
    pub fn with_settings(settings: Settings, now: Instant) -> Self {
        let button = ButtonState::new(&settings, now);
        Self { settings, button }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self) -> String {
        "Gradient Button".to_string()
    }

    /// Frame subscription while the gradient has a step in flight
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if subscription_logic::needs_animation_subscription(self.button.rotation.needs_frames()) {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(rotation_needs_frames: bool) -> bool {
        rotation_needs_frames
    }
}
