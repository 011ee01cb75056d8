//! Message update handlers

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PrimaryAction => {
                self.button.taps += 1;
                tracing::debug!("Gradient button tapped ({} total)", self.button.taps);
            }
            Message::AnimationTick(now) => {
                self.button.rotation.tick(now);
            }
        }

        Task::none()
    }
}
