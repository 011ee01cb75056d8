//! Application messages

use iced::time::Instant;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// The gradient button was tapped
    PrimaryAction,
    /// A frame was presented; advance the gradient rotation
    AnimationTick(Instant),
}
