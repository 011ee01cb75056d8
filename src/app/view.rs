//! Application view rendering

use iced::time::Instant;
use iced::widget::container;
use iced::{Element, Fill, Padding};

use super::App;
use super::message::Message;
use gradient_button::ui::{theme, widgets};

impl App {
    /// Build the demo screen: one gradient button, vertically centered
    pub fn view(&self) -> Element<'_, Message> {
        let config = &self.settings.button;

        let button = widgets::titled_gradient_button(
            &self.button.rotation,
            Instant::now(),
            &config.title,
            config.title_size,
        )
        .on_press(Message::PrimaryAction)
        .width(Fill)
        .height(config.height)
        .radius(config.corner_radius);

        container(button)
            .width(Fill)
            .height(Fill)
            .center_y(Fill)
            .padding(
                Padding::new(0.0)
                    .left(config.horizontal_inset)
                    .right(config.horizontal_inset),
            )
            .style(theme::main_content)
            .into()
    }
}
