//! Gradient button demo
//! One screen, one animated gradient button

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(390.0, 844.0))
        .antialiasing(true)
        .run()
}
