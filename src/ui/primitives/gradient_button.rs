//! Gradient button primitive
//!
//! A low-level widget that implements iced's `Widget` trait: a horizontal
//! gradient layer filling the bounds, a translucent highlight layer on top
//! while pressed, and a centered child element.
//!
//! # Design
//!
//! This is a primitive component: colors come in from the caller (usually a
//! [`GradientRotation`](crate::ui::animation::GradientRotation)) and it uses
//! generic Message types.

use std::f32::consts::FRAC_PI_2;

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::gradient::{self, Gradient};
use iced::{
    Background, Border, Color, Element, Length, Padding, Point, Radians, Rectangle, Size, Theme,
    mouse, touch,
};

use crate::ui::theme;

/// Maximum number of color stops iced renders in a linear gradient
pub const MAX_STOPS: usize = 8;

/// Press lifecycle of a button
///
/// A press only activates when released with the pointer inside. Dragging
/// outside removes the highlight, dragging back in restores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Press {
    pressed: bool,
    inside: bool,
}

impl Press {
    /// Begin a press if the pointer is inside; returns whether it began
    pub fn press(&mut self, inside: bool) -> bool {
        if inside {
            self.pressed = true;
            self.inside = true;
        }
        inside
    }

    /// Follow the pointer during a press
    pub fn track(&mut self, inside: bool) {
        if self.pressed {
            self.inside = inside;
        }
    }

    /// End the press; returns whether it counts as an activation
    pub fn release(&mut self, inside: bool) -> bool {
        let activated = self.pressed && inside;
        *self = Self::default();
        activated
    }

    /// Abort the press without activating
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Feed a runtime event through the press lifecycle
    ///
    /// `inside` is whether the pointer is over the button bounds.
    pub fn handle(&mut self, event: &Event, inside: bool) -> Outcome {
        let was_highlighted = self.is_highlighted();
        let mut outcome = Outcome::default();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                outcome.captured = self.press(inside);
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if self.pressed {
                    outcome.activated = self.release(inside);
                    outcome.captured = true;
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                self.track(inside);
            }
            Event::Touch(touch::Event::FingerLost { .. })
            | Event::Mouse(mouse::Event::CursorLeft) => {
                self.cancel();
            }
            _ => {}
        }

        outcome.redraw = self.is_highlighted() != was_highlighted;
        outcome
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the highlight overlay should be shown
    pub fn is_highlighted(&self) -> bool {
        self.pressed && self.inside
    }
}

/// What the widget should do after [`Press::handle`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Publish the press message
    pub activated: bool,
    /// Stop the event from reaching widgets underneath
    pub captured: bool,
    /// The highlight changed
    pub redraw: bool,
}

/// Widget tree state
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    press: Press,
}

/// Evenly spaced gradient stops for a color set
///
/// Sets larger than [`MAX_STOPS`] are sampled down evenly, always keeping
/// the first and last color.
pub fn gradient_stops(colors: &[Color]) -> Vec<(f32, Color)> {
    match colors.len() {
        0 => Vec::new(),
        1 => vec![(0.0, colors[0])],
        len => {
            let count = len.min(MAX_STOPS);
            let last = (count - 1) as f32;
            (0..count)
                .map(|i| {
                    let source = (i * (len - 1) + (count - 1) / 2) / (count - 1);
                    (i as f32 / last, colors[source])
                })
                .collect()
        }
    }
}

/// Background for a color set: solid for one color, left-to-right gradient otherwise
pub fn gradient_background(colors: &[Color]) -> Background {
    let stops = gradient_stops(colors);
    match stops.as_slice() {
        [] => Background::Color(Color::TRANSPARENT),
        [(_, color)] => Background::Color(*color),
        _ => {
            let linear = stops.iter().fold(
                gradient::Linear::new(Radians(FRAC_PI_2)),
                |linear, &(offset, color)| linear.add_stop(offset, color),
            );
            Background::Gradient(Gradient::Linear(linear))
        }
    }
}

/// An animated gradient button
pub struct GradientButton<'a, Message, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    colors: Vec<Color>,
    on_press: Option<Message>,
    width: Length,
    height: Length,
    padding: Padding,
    radius: f32,
}

impl<'a, Message, Renderer> GradientButton<'a, Message, Renderer> {
    /// Creates a new gradient button painting `colors`
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        colors: Vec<Color>,
    ) -> Self {
        Self {
            content: content.into(),
            colors,
            on_press: None,
            width: Length::Shrink,
            height: Length::Shrink,
            padding: Padding::new(8.0).left(16.0).right(16.0),
            radius: 0.0,
        }
    }

    /// Sets the message published on a completed tap
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Sets the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the padding around the content
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the corner radius; both layers are clipped to it
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer>
    for GradientButton<'a, Message, Renderer>
where
    Renderer: renderer::Renderer,
    Message: Clone,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);

        let content_max = Size::new(
            (limits.max().width - self.padding.left - self.padding.right).max(0.0),
            (limits.max().height - self.padding.top - self.padding.bottom).max(0.0),
        );
        let child_limits = layout::Limits::new(Size::ZERO, content_max);
        let child_node =
            self.content
                .as_widget_mut()
                .layout(&mut tree.children[0], renderer, &child_limits);
        let child_size = child_node.size();

        let intrinsic = Size::new(
            child_size.width + self.padding.left + self.padding.right,
            child_size.height + self.padding.top + self.padding.bottom,
        );
        let size = limits.resolve(self.width, self.height, intrinsic);

        // Center the content in the padded area
        let child_node = child_node.move_to(Point::new(
            self.padding.left
                + (size.width - self.padding.left - self.padding.right - child_size.width).max(0.0)
                    / 2.0,
            self.padding.top
                + (size.height - self.padding.top - self.padding.bottom - child_size.height)
                    .max(0.0)
                    / 2.0,
        ));

        layout::Node::with_children(size, vec![child_node])
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(child_layout) = layout.children().next() {
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                child_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }

        if shell.is_event_captured() {
            return;
        }

        let state = tree.state.downcast_mut::<State>();
        let outcome = state.press.handle(event, cursor.is_over(layout.bounds()));

        if outcome.activated {
            if let Some(message) = self.on_press.clone() {
                shell.publish(message);
            }
        }
        if outcome.captured {
            shell.capture_event();
        }
        if outcome.redraw {
            shell.request_redraw();
        }
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let border = Border::default().rounded(self.radius);

        // Gradient layer
        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border,
                ..Default::default()
            },
            gradient_background(&self.colors),
        );

        // Highlight layer
        if state.press.is_highlighted() {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    border,
                    ..Default::default()
                },
                Background::Color(theme::HIGHLIGHT_OVERLAY),
            );
        }

        if let Some(child_layout) = layout.children().next() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<GradientButton<'a, Message, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(button: GradientButton<'a, Message, Renderer>) -> Self {
        Element::new(button)
    }
}
