use macroquad::prelude::*;

use crate::application::Command;

/// Button UI component that issues a command when clicked
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    command: Command,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>, command: Command) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
            command,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub fn command(&self) -> Command {
        self.command
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let label = fit_label(&self.label, w - 10.0, 20);
        let text_size = measure_text(&label, None, 20, 1.0);
        draw_text(
            &label,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// The button's command, if it was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<Command> {
        (self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)).then_some(self.command)
    }
}

/// Truncate with an ellipsis until the label fits `max_width`
fn fit_label(label: &str, max_width: f32, font_size: u16) -> String {
    if measure_text(label, None, font_size, 1.0).width <= max_width {
        return label.to_owned();
    }
    let mut truncated = label.to_owned();
    while !truncated.is_empty()
        && measure_text(&format!("{}...", truncated), None, font_size, 1.0).width > max_width
    {
        truncated.pop();
    }
    format!("{}...", truncated)
}
