//! Immediate-mode widgets: rectangles, buttons, and die faces.
//!
//! Drawing functions that take the mouse position return `true` when the
//! widget was clicked this frame; the caller decides what the click does.

use macroquad::prelude::*;

use tz_core::die::pip_grid;

use crate::theme::palette;

/// Font size used for body text on the canvas.
pub const TEXT_SIZE: f32 = 16.0;

/// A simple rectangular area for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect2 {
    /// Create a new rect.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point is inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    /// Centre point.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Draw a 1-pixel bordered rectangle (border inside bounds).
pub fn bordered_rect(area: &Rect2, fill: Color, border: Color) {
    draw_rectangle(area.x, area.y, area.w, area.h, fill);
    draw_rectangle_lines(area.x, area.y, area.w, area.h, 1.0, border);
}

/// Draw text horizontally centred on `cx` with its baseline at `y`.
pub fn draw_text_centered(text: &str, cx: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, y, size, color);
}

/// Draw a button and return true if it was clicked this frame.
pub fn draw_button(label: &str, area: &Rect2, mouse_x: f32, mouse_y: f32) -> bool {
    let hovered = area.contains(mouse_x, mouse_y);
    let clicked = hovered && is_mouse_button_pressed(MouseButton::Left);

    let (fill, border, text_color) = if clicked {
        (palette::DARK_GRAY, palette::WHITE, palette::YELLOW)
    } else if hovered {
        (palette::DARK_BLUE, palette::YELLOW, palette::YELLOW)
    } else {
        (palette::DARK_BLUE, palette::LIGHT_GRAY, palette::WHITE)
    };

    bordered_rect(area, fill, border);
    let (cx, cy) = area.center();
    draw_text_centered(label, cx, cy + TEXT_SIZE / 4.0, TEXT_SIZE, text_color);

    clicked
}

/// Fill colour of a die face; held dice are colour-shifted.
pub fn die_fill(held: bool) -> Color {
    if held { palette::GREEN } else { palette::WHITE }
}

/// Centres of the pips for `value` inside `area`.
pub fn pip_centers(value: u8, area: &Rect2) -> Vec<(f32, f32)> {
    let step_x = area.w / 4.0;
    let step_y = area.h / 4.0;
    let mut centers = Vec::new();
    for (row, cells) in pip_grid(value).iter().enumerate() {
        for (col, pip) in cells.iter().enumerate() {
            if *pip {
                centers.push((
                    area.x + step_x * (col as f32 + 1.0),
                    area.y + step_y * (row as f32 + 1.0),
                ));
            }
        }
    }
    centers
}

/// Draw one die and return true if it was clicked this frame.
pub fn draw_die(value: u8, held: bool, area: &Rect2, mouse_x: f32, mouse_y: f32) -> bool {
    let hovered = area.contains(mouse_x, mouse_y);
    let border = if hovered {
        palette::YELLOW
    } else {
        palette::LIGHT_GRAY
    };
    bordered_rect(area, die_fill(held), border);

    let radius = area.w / 12.0;
    for (x, y) in pip_centers(value, area) {
        draw_circle(x, y, radius, palette::DARK_BLUE);
    }

    hovered && is_mouse_button_pressed(MouseButton::Left)
}
