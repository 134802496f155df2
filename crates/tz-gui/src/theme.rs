//! Colour palette, canvas size, and virtual canvas scaling.

use macroquad::prelude::*;

/// Virtual canvas width in pixels. The window scales this up.
pub const CANVAS_W: f32 = 480.0;
/// Virtual canvas height in pixels. The window scales this up.
pub const CANVAS_H: f32 = 270.0;

/// Colours used by the board.
pub mod palette {
    use macroquad::prelude::Color;

    /// Black letterbox bars.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Dark blue background and pips.
    pub const DARK_BLUE: Color = Color::new(0.114, 0.169, 0.326, 1.0);
    /// Dark gray for secondary text.
    pub const DARK_GRAY: Color = Color::new(0.373, 0.341, 0.310, 1.0);
    /// Light gray for borders.
    pub const LIGHT_GRAY: Color = Color::new(0.761, 0.765, 0.780, 1.0);
    /// White for unheld dice and primary text.
    pub const WHITE: Color = Color::new(1.0, 0.945, 0.910, 1.0);
    /// Red confetti.
    pub const RED: Color = Color::new(1.0, 0.0, 0.302, 1.0);
    /// Orange confetti.
    pub const ORANGE: Color = Color::new(1.0, 0.639, 0.0, 1.0);
    /// Yellow for highlights.
    pub const YELLOW: Color = Color::new(1.0, 0.925, 0.153, 1.0);
    /// Green for held dice.
    pub const GREEN: Color = Color::new(0.0, 0.894, 0.212, 1.0);
    /// Blue confetti.
    pub const BLUE: Color = Color::new(0.161, 0.678, 1.0, 1.0);
    /// Pink confetti.
    pub const PINK: Color = Color::new(1.0, 0.467, 0.659, 1.0);
}

/// Scale and letterbox offset that fit the canvas into a window.
pub fn fit_canvas(screen_w: f32, screen_h: f32) -> (f32, f32, f32) {
    let scale = (screen_w / CANVAS_W).min(screen_h / CANVAS_H);
    let offset_x = (screen_w - CANVAS_W * scale) / 2.0;
    let offset_y = (screen_h - CANVAS_H * scale) / 2.0;
    (scale, offset_x, offset_y)
}

/// Map a window position to canvas coordinates.
pub fn to_canvas(x: f32, y: f32, screen_w: f32, screen_h: f32) -> (f32, f32) {
    let (scale, offset_x, offset_y) = fit_canvas(screen_w, screen_h);
    ((x - offset_x) / scale, (y - offset_y) / scale)
}

/// Set up a `Camera2D` that maps the virtual canvas to the current window.
pub fn setup_virtual_canvas() {
    let (scale, offset_x, offset_y) = fit_canvas(screen_width(), screen_height());
    set_camera(&Camera2D {
        zoom: vec2(2.0 / CANVAS_W, 2.0 / CANVAS_H),
        target: vec2(CANVAS_W / 2.0, CANVAS_H / 2.0),
        viewport: Some((
            offset_x as i32,
            offset_y as i32,
            (CANVAS_W * scale) as i32,
            (CANVAS_H * scale) as i32,
        )),
        ..Default::default()
    });
}

/// Mouse position in virtual canvas coordinates.
pub fn mouse_canvas_position() -> (f32, f32) {
    let (mx, my) = mouse_position();
    to_canvas(mx, my, screen_width(), screen_height())
}
