//! Widget drawing one die face.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType};

use tz_core::die::pip_grid;

/// Width of a rendered die, borders included.
pub const DIE_WIDTH: u16 = 9;
/// Height of a rendered die, borders included.
pub const DIE_HEIGHT: u16 = 5;

const PIP: &str = "\u{25cf}";

/// A single die: face pips plus held styling.
///
/// Purely presentational. Clicks on the die's area are routed to the game
/// by the caller; the widget never changes state.
#[derive(Debug, Clone, Copy)]
pub struct DieFace {
    value: u8,
    held: bool,
    focused: bool,
}

impl DieFace {
    /// A die showing `value`.
    pub fn new(value: u8, held: bool) -> Self {
        Self {
            value,
            held,
            focused: false,
        }
    }

    /// Draw a heavier border (keyboard cursor).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Colour for the border and pips.
    pub fn color(&self) -> Color {
        if self.held { Color::Green } else { Color::White }
    }
}

impl Widget for DieFace {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_type = if self.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let style = Style::default().fg(self.color());
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(style);
        let inner = block.inner(area);
        block.render(area, buf);

        // Pips sit on every other column so the face reads square.
        for (row, cells) in pip_grid(self.value).iter().enumerate() {
            for (col, pip) in cells.iter().enumerate() {
                if !pip {
                    continue;
                }
                let x = inner.x + 1 + col as u16 * 2;
                let y = inner.y + row as u16;
                if x >= inner.right() || y >= inner.bottom() {
                    continue;
                }
                if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                    cell.set_symbol(PIP).set_style(style.bold());
                }
            }
        }
    }
}
