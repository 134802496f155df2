//! Board layout and rendering: title, dice grid, counters, and button.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use tz_core::DICE_COUNT;

use crate::app::TuiApp;
use crate::die_face::{DIE_HEIGHT, DIE_WIDTH, DieFace};

/// Game title shown at the top of the board.
pub const TITLE: &str = "Tenzies";

/// One-line rules shown under the title.
pub const INSTRUCTIONS: &str = "Roll until all dice are the same. Click each die to freeze it at its current value between rolls.";

/// Dice per grid row.
pub const PER_ROW: usize = 5;

const DIE_GAP: u16 = 2;
const ROW_GAP: u16 = 1;
const BUTTON_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;

/// Width of the dice grid.
pub const GRID_WIDTH: u16 = PER_ROW as u16 * DIE_WIDTH + (PER_ROW as u16 - 1) * DIE_GAP;

const ROWS: u16 = DICE_COUNT.div_ceil(PER_ROW) as u16;
const GRID_HEIGHT: u16 = ROWS * DIE_HEIGHT + (ROWS - 1) * ROW_GAP;

/// Screen regions of every board element, shared by drawing and hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    /// Title line.
    pub title: Rect,
    /// Instructions paragraph.
    pub instructions: Rect,
    /// One rectangle per die, in display order.
    pub dice: [Rect; DICE_COUNT],
    /// Roll count and best score line.
    pub counters: Rect,
    /// Win or hint message line.
    pub message: Rect,
    /// Primary button.
    pub button: Rect,
}

impl BoardLayout {
    /// Lay the board out inside `area`.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::vertical([
            Constraint::Length(1),             // Title
            Constraint::Length(2),             // Instructions
            Constraint::Length(1),             // Gap
            Constraint::Length(GRID_HEIGHT),   // Dice
            Constraint::Length(1),             // Gap
            Constraint::Length(1),             // Counters
            Constraint::Length(1),             // Message
            Constraint::Length(BUTTON_HEIGHT), // Button
            Constraint::Min(0),
        ])
        .split(area);

        let grid = center_width(chunks[3], GRID_WIDTH);
        let dice = std::array::from_fn(|i| {
            let col = (i % PER_ROW) as u16;
            let row = (i / PER_ROW) as u16;
            Rect::new(
                grid.x + col * (DIE_WIDTH + DIE_GAP),
                grid.y + row * (DIE_HEIGHT + ROW_GAP),
                DIE_WIDTH,
                DIE_HEIGHT,
            )
            .intersection(grid)
        });

        Self {
            title: chunks[0],
            instructions: center_width(chunks[1], GRID_WIDTH),
            dice,
            counters: chunks[5],
            message: chunks[6],
            button: center_width(chunks[7], BUTTON_WIDTH),
        }
    }

    /// Index of the die under a screen cell.
    pub fn die_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.dice.iter().position(|r| r.contains(pos))
    }

    /// Whether a screen cell is on the primary button.
    pub fn button_hit(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }
}

/// A horizontally centred slice of `area`, at most `width` wide.
fn center_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

/// Draw the board and return the layout used.
pub fn draw_board(frame: &mut Frame, app: &TuiApp, area: Rect) -> BoardLayout {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = BoardLayout::compute(inner);
    let game = &app.game;

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bold());
    frame.render_widget(title, layout.title);

    let instructions = Paragraph::new(INSTRUCTIONS)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(instructions, layout.instructions);

    for (i, (die, rect)) in game.dice().iter().zip(layout.dice.iter()).enumerate() {
        let face = DieFace::new(die.value(), die.is_held()).focused(i == app.cursor);
        frame.render_widget(face, *rect);
    }

    let counters = Line::from(vec![
        Span::styled("Roll Count: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            game.roll_count().to_string(),
            Style::default().fg(Color::Yellow).bold(),
        ),
        Span::raw("    "),
        Span::styled("Best score: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            game.best().to_string(),
            Style::default().fg(Color::Green).bold(),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(counters).alignment(Alignment::Center),
        layout.counters,
    );

    if let Some(message) = &app.message {
        let line = Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(line, layout.message);
    }

    let button_color = if game.is_won() {
        Color::Green
    } else {
        Color::Yellow
    };
    let button = Paragraph::new(game.primary_label())
        .alignment(Alignment::Center)
        .style(Style::default().fg(button_color).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(button_color)),
        );
    frame.render_widget(button, layout.button);

    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_fit_in_two_rows() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.dice[0].y, layout.dice[4].y);
        assert_eq!(layout.dice[5].y, layout.dice[9].y);
        assert!(layout.dice[5].y > layout.dice[0].y);
        for rect in &layout.dice {
            assert_eq!(rect.width, DIE_WIDTH);
            assert_eq!(rect.height, DIE_HEIGHT);
        }
    }

    #[test]
    fn dice_do_not_overlap() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 30));
        for (i, a) in layout.dice.iter().enumerate() {
            for b in layout.dice.iter().skip(i + 1) {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn hit_testing() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 30));
        let third = layout.dice[2];
        assert_eq!(layout.die_at(third.x + 1, third.y + 1), Some(2));
        assert_eq!(layout.die_at(0, 0), None);
        assert!(layout.button_hit(layout.button.x + 1, layout.button.y + 1));
        assert!(!layout.button_hit(0, 0));
    }

    #[test]
    fn small_area_does_not_panic() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 10, 5));
        assert!(layout.dice.iter().all(|r| r.width <= 10));
    }
}
