//! Top-level application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use tz_core::{DICE_COUNT, Game, WinReport};

use crate::board::{BoardLayout, PER_ROW};
use crate::confetti::Confetti;

/// Main application state for the terminal board.
pub struct TuiApp {
    /// The game being played.
    pub game: Game,
    /// Die under the keyboard cursor.
    pub cursor: usize,
    /// Win or hint message under the counters.
    pub message: Option<String>,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Celebration overlay.
    pub confetti: Confetti,
    /// Layout from the last draw, used for mouse hit-testing.
    pub layout: Option<BoardLayout>,
    /// Full screen area from the last draw.
    pub screen: Rect,
}

impl TuiApp {
    /// Create the app around a game.
    pub fn new(game: Game, seed: Option<u64>) -> Self {
        Self {
            game,
            cursor: 0,
            message: None,
            show_help: false,
            should_quit: false,
            confetti: Confetti::new(seed),
            layout: None,
            screen: Rect::default(),
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            // Any key closes the popup; q still quits.
            self.show_help = false;
            if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(' ') | KeyCode::Char('r') => self.primary(),
            KeyCode::Char('n') => self.restart(),
            KeyCode::Enter => self.toggle(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // 1-9 are dice 1-9, 0 is die 10.
                let digit = c.to_digit(10).unwrap_or(0) as usize;
                let index = if digit == 0 { DICE_COUNT - 1 } else { digit - 1 };
                self.cursor = index;
                self.toggle(index);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = (self.cursor + DICE_COUNT - 1) % DICE_COUNT;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = (self.cursor + 1) % DICE_COUNT;
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + PER_ROW) % DICE_COUNT;
            }
            _ => {}
        }
    }

    /// Handle a mouse event against the last drawn layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }
        let Some(layout) = &self.layout else {
            return;
        };
        if let Some(index) = layout.die_at(mouse.column, mouse.row) {
            self.cursor = index;
            self.toggle(index);
        } else if layout.button_hit(mouse.column, mouse.row) {
            self.primary();
        }
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        if self.confetti.is_active() {
            self.confetti.step(self.screen);
        }
    }

    /// The primary button: roll, or start over once won.
    pub fn primary(&mut self) {
        if self.game.is_won() {
            self.restart();
        } else {
            let report = self.game.roll();
            self.message = None;
            self.on_report(report);
        }
    }

    /// Start a new game and clear the celebration.
    pub fn restart(&mut self) {
        self.game.restart();
        self.confetti.clear();
        self.message = None;
        self.cursor = 0;
    }

    // A won board stays as it was until the next game.
    fn toggle(&mut self, index: usize) {
        if self.game.is_won() {
            return;
        }
        let report = self.game.toggle_hold_at(index);
        self.on_report(report);
    }

    fn on_report(&mut self, report: Option<WinReport>) {
        let Some(report) = report else {
            return;
        };
        self.message = Some(win_message(&report));
        self.confetti.start(self.screen);
    }
}

/// Text shown under the counters after a win.
pub fn win_message(report: &WinReport) -> String {
    let rolls = if report.rolls == 1 { "roll" } else { "rolls" };
    if report.new_best {
        format!("Tenzies! {} {rolls}, a new best!", report.rolls)
    } else {
        format!(
            "Tenzies! {} {rolls} (best: {}).",
            report.rolls, report.best
        )
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventKind;
    use tz_core::{BestScore, GameSession, MemoryStore, TenziesConfig};

    use super::*;

    fn new_app() -> TuiApp {
        let config = TenziesConfig::default().with_seed(42);
        let mut app = TuiApp::new(Game::new(Box::new(MemoryStore::new()), &config), Some(1));
        app.screen = Rect::new(0, 0, 80, 30);
        app.layout = Some(BoardLayout::compute(app.screen));
        app
    }

    fn press(app: &mut TuiApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut TuiApp, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// All dice held on one value except the last, after `rolls` rolls.
    fn nearly_won(app: &mut TuiApp, rolls: u32) {
        let config = TenziesConfig::default().with_seed(42);
        let dice = std::array::from_fn(|i| {
            let die = tz_core::Die::with_value(5).unwrap();
            if i + 1 < DICE_COUNT { die.toggled() } else { die }
        });
        let session = GameSession::from_parts(tz_core::DiceSet::from_dice(dice), rolls);
        app.game = Game::resume(Box::new(MemoryStore::new()), &config, session);
    }

    #[test]
    fn digit_keys_toggle_dice() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('3'));
        assert!(app.game.dice().get(2).unwrap().is_held());
        press(&mut app, KeyCode::Char('0'));
        assert!(app.game.dice().get(9).unwrap().is_held());
        assert_eq!(app.cursor, 9);
        press(&mut app, KeyCode::Char('3'));
        assert!(!app.game.dice().get(2).unwrap().is_held());
    }

    #[test]
    fn space_rolls() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game.roll_count(), 1);
    }

    #[test]
    fn cursor_moves_and_enter_toggles() {
        let mut app = new_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, 6);
        press(&mut app, KeyCode::Enter);
        assert!(app.game.dice().get(6).unwrap().is_held());
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, 5);
    }

    #[test]
    fn click_on_die_toggles_it() {
        let mut app = new_app();
        let rect = app.layout.as_ref().unwrap().dice[7];
        click(&mut app, rect.x + 2, rect.y + 2);
        assert!(app.game.dice().get(7).unwrap().is_held());
    }

    #[test]
    fn click_on_button_rolls() {
        let mut app = new_app();
        let button = app.layout.as_ref().unwrap().button;
        click(&mut app, button.x + 1, button.y + 1);
        assert_eq!(app.game.roll_count(), 1);
    }

    #[test]
    fn win_starts_confetti_and_new_game_clears_it() {
        let mut app = new_app();
        nearly_won(&mut app, 4);
        press(&mut app, KeyCode::Char('0'));
        assert!(app.game.is_won());
        assert!(app.confetti.is_active());
        assert_eq!(app.game.best(), BestScore::new(4));
        assert!(app.message.as_deref().unwrap().contains("new best"));

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.game.is_won());
        assert!(!app.confetti.is_active());
        assert_eq!(app.game.roll_count(), 0);
        assert!(app.message.is_none());
    }

    #[test]
    fn dice_are_locked_once_won() {
        let mut app = new_app();
        nearly_won(&mut app, 2);
        press(&mut app, KeyCode::Char('0'));
        assert!(app.game.is_won());

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        let rect = app.layout.as_ref().unwrap().dice[3];
        click(&mut app, rect.x + 2, rect.y + 2);

        assert!(app.game.is_won());
        assert!(app.game.dice().all_held());
    }

    #[test]
    fn help_popup_swallows_next_key() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.show_help);
        assert_eq!(app.game.roll_count(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = new_app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Press;
        app.handle_key(key);
        assert!(app.should_quit);
    }

    #[test]
    fn win_messages() {
        let report = WinReport {
            rolls: 1,
            best: BestScore::new(1),
            new_best: true,
        };
        assert_eq!(win_message(&report), "Tenzies! 1 roll, a new best!");
        let report = WinReport {
            rolls: 9,
            best: BestScore::new(4),
            new_best: false,
        };
        assert_eq!(win_message(&report), "Tenzies! 9 rolls (best: 4).");
    }
}
