//! The game board: dice grid, counters, primary button, and confetti.

use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};
use macroquad::prelude::*;

use tz_core::{Game, WinReport};

use crate::theme::{CANVAS_H, CANVAS_W, mouse_canvas_position, palette};
use crate::widget::{Rect2, TEXT_SIZE, draw_button, draw_die, draw_text_centered};

/// Game title.
pub const TITLE: &str = "Tenzies";

/// Rules text, split over two lines to fit the canvas.
pub const INSTRUCTIONS: [&str; 2] = [
    "Roll until all dice are the same. Click each die to",
    "freeze it at its current value between rolls.",
];

const DIE_SIZE: f32 = 36.0;
const DIE_GAP: f32 = 8.0;
const PER_ROW: usize = 5;
const GRID_TOP: f32 = 76.0;

const FLAKE_COLORS: [Color; 6] = [
    palette::RED,
    palette::ORANGE,
    palette::YELLOW,
    palette::GREEN,
    palette::BLUE,
    palette::PINK,
];

/// Canvas area of the die at `index`.
pub fn die_area(index: usize) -> Rect2 {
    let grid_w = PER_ROW as f32 * DIE_SIZE + (PER_ROW as f32 - 1.0) * DIE_GAP;
    let x0 = (CANVAS_W - grid_w) / 2.0;
    let col = (index % PER_ROW) as f32;
    let row = (index / PER_ROW) as f32;
    Rect2::new(
        x0 + col * (DIE_SIZE + DIE_GAP),
        GRID_TOP + row * (DIE_SIZE + DIE_GAP),
        DIE_SIZE,
        DIE_SIZE,
    )
}

/// Canvas area of the primary button.
pub fn button_area() -> Rect2 {
    Rect2::new((CANVAS_W - 96.0) / 2.0, 206.0, 96.0, 24.0)
}

/// One confetti flake.
#[derive(Debug, Clone)]
struct Flake {
    x: f32,
    y: f32,
    speed: f32,
    sway: f32,
    phase: f32,
    color: Color,
}

/// Falling confetti over the whole canvas.
pub struct Confetti {
    flakes: Vec<Flake>,
    rng: StdRng,
}

impl Confetti {
    /// Create an idle confetti layer.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            flakes: Vec::new(),
            rng,
        }
    }

    /// Whether confetti is falling.
    pub fn is_active(&self) -> bool {
        !self.flakes.is_empty()
    }

    /// Scatter a burst above the canvas.
    pub fn start(&mut self) {
        self.flakes = (0..120)
            .map(|_| Flake {
                x: self.rng.random_range(0.0..CANVAS_W),
                y: -self.rng.random_range(0.0..CANVAS_H),
                speed: self.rng.random_range(30.0..90.0),
                sway: self.rng.random_range(4.0..14.0),
                phase: self.rng.random_range(0.0..std::f32::consts::TAU),
                color: FLAKE_COLORS[self.rng.random_range(0..FLAKE_COLORS.len())],
            })
            .collect();
    }

    /// Remove all flakes.
    pub fn clear(&mut self) {
        self.flakes.clear();
    }

    /// Advance by `dt` seconds; flakes that fall off the bottom wrap to the top.
    pub fn step(&mut self, dt: f32) {
        for f in &mut self.flakes {
            f.y += f.speed * dt;
            f.phase += dt * 3.0;
            if f.y > CANVAS_H {
                f.y -= CANVAS_H + 8.0;
                f.x = self.rng.random_range(0.0..CANVAS_W);
            }
        }
    }

    fn draw(&self) {
        for f in &self.flakes {
            let x = f.x + f.phase.sin() * f.sway;
            draw_rectangle(x, f.y, 3.0, 5.0, f.color);
        }
    }
}

/// Board screen state.
pub struct BoardScreen {
    /// The game being played.
    pub game: Game,
    /// Celebration overlay.
    pub confetti: Confetti,
    /// Win message under the counters.
    pub message: Option<String>,
}

/// What the player asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Toggle(usize),
    Primary,
}

impl BoardScreen {
    /// Create the board around a game.
    pub fn new(game: Game, seed: Option<u64>) -> Self {
        Self {
            game,
            confetti: Confetti::new(seed),
            message: None,
        }
    }

    /// Draw the board, apply this frame's clicks and keys, and advance the
    /// confetti. Returns `true` when the player asked to quit.
    pub fn frame(&mut self) -> bool {
        if is_key_pressed(KeyCode::Escape) {
            return true;
        }

        let (mx, my) = mouse_canvas_position();
        let mut action = None;

        draw_text_centered(TITLE, CANVAS_W / 2.0, 28.0, 28.0, palette::WHITE);
        for (i, line) in INSTRUCTIONS.iter().enumerate() {
            draw_text_centered(
                line,
                CANVAS_W / 2.0,
                46.0 + i as f32 * 12.0,
                14.0,
                palette::LIGHT_GRAY,
            );
        }

        for (i, die) in self.game.dice().iter().enumerate() {
            if draw_die(die.value(), die.is_held(), &die_area(i), mx, my) {
                action = Some(Action::Toggle(i));
            }
        }

        let counters = format!(
            "Roll Count: {}     Best score: {}",
            self.game.roll_count(),
            self.game.best()
        );
        draw_text_centered(&counters, CANVAS_W / 2.0, 178.0, TEXT_SIZE, palette::YELLOW);

        if let Some(message) = &self.message {
            draw_text_centered(message, CANVAS_W / 2.0, 196.0, TEXT_SIZE, palette::GREEN);
        }

        if draw_button(self.game.primary_label(), &button_area(), mx, my)
            || is_key_pressed(KeyCode::Space)
        {
            action = Some(Action::Primary);
        }

        if self.game.is_won() {
            self.confetti.step(get_frame_time());
            self.confetti.draw();
        }

        match action {
            Some(Action::Toggle(index)) => self.toggle(index),
            Some(Action::Primary) => self.primary(),
            None => {}
        }

        false
    }

    /// Roll, or start a new game once won.
    pub fn primary(&mut self) {
        if self.game.is_won() {
            self.game.restart();
            self.confetti.clear();
            self.message = None;
        } else {
            let report = self.game.roll();
            self.on_report(report);
        }
    }

    /// Hold or release a die. Ignored once the game is won.
    pub fn toggle(&mut self, index: usize) {
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
        self.message = Some(if report.new_best {
            format!("You won in {} rolls. New best!", report.rolls)
        } else {
            format!("You won in {} rolls.", report.rolls)
        });
        self.confetti.start();
    }
}

#[cfg(test)]
mod tests {
    use tz_core::{DICE_COUNT, DiceSet, Die, GameSession, MemoryStore, TenziesConfig};

    use super::*;

    fn layout_fits() -> bool {
        let areas: Vec<Rect2> = (0..DICE_COUNT).map(die_area).collect();
        let on_canvas = areas.iter().all(|a| {
            a.x >= 0.0 && a.y >= 0.0 && a.x + a.w <= CANVAS_W && a.y + a.h <= CANVAS_H
        });
        let apart = |a: &Rect2, b: &Rect2| {
            a.x + a.w <= b.x || b.x + b.w <= a.x || a.y + a.h <= b.y || b.y + b.h <= a.y
        };
        let disjoint = areas
            .iter()
            .enumerate()
            .all(|(i, a)| areas.iter().skip(i + 1).all(|b| apart(a, b)));
        on_canvas && disjoint
    }

    fn board() -> BoardScreen {
        let config = TenziesConfig::default().with_seed(3);
        BoardScreen::new(Game::new(Box::new(MemoryStore::new()), &config), Some(3))
    }

    #[test]
    fn dice_layout_fits_canvas() {
        assert!(layout_fits());
        let button = button_area();
        assert!(button.y > die_area(DICE_COUNT - 1).y + DIE_SIZE);
    }

    #[test]
    fn rows_of_five() {
        assert_eq!(die_area(0).y, die_area(4).y);
        assert!(die_area(5).y > die_area(4).y);
        assert_eq!(die_area(0).x, die_area(5).x);
    }

    #[test]
    fn primary_rolls_while_playing() {
        let mut board = board();
        board.primary();
        assert_eq!(board.game.roll_count(), 1);
    }

    #[test]
    fn winning_toggle_starts_confetti_and_locks_dice() {
        let config = TenziesConfig::default().with_seed(3);
        let dice = std::array::from_fn(|i| {
            let die = Die::with_value(6).unwrap();
            if i == 0 { die } else { die.toggled() }
        });
        let session = GameSession::from_parts(DiceSet::from_dice(dice), 7);
        let game = Game::resume(Box::new(MemoryStore::new()), &config, session);
        let mut board = BoardScreen::new(game, Some(3));

        board.toggle(0);
        assert!(board.game.is_won());
        assert!(board.confetti.is_active());
        assert!(board.message.as_deref().unwrap().contains("New best"));

        board.toggle(4);
        assert!(board.game.dice().all_held());

        board.primary();
        assert!(!board.game.is_won());
        assert!(!board.confetti.is_active());
        assert!(board.message.is_none());
    }

    #[test]
    fn confetti_wraps_and_clears() {
        let mut confetti = Confetti::new(Some(4));
        confetti.start();
        assert!(confetti.is_active());
        for _ in 0..600 {
            confetti.step(1.0 / 60.0);
        }
        assert!(confetti.flakes.iter().all(|f| f.y <= CANVAS_H));
        confetti.clear();
        assert!(!confetti.is_active());
    }
}
