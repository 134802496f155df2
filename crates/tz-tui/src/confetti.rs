//! Falling confetti drawn over the whole screen while a game is won.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::prelude::*;

const GLYPHS: &[&str] = &["*", "+", "\u{2022}", "\u{25c6}", "~", "\u{2736}"];
const COLORS: &[Color] = &[
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    fall: f32,
    drift: f32,
    glyph: &'static str,
    color: Color,
}

/// Confetti particles and the RNG that scatters them.
pub struct Confetti {
    particles: Vec<Particle>,
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
            particles: Vec::new(),
            rng,
        }
    }

    /// Whether confetti is currently falling.
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Number of particles in flight.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether there are no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Scatter a fresh burst above `area`.
    pub fn start(&mut self, area: Rect) {
        let count = (area.width as usize * area.height as usize / 12).max(12);
        let width = area.width.max(1) as f32;
        let height = area.height.max(1) as f32;
        self.particles = (0..count)
            .map(|_| Particle {
                x: self.rng.random_range(0.0..width),
                y: -self.rng.random_range(0.0..height),
                fall: self.rng.random_range(0.3..1.2),
                drift: self.rng.random_range(-0.3..0.3),
                glyph: GLYPHS[self.rng.random_range(0..GLYPHS.len())],
                color: COLORS[self.rng.random_range(0..COLORS.len())],
            })
            .collect();
    }

    /// Remove all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Advance one frame. Particles leaving the bottom re-enter at the top,
    /// so the effect lasts until [`Confetti::clear`].
    pub fn step(&mut self, area: Rect) {
        let width = area.width.max(1) as f32;
        let height = area.height.max(1) as f32;
        for p in &mut self.particles {
            p.y += p.fall;
            p.x = (p.x + p.drift).rem_euclid(width);
            if p.x >= width {
                p.x = 0.0;
            }
            if p.y >= height {
                p.y -= height;
                p.x = self.rng.random_range(0.0..width);
            }
        }
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for p in &self.particles {
            if p.y < 0.0 || p.x < 0.0 {
                continue;
            }
            let x = area.x + p.x as u16;
            let y = area.y + p.y as u16;
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                cell.set_symbol(p.glyph).set_fg(p.color);
            }
        }
    }
}
