//! The game controller: owns the session, the RNG, and the best score.
//!
//! Surfaces (terminal, window, line mode) call the operations here and
//! redraw from the accessors. The win check and best-score update run at
//! the end of every mutating call rather than on redraw.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::TenziesConfig;
use crate::dice::DiceSet;
use crate::die::DieId;
use crate::score::BestScore;
use crate::session::GameSession;
use crate::store::{ScoreStore, load_best, save_best};

/// Label of the primary button before the game is won.
pub const ROLL_LABEL: &str = "Roll";

/// Label of the primary button once the game is won.
pub const NEW_GAME_LABEL: &str = "New Game";

/// What happened when a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinReport {
    /// Rolls it took.
    pub rolls: u32,
    /// Best score after the win.
    pub best: BestScore,
    /// Whether this win set a new record.
    pub new_best: bool,
}

/// A running game with its score store.
pub struct Game {
    session: GameSession,
    best: BestScore,
    store: Box<dyn ScoreStore>,
    score_key: String,
    rng: StdRng,
}

impl Game {
    /// Start a game, reading the best score from `store`.
    pub fn new(store: Box<dyn ScoreStore>, config: &TenziesConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let best = load_best(store.as_ref(), &config.score_key);
        let session = GameSession::new(&mut rng);
        tracing::debug!(best = best.value(), store = %store.location(), "game started");

        Self {
            session,
            best,
            store,
            score_key: config.score_key.clone(),
            rng,
        }
    }

    /// Start a game from an existing session instead of a fresh deal.
    pub fn resume(
        store: Box<dyn ScoreStore>,
        config: &TenziesConfig,
        session: GameSession,
    ) -> Self {
        let mut game = Self::new(store, config);
        game.session = session;
        game
    }

    /// Roll every unheld die.
    pub fn roll(&mut self) -> Option<WinReport> {
        let before = self.session.roll_count();
        let report = self.apply(|session, rng| session.roll(rng));
        if self.session.roll_count() == before {
            tracing::debug!("roll ignored, every die is held");
        } else {
            tracing::debug!(rolls = self.session.roll_count(), dice = %self.session.dice(), "rolled");
        }
        report
    }

    /// Hold or release the die with the given id.
    pub fn toggle_hold(&mut self, id: DieId) -> Option<WinReport> {
        self.apply(|session, _| session.toggle_hold(id))
    }

    /// Hold or release the die at `index` (0-based, display order).
    pub fn toggle_hold_at(&mut self, index: usize) -> Option<WinReport> {
        self.apply(|session, _| session.toggle_hold_at(index))
    }

    /// Start a new game. The best score is kept.
    pub fn restart(&mut self) {
        self.session = self.session.clone().restart(&mut self.rng);
        tracing::debug!("new game");
    }

    /// The primary button: roll while playing, restart once won.
    pub fn primary_action(&mut self) -> Option<WinReport> {
        if self.session.is_won() {
            self.restart();
            None
        } else {
            self.roll()
        }
    }

    /// Label for the primary button in the current state.
    pub fn primary_label(&self) -> &'static str {
        if self.session.is_won() {
            NEW_GAME_LABEL
        } else {
            ROLL_LABEL
        }
    }

    /// Current session state.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Dice on the table.
    pub fn dice(&self) -> &DiceSet {
        self.session.dice()
    }

    /// Rolls taken this game.
    pub fn roll_count(&self) -> u32 {
        self.session.roll_count()
    }

    /// Whether this game is won.
    pub fn is_won(&self) -> bool {
        self.session.is_won()
    }

    /// Best score across games.
    pub fn best(&self) -> BestScore {
        self.best
    }

    fn apply(
        &mut self,
        transition: impl FnOnce(GameSession, &mut StdRng) -> GameSession,
    ) -> Option<WinReport> {
        let was_won = self.session.is_won();
        self.session = transition(self.session.clone(), &mut self.rng);
        if was_won || !self.session.is_won() {
            return None;
        }
        Some(self.record_win())
    }

    fn record_win(&mut self) -> WinReport {
        let rolls = self.session.roll_count();
        let new_best = self.best.improved_by(rolls);
        if new_best {
            match save_best(self.store.as_mut(), &self.score_key, rolls) {
                Ok(()) => self.best = load_best(self.store.as_ref(), &self.score_key),
                Err(e) => {
                    tracing::warn!(error = %e, "could not persist best score");
                    self.best = BestScore::new(rolls);
                }
            }
            tracing::info!(rolls, "new best score");
        } else {
            tracing::info!(rolls, best = self.best.value(), "won");
        }
        WinReport {
            rolls,
            best: self.best,
            new_best,
        }
    }
}
