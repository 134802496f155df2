//! Configuration for a game: RNG seed and where the best score lives.

use std::path::PathBuf;

/// Key the best score is stored under.
pub const DEFAULT_SCORE_KEY: &str = "score";

/// File name of the score store inside the data directory.
pub const STORE_FILE: &str = "scores.json";

/// Environment variable naming the data directory.
pub const HOME_VAR: &str = "TENZIES_HOME";

/// Environment variable holding a fixed RNG seed.
pub const SEED_VAR: &str = "TENZIES_SEED";

/// Configuration for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenziesConfig {
    /// RNG seed for reproducible games; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Path of the score store file.
    pub store_path: PathBuf,
    /// Key the best score is stored under.
    pub score_key: String,
}

/// Ignores the environment: no seed, and the store at `.tenzies/scores.json`
/// relative to the working directory. Use [`TenziesConfig::from_env`] for the
/// `TENZIES_HOME` / `HOME` lookup.
impl Default for TenziesConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

impl TenziesConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!(value = %raw, "ignoring unparseable {SEED_VAR}");
                None
            }
        });
        let dir = lookup(HOME_VAR)
            .map(PathBuf::from)
            .or_else(|| lookup("HOME").map(|home| PathBuf::from(home).join(".tenzies")))
            .unwrap_or_else(|| PathBuf::from(".tenzies"));

        Self {
            seed,
            store_path: dir.join(STORE_FILE),
            score_key: DEFAULT_SCORE_KEY.to_string(),
        }
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the score store file.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Set the key the best score is stored under.
    pub fn with_score_key(mut self, key: impl Into<String>) -> Self {
        self.score_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let cfg = TenziesConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.score_key, "score");
        assert_eq!(cfg.store_path, PathBuf::from(".tenzies").join("scores.json"));
    }

    #[test]
    fn home_dir_fallback() {
        let cfg = TenziesConfig::from_vars(vars(&[("HOME", "/home/ada")]));
        assert_eq!(cfg.store_path, PathBuf::from("/home/ada/.tenzies/scores.json"));
    }

    #[test]
    fn tenzies_home_wins() {
        let cfg = TenziesConfig::from_vars(vars(&[
            ("HOME", "/home/ada"),
            ("TENZIES_HOME", "/var/lib/tenzies"),
        ]));
        assert_eq!(cfg.store_path, PathBuf::from("/var/lib/tenzies/scores.json"));
    }

    #[test]
    fn seed_from_vars() {
        let cfg = TenziesConfig::from_vars(vars(&[("TENZIES_SEED", "123")]));
        assert_eq!(cfg.seed, Some(123));

        let cfg = TenziesConfig::from_vars(vars(&[("TENZIES_SEED", "lots")]));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = TenziesConfig::default()
            .with_seed(7)
            .with_store_path("/tmp/s.json")
            .with_score_key("best");
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.store_path, PathBuf::from("/tmp/s.json"));
        assert_eq!(cfg.score_key, "best");
    }
}
