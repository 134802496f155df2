use tz_core::{FileStore, ScoreStore, TenziesConfig};

pub fn run(config: &TenziesConfig) -> Result<(), String> {
    let mut store = FileStore::open(&config.store_path);
    store
        .remove(&config.score_key)
        .map_err(|e| format!("failed to reset best score: {e}"))?;
    println!("Best score cleared ({})", store.location());
    Ok(())
}
