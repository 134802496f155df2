use comfy_table::{ContentArrangement, Table};

use tz_core::store::load_best;
use tz_core::{FileStore, ScoreStore, TenziesConfig};

pub fn run(config: &TenziesConfig) -> Result<(), String> {
    let store = FileStore::open(&config.store_path);
    let best = load_best(&store, &config.score_key);

    let shown = if best.is_set() {
        format!("{best} rolls")
    } else {
        format!("{best} (no record yet)")
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Best score".to_string(), shown]);
    table.add_row(vec!["Store".to_string(), store.location()]);
    println!("{table}");

    Ok(())
}
