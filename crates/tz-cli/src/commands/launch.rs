//! Launch the standalone TUI or GUI binaries.

use tz_core::TenziesConfig;

/// Run `binary` with the store and seed from `config`.
pub fn run(binary: &str, config: &TenziesConfig) -> Result<(), String> {
    let mut command = std::process::Command::new(binary);
    command.arg("--store").arg(&config.store_path);
    if let Some(seed) = config.seed {
        command.arg("--seed").arg(seed.to_string());
    }

    match command.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("{binary} exited with {s}")),
        Err(_) => Err(format!(
            "{binary} binary not found. Install it with: cargo install --path crates/{}",
            crate_dir(binary)
        )),
    }
}

fn crate_dir(binary: &str) -> &'static str {
    if binary.ends_with("gui") {
        "tz-gui"
    } else {
        "tz-tui"
    }
}
