mod app;
mod config;
mod error;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;

    // Logs go to stderr so the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "aerodesk_tui={level},engine={level}",
            level = config.log_level
        ))
        .with_writer(std::io::stderr)
        .init();

    let mut app = app::App::new(config)?;
    app.run()?;
    Ok(())
}
