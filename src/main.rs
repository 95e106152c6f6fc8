// Entrypoint for the interactive summarizer form.
// Loads `.env`, reads settings from the environment and hands them to the
// menu loop.

use dialogue_summarizer::{config::Settings, logging, ui::main_menu};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let settings = Settings::from_env()?;
    tracing::debug!(endpoint = ?settings.endpoint_url, "starting interactive form");

    // Blocks until the user picks "Exit".
    main_menu(&settings)?;
    Ok(())
}
