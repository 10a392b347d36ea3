use anyhow::Result;
use epochal::config::Config;
use epochal::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // `--init-config` writes a commented default config and exits
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
