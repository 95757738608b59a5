use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::sync::Arc;
use todos::config::Config;
use todos::constants::ERROR_NOT_A_TERMINAL;
use todos::service::{LocalService, Services};
use todos::storage::LocalStorage;
use todos::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        eprintln!("{}", ERROR_NOT_A_TERMINAL);
        std::process::exit(1);
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let storage = Arc::new(LocalStorage::open(&config.storage).await?);
    let service = Arc::new(LocalService::new(storage));
    let services = Services::new(service.clone(), service);

    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
    let project = services
        .projects
        .get_or_create_project(&cwd)
        .await
        .with_context(|| format!("Failed to open project for {}", cwd.display()))?;

    ui::run_app(&config, services, project).await?;
    log::info!("Exited cleanly");

    Ok(())
}
