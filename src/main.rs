use std::env;
use std::sync::Arc;

use dbcat::catalog::{sample::StaticCatalog, CatalogStore};
use dbcat::config::AppConfig;
use dbcat::logging;
use dbcat::ui::CatalogClientUI;
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?.with_start_path(env::args().nth(1))?;
    logging::init(&config)?;

    let store: Arc<dyn CatalogStore> = Arc::new(StaticCatalog::new());
    info!("catalog loaded: {} databases", store.databases().len());

    let mut tui = CatalogClientUI::new(store, config);
    tui.run_ui()?;

    Ok(())
}
