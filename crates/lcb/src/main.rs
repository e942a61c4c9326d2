use std::sync::Arc;

use lcb_core::{
    catalog::SharedCatalog, config::Config, ports::load_catalog, selector::ThreadRandom,
};
use lcb_leetcode::LeetCodeClient;

#[tokio::main]
async fn main() -> Result<(), lcb_core::Error> {
    lcb_core::logging::init("lcb")?;

    let cfg = Arc::new(Config::load()?);
    let catalog = Arc::new(SharedCatalog::new());

    // Ingest in the background so the bot comes online immediately.
    let client = LeetCodeClient::new(cfg.leetcode_api_url.clone(), cfg.fetch_timeout)?;
    {
        let catalog = catalog.clone();
        tokio::spawn(async move {
            load_catalog(&client, &catalog).await;
        });
    }

    lcb_telegram::router::run_polling(cfg, catalog, Arc::new(ThreadRandom))
        .await
        .map_err(|e| lcb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
