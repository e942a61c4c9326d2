use async_trait::async_trait;
use tracing::{error, info};

use crate::{
    catalog::{CatalogStore, SharedCatalog},
    Result,
};

/// Where the problem dataset comes from (HTTP in production).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and ingest the dataset. Fails only if the payload as a whole is unusable.
    async fn fetch(&self) -> Result<CatalogStore>;
}

/// One-shot startup ingestion.
///
/// On failure the catalog stays unpublished and commands keep answering
/// "not ready"; the error is logged, never propagated to the transport.
pub async fn load_catalog(source: &dyn CatalogSource, shared: &SharedCatalog) -> bool {
    match source.fetch().await {
        Ok(store) => {
            info!(
                problems = store.total_count(),
                skipped = store.skipped(),
                "catalog ready"
            );
            shared.publish(store)
        }
        Err(e) => {
            error!("catalog ingestion failed: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Tier, errors::Error};

    struct Fixed(Option<CatalogStore>);

    #[async_trait]
    impl CatalogSource for Fixed {
        async fn fetch(&self) -> Result<CatalogStore> {
            self.0
                .clone()
                .ok_or_else(|| Error::External("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn publishes_fetched_catalog() {
        let shared = SharedCatalog::new();
        let source = Fixed(Some(crate::catalog::store::tests::sample_store()));
        assert!(load_catalog(&source, &shared).await);
        assert_eq!(shared.get().map(|s| s.size(Tier::Free)), Some(4));
    }

    #[tokio::test]
    async fn failed_fetch_leaves_catalog_unready() {
        let shared = SharedCatalog::new();
        assert!(!load_catalog(&Fixed(None), &shared).await);
        assert!(!shared.is_ready());
    }
}
