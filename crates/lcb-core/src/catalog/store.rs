use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::{info, warn};

use super::raw::{RawEntry, RawPayload};
use super::types::{CatalogRecord, Tier};
use crate::{errors::Error, Result};

/// Immutable snapshot of the problem catalog.
///
/// Built once from a single ingestion payload. `free` and `paid` partition
/// `all` by `paid_only` and keep the source order.
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    all: Vec<CatalogRecord>,
    free: Vec<CatalogRecord>,
    paid: Vec<CatalogRecord>,
    total_count: u64,
    skipped: usize,
}

impl CatalogStore {
    /// Best-effort ingestion: malformed or duplicate entries are logged and skipped.
    pub fn ingest(payload: RawPayload) -> Self {
        let mut all = Vec::with_capacity(payload.stat_status_pairs.len());
        let mut seen = HashSet::new();
        let mut skipped = 0usize;

        for (idx, value) in payload.stat_status_pairs.into_iter().enumerate() {
            let record = match RawEntry::from_value(value).and_then(RawEntry::into_record) {
                Ok(r) => r,
                Err(e) => {
                    warn!(index = idx, "skipping malformed catalog entry: {e}");
                    skipped += 1;
                    continue;
                }
            };
            if !seen.insert(record.id) {
                warn!(index = idx, id = record.id, "skipping duplicate catalog entry");
                skipped += 1;
                continue;
            }
            all.push(record);
        }

        let (paid, free): (Vec<_>, Vec<_>) = all.iter().cloned().partition(|r| r.paid_only);
        let total_count = payload.num_total.unwrap_or(all.len() as u64);

        info!(
            total = total_count,
            ingested = all.len(),
            free = free.len(),
            paid = paid.len(),
            skipped,
            "catalog ingested"
        );

        Self {
            all,
            free,
            paid,
            total_count,
            skipped,
        }
    }

    /// Decode a raw response body and ingest it.
    ///
    /// Fails only when the body as a whole is unreadable.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let payload: RawPayload = serde_json::from_slice(body)
            .map_err(|e| Error::Ingest(format!("unreadable payload: {e}")))?;
        Ok(Self::ingest(payload))
    }

    pub fn query(&self, tier: Tier) -> &[CatalogRecord] {
        match tier {
            Tier::All => &self.all,
            Tier::Free => &self.free,
            Tier::Paid => &self.paid,
        }
    }

    pub fn size(&self, tier: Tier) -> usize {
        self.query(tier).len()
    }

    /// Count reported by the remote source; informational only.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Write-once holder for the catalog.
///
/// Commands that arrive before ingestion finishes see `None` and answer
/// "not ready"; after `publish` reads are lock-free.
#[derive(Debug, Default)]
pub struct SharedCatalog {
    cell: OnceLock<CatalogStore>,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if a store was already published (the new one is dropped).
    pub fn publish(&self, store: CatalogStore) -> bool {
        let ok = self.cell.set(store).is_ok();
        if !ok {
            warn!("catalog already published; ignoring second ingestion");
        }
        ok
    }

    pub fn get(&self) -> Option<&CatalogStore> {
        self.cell.get()
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }
}
