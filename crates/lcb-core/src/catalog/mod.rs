//! Problem catalog: typed records, ingestion of the remote dataset and the
//! read-only free/paid views built from it.

pub mod raw;
pub mod store;
pub mod types;

pub use raw::{RawEntry, RawPayload};
pub use store::{CatalogStore, SharedCatalog};
pub use types::{CatalogRecord, Difficulty, Tier};
