//! Wire shape of the LeetCode `api/problems/all/` dataset.
//!
//! Entries are kept as raw JSON values until ingestion so one malformed entry
//! cannot fail the whole payload.

use serde::Deserialize;

use super::types::{CatalogRecord, Difficulty};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawPayload {
    #[serde(default)]
    pub num_total: Option<u64>,
    pub stat_status_pairs: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub stat: Option<RawStat>,
    #[serde(default)]
    pub difficulty: Option<RawDifficulty>,
    #[serde(default)]
    pub paid_only: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawStat {
    #[serde(default)]
    pub question_id: Option<u64>,
    #[serde(default, rename = "question__title")]
    pub title: Option<String>,
    #[serde(default, rename = "question__title_slug")]
    pub title_slug: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawDifficulty {
    #[serde(default)]
    pub level: Option<i64>,
}

/// Why a single entry was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedEntry {
    #[error("entry is not a valid problem object: {0}")]
    Shape(String),
    #[error("entry is missing `{0}`")]
    Missing(&'static str),
}

impl RawEntry {
    pub fn from_value(value: serde_json::Value) -> Result<Self, MalformedEntry> {
        serde_json::from_value(value).map_err(|e| MalformedEntry::Shape(e.to_string()))
    }

    /// Validate required fields and build the typed record.
    pub fn into_record(self) -> Result<CatalogRecord, MalformedEntry> {
        let stat = self.stat.ok_or(MalformedEntry::Missing("stat"))?;
        let id = stat
            .question_id
            .ok_or(MalformedEntry::Missing("stat.question_id"))?;
        let title = stat
            .title
            .filter(|s| !s.trim().is_empty())
            .ok_or(MalformedEntry::Missing("stat.question__title"))?;
        let title_slug = stat
            .title_slug
            .filter(|s| !s.trim().is_empty())
            .ok_or(MalformedEntry::Missing("stat.question__title_slug"))?;
        let level = self
            .difficulty
            .and_then(|d| d.level)
            .ok_or(MalformedEntry::Missing("difficulty.level"))?;

        Ok(CatalogRecord {
            id,
            title,
            title_slug,
            difficulty: Difficulty::from_level(level),
            // Only an explicit `false` makes a problem free.
            paid_only: self.paid_only.unwrap_or(true),
        })
    }
}
