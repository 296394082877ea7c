//! Career catalog: the immutable collection of career profiles the engine
//! ranks against. Loaded once at startup, validated at the boundary, and
//! treated as read-only for the rest of the process lifetime.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EngineError;
use crate::normalize::normalize_token;

/// Embedded default catalog data. Consumers can substitute their own catalog
/// via [`CareerCatalog::from_json`].
const BUILTIN_CAREERS: &str = include_str!("../data/careers.json");

/// Published growth outlook for a career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthOutlook {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Currency-agnostic annual salary band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

/// One career profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: String,
    pub title: String,
    /// Required skills in canonical display order. Matching treats them as a
    /// set of normalized tokens.
    pub skills: Vec<String>,
    pub description: String,
    pub salary: SalaryRange,
    pub growth: GrowthOutlook,
    /// Experience band, e.g. "2-5 years".
    pub experience_level: String,
}

impl CareerRecord {
    /// Required skills as normalized, deduplicated tokens in display order.
    pub fn skill_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        for skill in &self.skills {
            if let Some(token) = normalize_token(skill) {
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
        }
        tokens
    }
}

/// Ordered, immutable collection of career records.
///
/// Insertion order is load-bearing: it is the tie-break order for ranking and
/// the iteration order for vocabulary construction, so scoring stays
/// deterministic across runs.
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    records: Vec<CareerRecord>,
}

impl CareerCatalog {
    /// Validates and wraps a list of career records.
    ///
    /// Rejects blank ids or titles and duplicate ids; everything downstream
    /// assumes these hold and never re-validates.
    pub fn new(records: Vec<CareerRecord>) -> Result<Self, EngineError> {
        for (i, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(EngineError::Catalog(format!("record {i} has a blank id")));
            }
            if record.title.trim().is_empty() {
                return Err(EngineError::Catalog(format!(
                    "record '{}' has a blank title",
                    record.id
                )));
            }
        }
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id == record.id) {
                return Err(EngineError::Catalog(format!("duplicate id '{}'", record.id)));
            }
        }

        info!(records = records.len(), "career catalog loaded");
        Ok(Self { records })
    }

    /// Loads a catalog from a JSON array of career records.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let records: Vec<CareerRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// The embedded default catalog.
    pub fn builtin() -> Self {
        // Embedded asset, shape verified by tests.
        Self::from_json(BUILTIN_CAREERS).expect("embedded career catalog is valid")
    }

    /// Records in catalog insertion order.
    pub fn records(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
