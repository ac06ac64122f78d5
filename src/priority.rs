//! Body-part base priority table.
//!
//! Static, domain-assigned urgency ranks (lower = more urgent), held as an
//! immutable value and passed into the engine rather than read through
//! ambient global state. Body parts missing from the table resolve to a
//! fallback priority, so ranking keeps working when upstream configuration
//! introduces new parts before this table learns about them.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Priority assigned to body parts absent from the table.
pub const FALLBACK_PRIORITY: u32 = 10;

/// Default ranks, ordered by impact on daily living, gait and posture.
const DEFAULT_PRIORITIES: &[(&str, u32)] = &[
    ("허리", 1),
    ("무릎", 2),
    ("어깨", 3),
    ("목", 4),
    ("손목", 5),
    ("발목", 5),
    ("팔꿈치", 6),
    ("엉덩이", 6),
    ("등", 7),
    ("가슴", 8),
];

/// Immutable body part → base priority mapping.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    entries: FxHashMap<String, u32>,
    fallback: u32,
}

/// On-disk shape: explicit entries plus an optional fallback override.
#[derive(Debug, Deserialize)]
struct PriorityTableFile {
    entries: FxHashMap<String, u32>,
    #[serde(default)]
    fallback: Option<u32>,
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::from_entries(
            DEFAULT_PRIORITIES
                .iter()
                .map(|&(name, priority)| (name.to_string(), priority)),
        )
    }
}

impl PriorityTable {
    /// Build a table from (body part, priority) pairs with the standard fallback.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        Self {
            entries: entries.into_iter().collect(),
            fallback: FALLBACK_PRIORITY,
        }
    }

    /// Override the fallback priority returned for unknown body parts.
    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read priority table: {:?}", path))?;

        let file: PriorityTableFile = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse priority table JSON")?;

        Ok(Self {
            entries: file.entries,
            fallback: file.fallback.unwrap_or(FALLBACK_PRIORITY),
        })
    }

    /// Resolve a body part's base priority.
    ///
    /// Total function: unknown identifiers get the fallback, never an error.
    pub fn resolve(&self, body_part: &str) -> u32 {
        match self.entries.get(body_part) {
            Some(&priority) => priority,
            None => {
                debug!(body_part, fallback = self.fallback, "body part not in priority table");
                self.fallback
            }
        }
    }

    pub fn fallback(&self) -> u32 {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
