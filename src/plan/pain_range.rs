//! Pain-level-range matching for exercise mappings.
//!
//! Mappings restrict exercises to pain bands expressed as "all", a single
//! level ("5") or an inclusive span ("1-2"). Serialized in that string
//! form.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PainLevelRange {
    All,
    Exact(u8),
    Between(u8, u8),
}

impl PainLevelRange {
    /// Parse the original string forms; empty input means no restriction.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }

        if let Some((low, high)) = raw.split_once('-') {
            let low = low.trim().parse().ok()?;
            let high = high.trim().parse().ok()?;
            return Some(Self::Between(low, high));
        }

        raw.parse().ok().map(Self::Exact)
    }

    pub fn matches(self, pain_level: u8) -> bool {
        match self {
            Self::All => true,
            Self::Exact(level) => pain_level == level,
            Self::Between(low, high) => (low..=high).contains(&pain_level),
        }
    }
}

impl fmt::Display for PainLevelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Exact(level) => write!(f, "{level}"),
            Self::Between(low, high) => write!(f, "{low}-{high}"),
        }
    }
}

impl From<PainLevelRange> for String {
    fn from(range: PainLevelRange) -> Self {
        range.to_string()
    }
}

impl TryFrom<String> for PainLevelRange {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| format!("invalid pain level range: '{raw}'"))
    }
}
