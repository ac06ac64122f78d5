//! Equipment availability filtering.
//!
//! "맨몸" (bodyweight) and "없음" (none) are interchangeable: selecting
//! either lets the user do any exercise tagged with either.

use rustc_hash::FxHashSet;

pub const BODYWEIGHT_ALIASES: &[&str] = &["맨몸", "없음"];

fn is_bodyweight(name: &str) -> bool {
    BODYWEIGHT_ALIASES.contains(&name)
}

/// User's available equipment set.
#[derive(Debug, Clone)]
pub struct EquipmentFilter {
    available: FxHashSet<String>,
}

impl EquipmentFilter {
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: FxHashSet<String> = available.into_iter().map(Into::into).collect();

        if set.iter().any(|name| is_bodyweight(name)) {
            for alias in BODYWEIGHT_ALIASES {
                set.insert((*alias).to_string());
            }
        }

        Self { available: set }
    }

    /// An exercise passes when it needs no equipment at all, can be done
    /// bodyweight, or at least one of its listed options is available.
    pub fn allows(&self, equipment: &[String]) -> bool {
        if equipment.is_empty() {
            return true;
        }

        equipment
            .iter()
            .any(|name| is_bodyweight(name) || self.available.contains(name))
    }
}
