// Identifier value objects

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

pub const DEFAULT_INVENTORY_COUNT: u32 = 1000;
pub const MAX_INVENTORY_COUNT: i64 = 2000;

const INVENTORY_PATH_MARKER: &str = "steamcommunity.com/inventory/";

/// Already-resolved identity of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: i64,
    pub org: i64,
}

/// Join key between an inventory entry and its shared description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DescriptionKey {
    pub class_id: String,
    pub instance_id: String,
}

impl DescriptionKey {
    pub fn new(class_id: impl Into<String>, instance_id: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            instance_id: instance_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SteamId(String);

impl SteamId {
    /// Accepts either a bare id or a full inventory URL such as
    /// `https://steamcommunity.com/inventory/7656.../730/2`.
    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        let trimmed = input.trim();
        let candidate = if trimmed.contains(INVENTORY_PATH_MARKER) {
            let segments = trimmed.split('/').collect::<Vec<_>>();
            let segment = segments
                .iter()
                .position(|segment| *segment == "inventory")
                .and_then(|index| segments.get(index + 1))
                .copied()
                .unwrap_or("");
            segment.split(['?', '#']).next().unwrap_or("")
        } else {
            trimmed
        };
        if candidate.is_empty() {
            return Err(CatalogError::InvalidOwner("steam id is empty".to_string()));
        }
        if !candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(CatalogError::InvalidOwner(format!(
                "steam id '{}' contains invalid characters",
                candidate
            )));
        }
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SteamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Out-of-range counts (non-positive or above 2000) fall back to 1000.
pub fn clamp_inventory_count(count: i64) -> u32 {
    if count <= 0 || count > MAX_INVENTORY_COUNT {
        DEFAULT_INVENTORY_COUNT
    } else {
        count as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steam_id_accepts_bare_identifier() {
        let id = SteamId::parse("  76561198000000000 ").expect("parse");
        assert_eq!(id.as_str(), "76561198000000000");
    }

    #[test]
    fn steam_id_is_extracted_from_inventory_url() {
        let id = SteamId::parse("https://steamcommunity.com/inventory/76500000000000001/730/2?l=english")
            .expect("parse");
        assert_eq!(id.as_str(), "76500000000000001");
    }

    #[test]
    fn steam_id_rejects_empty_and_malformed_input() {
        assert!(matches!(SteamId::parse(""), Err(CatalogError::InvalidOwner(_))));
        assert!(matches!(SteamId::parse("   "), Err(CatalogError::InvalidOwner(_))));
        assert!(matches!(
            SteamId::parse("https://steamcommunity.com/inventory/"),
            Err(CatalogError::InvalidOwner(_))
        ));
        assert!(matches!(
            SteamId::parse("7656/../admin"),
            Err(CatalogError::InvalidOwner(_))
        ));
    }

    #[test]
    fn inventory_count_is_clamped() {
        assert_eq!(clamp_inventory_count(5000), 1000);
        assert_eq!(clamp_inventory_count(0), 1000);
        assert_eq!(clamp_inventory_count(-3), 1000);
        assert_eq!(clamp_inventory_count(2000), 2000);
        assert_eq!(clamp_inventory_count(1), 1);
    }
}
