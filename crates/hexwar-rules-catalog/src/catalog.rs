//! Terrain/unit definitions and the movement/attack matrices, plus the
//! JSON document format they're loaded from and saved back to (§6.1),
//! grounded in `lib/rules_loader.go`'s `LoadRulesEngineFromFile` /
//! `SaveRulesEngineToFile`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::damage::DamageProfile;
use crate::error::CatalogError;

/// A sentinel cost marking a terrain/unit pairing as impassable.
pub const IMPASSABLE: f64 = f64::INFINITY;

/// One terrain type's static properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainDefinition {
    pub name: String,
    #[serde(default)]
    pub defense_bonus: f64,
    #[serde(default)]
    pub base_move_cost: f64,
}

/// One unit type's static properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub name: String,
    pub base_health: i32,
    pub base_movement: i32,
    #[serde(default)]
    pub base_attack: i32,
    /// Nearest hex distance this unit type can attack from, inclusive.
    #[serde(default = "default_min_range")]
    pub min_range: i32,
    /// Farthest hex distance this unit type can attack from, inclusive.
    #[serde(default = "default_max_range")]
    pub max_range: i32,
}

fn default_min_range() -> i32 {
    1
}

fn default_max_range() -> i32 {
    1
}

/// The full catalog document: terrains, units, and the two matrices
/// that drive movement and combat resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesCatalog {
    #[serde(default)]
    pub terrains: HashMap<String, TerrainDefinition>,
    #[serde(default)]
    pub units: HashMap<String, UnitDefinition>,
    #[serde(rename = "movementMatrix", default)]
    pub movement_matrix: HashMap<String, HashMap<String, f64>>,
    #[serde(rename = "attackMatrix", default)]
    pub attack_matrix: HashMap<String, HashMap<String, DamageProfile>>,
}

impl RulesCatalog {
    /// Parses a catalog from a JSON document (§6.1), validating that
    /// every damage distribution sums to `1.0 ± 1e-6`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the document is malformed, or
    /// [`CatalogError::InvalidDistribution`] if a distribution's
    /// probabilities don't sum to `1.0`.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let catalog: RulesCatalog = serde_json::from_str(data)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads and validates a catalog from a JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file can't be read, or the
    /// same parse/validation errors as [`RulesCatalog::from_json`].
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Serializes this catalog back to pretty-printed JSON, the inverse
    /// of [`RulesCatalog::from_json`] (a round trip used by tooling that
    /// edits a catalog in memory and flushes it back out).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes and writes this catalog to a JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file can't be written.
    pub fn save_rules_catalog(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let data = self.to_json()?;
        std::fs::write(path, data)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (attacker_type, row) in &self.attack_matrix {
            for (defender_type, profile) in row {
                let total = profile.total_probability();
                if (total - 1.0).abs() > 1e-6 {
                    return Err(CatalogError::InvalidDistribution {
                        attacker_type: attacker_type.parse().unwrap_or(-1),
                        defender_type: defender_type.parse().unwrap_or(-1),
                        total,
                    });
                }
            }
        }
        Ok(())
    }

    /// The terrain definition for `terrain_type`, if known.
    #[must_use]
    pub fn terrain(&self, terrain_type: i32) -> Option<&TerrainDefinition> {
        self.terrains.get(&terrain_type.to_string())
    }

    /// The unit definition for `unit_type`, if known.
    #[must_use]
    pub fn unit(&self, unit_type: i32) -> Option<&UnitDefinition> {
        self.units.get(&unit_type.to_string())
    }

    /// The cost for `unit_type` to enter `terrain_type`. Unknown
    /// pairings, and pairings not present in the matrix, are treated
    /// as impassable per §6.1.
    #[must_use]
    pub fn movement_cost(&self, unit_type: i32, terrain_type: i32) -> f64 {
        self.movement_matrix
            .get(&unit_type.to_string())
            .and_then(|row| row.get(&terrain_type.to_string()))
            .copied()
            .unwrap_or(IMPASSABLE)
    }

    /// The damage profile for `attacker_type` attacking `defender_type`,
    /// if the matrix defines that pairing.
    #[must_use]
    pub fn damage_profile(&self, attacker_type: i32, defender_type: i32) -> Option<&DamageProfile> {
        self.attack_matrix
            .get(&attacker_type.to_string())
            .and_then(|row| row.get(&defender_type.to_string()))
    }
}
