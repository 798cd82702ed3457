//! Catalog load/save failures, kept separate from [`hexwar_contracts::EngineError`]
//! since they describe I/O and document-shape problems rather than
//! in-game rule violations.

use std::fmt;

/// An error raised while loading, validating, or saving a rules catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    Io(std::io::Error),
    /// The document was not well-formed JSON, or a field had the wrong shape.
    Parse(serde_json::Error),
    /// A damage distribution's probabilities did not sum to `1.0 ± 1e-6`.
    InvalidDistribution { attacker_type: i32, defender_type: i32, total: f64 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read rules catalog: {err}"),
            CatalogError::Parse(err) => write!(f, "failed to parse rules catalog: {err}"),
            CatalogError::InvalidDistribution {
                attacker_type,
                defender_type,
                total,
            } => write!(
                f,
                "damage distribution for attacker {attacker_type} vs defender {defender_type} sums to {total}, expected 1.0"
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Parse(err) => Some(err),
            CatalogError::InvalidDistribution { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}
