//! # Body catalog
//!
//! Maps human-readable or provider-native body identifiers to canonical
//! body records. The catalog is built once from a YAML list at startup and
//! is immutable afterwards; every record is indexed under both its display
//! name and its SPICE name, so lookups succeed through either key space,
//! case-insensitively.
//!
//! An unresolved identifier is a configuration error: the failure carries
//! the sorted list of available names so the caller can report it directly.

use std::collections::HashMap;
use std::fs::File;
use std::sync::Arc;

use camino::Utf8Path;
use itertools::Itertools;
use serde::Deserialize;

use crate::helioplot_errors::HelioplotError;

/// One catalog body definition.
///
/// `name` is the display identifier, `spice_name` the ephemeris-provider
/// target. The physical fields are optional metadata carried for
/// downstream consumers; the analysis pipelines never read them.
#[derive(Debug, Clone, Deserialize)]
pub struct BodyRecord {
    pub name: String,
    pub spice_name: String,
    #[serde(default)]
    pub mu_km3_s2: Option<f64>,
    #[serde(default)]
    pub radius_km: Option<f64>,
}

/// Immutable dual-keyed body lookup table.
#[derive(Debug, Clone)]
pub struct BodyCatalog {
    index: HashMap<String, Arc<BodyRecord>>,
}

/// Canonical lookup key of a body identifier.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_ascii_uppercase()
}

impl BodyCatalog {
    /// Build a catalog from already-deserialized records.
    ///
    /// Records missing a name or a SPICE name are skipped. Fails with
    /// [`HelioplotError::EmptyCatalog`] when nothing usable remains.
    pub fn from_records(records: Vec<BodyRecord>) -> Result<Self, HelioplotError> {
        let mut index = HashMap::new();
        for record in records {
            if record.name.is_empty() || record.spice_name.is_empty() {
                continue;
            }
            let record = Arc::new(record);
            index.insert(normalize_identifier(&record.name), record.clone());
            index.insert(normalize_identifier(&record.spice_name), record);
        }
        if index.is_empty() {
            return Err(HelioplotError::EmptyCatalog(
                "no entries with both a name and a SPICE name".to_string(),
            ));
        }
        Ok(BodyCatalog { index })
    }

    /// Parse a catalog from a YAML body list.
    pub fn from_yaml_str(contents: &str) -> Result<Self, HelioplotError> {
        Self::from_records(serde_yaml::from_str(contents)?)
    }

    /// Load a catalog from a YAML file on disk.
    pub fn from_yaml_path(path: &Utf8Path) -> Result<Self, HelioplotError> {
        let reader = File::open(path)?;
        Self::from_records(serde_yaml::from_reader(reader)?).map_err(|err| match err {
            HelioplotError::EmptyCatalog(_) => HelioplotError::EmptyCatalog(path.to_string()),
            other => other,
        })
    }

    /// Resolve an identifier (display name or SPICE name) to its record.
    ///
    /// Lookup is case-insensitive. An unknown identifier yields
    /// [`HelioplotError::UnknownBody`] listing the available names.
    pub fn resolve(&self, identifier: &str) -> Result<Arc<BodyRecord>, HelioplotError> {
        self.index
            .get(&normalize_identifier(identifier))
            .cloned()
            .ok_or_else(|| HelioplotError::UnknownBody {
                identifier: identifier.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Sorted distinct display names of the catalog bodies.
    pub fn names(&self) -> Vec<&str> {
        self.index
            .values()
            .map(|record| record.name.as_str())
            .sorted()
            .dedup()
            .collect()
    }
}
