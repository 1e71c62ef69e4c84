//! The score catalog: an immutable registry from score id to definition.
//!
//! A catalog can only be built through validation, so every catalog that
//! exists has unique ids, ordered non-overlapping bands, and a registered
//! formula behind every FORMULA definition.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::definition::{Method, ScoreDefinition};
use crate::error::CatalogError;
use crate::formulas;
use crate::scores;

/// Current catalog document version. Bump when the definition shape
/// changes incompatibly.
pub const CATALOG_VERSION: u32 = 1;

/// On-disk shape of a catalog resource.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Missing or 0 is read as version 1.
    #[serde(default)]
    pub catalog_version: u32,
    pub definitions: Vec<ScoreDefinition>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<ScoreDefinition>,
    index: HashMap<String, usize>,
}

static BUILTIN: LazyLock<Result<Catalog, CatalogError>> =
    LazyLock::new(|| Catalog::from_definitions(scores::builtin_definitions()));

impl Catalog {
    /// Validate `definitions` and build a catalog from them, keeping
    /// declaration order.
    pub fn from_definitions(definitions: Vec<ScoreDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(definitions.len());
        for (position, definition) in definitions.iter().enumerate() {
            validate(definition)?;
            if index.insert(definition.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateScore(definition.id.clone()));
            }
        }

        tracing::info!(scores = definitions.len(), "score catalog loaded");
        Ok(Self { definitions, index })
    }

    /// The catalog compiled into this build, constructed on first use.
    pub fn builtin() -> Result<&'static Catalog, &'static CatalogError> {
        LazyLock::force(&BUILTIN).as_ref()
    }

    /// Parse and validate a JSON catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        if document.catalog_version > CATALOG_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: document.catalog_version,
                supported: CATALOG_VERSION,
            });
        }
        Self::from_definitions(document.definitions)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "reading score catalog");
        Self::from_json_str(&contents)
    }

    pub fn lookup(&self, id: &str) -> Option<&ScoreDefinition> {
        self.index.get(id).map(|&position| &self.definitions[position])
    }

    /// All definitions in declaration order.
    pub fn definitions(&self) -> impl Iterator<Item = &ScoreDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn validate(definition: &ScoreDefinition) -> Result<(), CatalogError> {
    let score_id = &definition.id;
    if score_id.trim().is_empty() {
        return Err(CatalogError::EmptyId);
    }

    match &definition.method {
        Method::Criteria(spec) => {
            unique_ids(score_id, spec.criteria.iter().map(|c| c.id.as_str()))?;
        }
        Method::Categorical { groups } => {
            unique_ids(score_id, groups.iter().map(|g| g.id.as_str()))?;
            if let Some(empty) = groups.iter().find(|g| g.options.is_empty()) {
                return Err(CatalogError::EmptyGroup {
                    score_id: score_id.clone(),
                    group_id: empty.id.clone(),
                });
            }
        }
        Method::Formula { fields } => {
            unique_ids(score_id, fields.iter().map(|f| f.id.as_str()))?;
            if formulas::lookup(score_id).is_none() {
                return Err(CatalogError::MissingFormula(score_id.clone()));
            }
        }
        Method::Informational { .. } => {
            if !definition.bands.is_empty() {
                return Err(CatalogError::BandsOnInformational(score_id.clone()));
            }
        }
    }

    for (index, band) in definition.bands.iter().enumerate() {
        if !band.min.is_finite() || !band.max.is_finite() || band.min > band.max {
            return Err(CatalogError::InvalidBand {
                score_id: score_id.clone(),
                index,
                min: band.min,
                max: band.max,
            });
        }
    }
    for (index, pair) in definition.bands.windows(2).enumerate() {
        if pair[1].min <= pair[0].max {
            return Err(CatalogError::UnorderedBands {
                score_id: score_id.clone(),
                index: index + 1,
            });
        }
    }

    Ok(())
}

fn unique_ids<'a>(
    score_id: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateEntry {
                score_id: score_id.to_string(),
                entry_id: id.to_string(),
            });
        }
    }
    Ok(())
}
