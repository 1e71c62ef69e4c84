use thiserror::Error;

/// Problems found while building a catalog. All of them are configuration
/// errors: a catalog that fails validation is never served.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("score definition has an empty id")]
    EmptyId,

    #[error("duplicate score id: {0}")]
    DuplicateScore(String),

    #[error("duplicate entry '{entry_id}' in score '{score_id}'")]
    DuplicateEntry { score_id: String, entry_id: String },

    #[error("group '{group_id}' in score '{score_id}' has no options")]
    EmptyGroup { score_id: String, group_id: String },

    #[error("no formula registered for score '{0}'")]
    MissingFormula(String),

    #[error("band {index} of score '{score_id}' is not a valid interval [{min}, {max}]")]
    InvalidBand {
        score_id: String,
        index: usize,
        min: f64,
        max: f64,
    },

    #[error("band {index} of score '{score_id}' overlaps or precedes the band before it")]
    UnorderedBands { score_id: String, index: usize },

    #[error("informational score '{0}' must not declare bands")]
    BandsOnInformational(String),

    #[error("catalog_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("score definition not found: {0}")]
    DefinitionNotFound(String),

    #[error("no formula registered for score '{0}'")]
    FormulaNotRegistered(String),
}

/// Inputs fall outside the range a formula is valid for.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{reason}")]
pub struct DomainViolation {
    pub reason: String,
}

impl DomainViolation {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
