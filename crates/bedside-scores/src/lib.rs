//! bedside-scores
//!
//! Clinical score computation. Pure and synchronous: given a score id and
//! the clinician's current inputs, produce a number and its risk band.
//! Four modalities are supported: weighted checklists, grouped
//! single-select scales, closed-form formulas, and narrative-only
//! classifications.

pub mod catalog;
pub mod categorical;
pub mod criteria;
pub mod definition;
pub mod engine;
pub mod error;
pub mod formulas;
pub mod interpretation;
pub mod scores;

pub use catalog::Catalog;
pub use definition::{Band, Modality, ScoreDefinition};
pub use engine::{ComputationResult, Outcome, ScoreEngine};
pub use error::{CatalogError, DomainViolation, EngineError};
