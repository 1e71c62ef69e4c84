//! bedside-core
//!
//! Shared vocabulary of the bedside reference system: the raw values a
//! clinician enters and the editorial metadata that travels with clinical
//! content. No scoring logic lives here.

pub mod models;
