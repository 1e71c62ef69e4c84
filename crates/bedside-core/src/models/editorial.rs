use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Traceability metadata attached by the content subsystem.
///
/// Opaque to score computation; carried alongside a definition and
/// serialized back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EditorialMetadata {
    pub content_id: Uuid,
    pub version: u32,
    pub author: Option<String>,
    pub reviewer: Option<String>,
    pub published_on: Option<jiff::civil::Date>,
}
