use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title and keywords generated for one queued file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMetadata {
    pub file_id: Uuid,
    pub title: String,
    pub keywords: Vec<String>,
}

/// Counters shown while files are queued and generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub uploaded: usize,
    pub success: usize,
    pub failed: usize,
}
