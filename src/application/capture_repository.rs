// Repository trait for capture data access
use crate::domain::capture::{CaptureRecord, LoadError};
use async_trait::async_trait;

#[async_trait]
pub trait CaptureRepository: Send + Sync {
    /// Resolve a selection identifier to its capture record
    async fn load(&self, selection_id: &str) -> Result<CaptureRecord, LoadError>;

    /// List the identifiers that `load` can resolve
    async fn list_captures(&self) -> Result<Vec<String>, LoadError>;
}
