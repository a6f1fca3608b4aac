//! Document store abstraction.

use async_trait::async_trait;
use bson::Document;
use thiserror::Error;

/// Errors surfaced by a document store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// MongoDB driver error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// Backend unreachable or refusing the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Referenced document does not exist.
    #[error("document '{0}' not found")]
    NotFound(String),
}

/// A document as returned by the store: its identifier plus its fields.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Document,
}

/// Minimal document-store surface the seeder depends on.
///
/// Mirrors the list/create/delete operations of a hosted document API.
/// Implementations preserve their backend's natural listing order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List all documents in a collection, in store order.
    async fn list_documents(&self, collection_id: &str)
        -> Result<Vec<StoredDocument>, StoreError>;

    /// Create a document with the given identifier and fields.
    async fn create_document(
        &self,
        collection_id: &str,
        document_id: &str,
        fields: Document,
    ) -> Result<StoredDocument, StoreError>;

    /// Delete a single document by identifier.
    async fn delete_document(&self, collection_id: &str, document_id: &str)
        -> Result<(), StoreError>;
}

/// Generate a unique document identifier.
pub fn unique_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
