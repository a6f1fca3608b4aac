//! In-memory document store for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use bson::Document;

use crate::store::{unique_id, DocumentStore, StoreError, StoredDocument};

/// In-memory `DocumentStore` with per-collection failure injection.
///
/// Listing returns documents in insertion order. Injected failures surface
/// as `StoreError::Unavailable`, mimicking an unreachable backend.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Vec<StoredDocument>>,
    failing_lists: HashSet<String>,
    failing_deletes: HashSet<String>,
    // Collection id -> number of remaining creates that should fail.
    failing_creates: HashMap<String, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a document, returning its generated identifier.
    pub fn insert(&self, collection_id: &str, fields: Document) -> String {
        let id = unique_id();
        let mut inner = self.inner.lock().unwrap();
        inner
            .collections
            .entry(collection_id.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                fields,
            });
        id
    }

    /// Snapshot of a collection's documents, in insertion order.
    pub fn documents(&self, collection_id: &str) -> Vec<StoredDocument> {
        let inner = self.inner.lock().unwrap();
        inner
            .collections
            .get(collection_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Make every `list_documents` call against `collection_id` fail.
    pub fn fail_lists(&self, collection_id: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.failing_lists.insert(collection_id.to_string());
    }

    /// Make every `delete_document` call against `collection_id` fail.
    pub fn fail_deletes(&self, collection_id: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.failing_deletes.insert(collection_id.to_string());
    }

    /// Make the next `count` creates against `collection_id` fail.
    pub fn fail_creates(&self, collection_id: &str, count: usize) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .failing_creates
            .insert(collection_id.to_string(), count);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_documents(
        &self,
        collection_id: &str,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let inner = self.inner.lock().unwrap();
        if inner.failing_lists.contains(collection_id) {
            return Err(StoreError::Unavailable(format!(
                "injected list failure for '{collection_id}'"
            )));
        }

        Ok(inner
            .collections
            .get(collection_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_document(
        &self,
        collection_id: &str,
        document_id: &str,
        fields: Document,
    ) -> Result<StoredDocument, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(remaining) = inner.failing_creates.get_mut(collection_id) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(StoreError::Unavailable(format!(
                    "injected create failure for '{collection_id}'"
                )));
            }
        }

        let document = StoredDocument {
            id: document_id.to_string(),
            fields,
        };
        inner
            .collections
            .entry(collection_id.to_string())
            .or_default()
            .push(document.clone());

        Ok(document)
    }

    async fn delete_document(
        &self,
        collection_id: &str,
        document_id: &str,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.failing_deletes.contains(collection_id) {
            return Err(StoreError::Unavailable(format!(
                "injected delete failure for '{collection_id}'"
            )));
        }

        let documents = inner
            .collections
            .get_mut(collection_id)
            .ok_or_else(|| StoreError::NotFound(document_id.to_string()))?;

        let before = documents.len();
        documents.retain(|document| document.id != document_id);
        if documents.len() == before {
            return Err(StoreError::NotFound(document_id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[tokio::test]
    async fn test_insert_list_delete_round_trip() {
        let store = MemoryStore::new();
        let id = store.insert("agents", doc! { "name": "Agent 1" });

        let listed = store.list_documents("agents").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);

        store.delete_document("agents", &id).await.unwrap();
        assert!(store.list_documents("agents").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        let first = store.insert("reviews", doc! { "rating": 5 });
        let second = store.insert("reviews", doc! { "rating": 3 });

        let listed = store.list_documents("reviews").await.unwrap();
        assert_eq!(listed[0].id, first);
        assert_eq!(listed[1].id, second);
    }

    #[tokio::test]
    async fn test_injected_create_failures_are_consumed() {
        let store = MemoryStore::new();
        store.fail_creates("properties", 1);

        let err = store
            .create_document("properties", "p1", doc! {})
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));

        store
            .create_document("properties", "p2", doc! {})
            .await
            .unwrap();
        assert_eq!(store.documents("properties").len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_document() {
        let store = MemoryStore::new();
        store.insert("agents", doc! {});

        let err = store.delete_document("agents", "missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
