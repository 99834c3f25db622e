use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use axum::body::Bytes;

use super::{DocumentMetadata, DocumentStore, DocumentStoreError};

#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub bytes: Bytes,
    pub metadata: DocumentMetadata,
}

/// Keeps documents in a map; records every put so tests can assert that
/// rejected uploads never reached storage.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: Mutex<HashMap<String, StoredDocument>>,
    puts: Mutex<Vec<String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    /// Documents currently stored, after deletes.
    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn get(&self, name: &str) -> Option<StoredDocument> {
        self.documents.lock().unwrap().get(name).cloned()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn put(
        &self,
        name: &str,
        bytes: Bytes,
        metadata: DocumentMetadata,
    ) -> Result<(), DocumentStoreError> {
        self.puts.lock().unwrap().push(name.to_string());
        self.documents
            .lock()
            .unwrap()
            .insert(name.to_string(), StoredDocument { bytes, metadata });
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), DocumentStoreError> {
        self.documents.lock().unwrap().remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_delete() {
        let store = MemoryDocumentStore::new();
        let metadata = DocumentMetadata::attachment("1-1-x.pdf", "application/pdf", 1, 1);
        store.put("1-1-x.pdf", Bytes::from_static(b"%PDF-1.7"), metadata).await.unwrap();

        assert_eq!(store.put_count(), 1);
        let stored = store.get("1-1-x.pdf").unwrap();
        assert_eq!(stored.bytes, Bytes::from_static(b"%PDF-1.7"));
        assert_eq!(stored.metadata.content_disposition, "attachment; filename=\"1-1-x.pdf\"");
        assert_eq!((stored.metadata.user_id, stored.metadata.property_id), (1, 1));

        store.delete("1-1-x.pdf").await.unwrap();
        assert!(store.get("1-1-x.pdf").is_none());
        assert_eq!(store.len(), 0);
        assert_eq!(store.put_count(), 1);
    }
}
