use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::ClinicError;

use super::DocumentStore;

/// In-memory DocumentStore keyed by document name.
#[derive(Default)]
pub struct HeapStore {
    documents: RwLock<HashMap<String, Vec<u8>>>,
}

impl HeapStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for HeapStore {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, ClinicError> {
        let documents = self.documents.read().await;
        Ok(documents.get(name).cloned())
    }

    async fn write(&self, name: &str, data: &[u8]) -> Result<(), ClinicError> {
        let mut documents = self.documents.write().await;
        documents.insert(name.to_string(), data.to_vec());
        Ok(())
    }
}
