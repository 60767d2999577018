//! Whole-document JSON persistence.
//!
//! Every operation reads or replaces a complete file; there are no partial
//! updates and no indexes. Backends only move bytes, the typed helpers here
//! handle (de)serialization.

mod heap;
mod local;

pub use heap::HeapStore;
pub use local::LocalStore;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::ClinicError;

/// Named JSON documents persisted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Pets,
    Appointments,
    LatestAppointment,
    Schedule,
    Products,
    Purchases,
}

impl Collection {
    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Pets => "pets.json",
            Collection::Appointments => "appointments.json",
            Collection::LatestAppointment => "latest_appointment.json",
            Collection::Schedule => "schedule.json",
            Collection::Products => "petshop_store.json",
            Collection::Purchases => "purchases.json",
        }
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Raw document bytes, or `None` if the document does not exist.
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, ClinicError>;
    /// Replaces the document with `data`.
    async fn write(&self, name: &str, data: &[u8]) -> Result<(), ClinicError>;
}

/// Reads a collection as a list of records. A missing document is an empty list.
pub async fn read_collection<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: Collection,
) -> Result<Vec<T>, ClinicError> {
    let name = collection.file_name();
    match store.read(name).await? {
        Some(data) => serde_json::from_slice(&data)
            .map_err(|e| ClinicError::ParseError(format!("parsing {name}: {e}"))),
        None => Ok(Vec::new()),
    }
}

/// Serializes `document` with two-space indentation and replaces the stored file.
pub async fn write_document<T: Serialize + ?Sized>(
    store: &dyn DocumentStore,
    collection: Collection,
    document: &T,
) -> Result<(), ClinicError> {
    let name = collection.file_name();
    let data = serde_json::to_vec_pretty(document)
        .map_err(|e| ClinicError::ParseError(format!("serializing {name}: {e}")))?;
    store.write(name, &data).await
}
