//! Test utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::path::Path;
use std::time::Duration;

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::conf::Config;
use crate::store::Collection;

/// Config pointing at `data_dir` with a purchase delay short enough for tests.
pub fn test_config(data_dir: &Path, purchase_delay: Duration) -> Config {
    let mut config = Config::default().with_purchase_delay(purchase_delay);
    config.server.data_dir = data_dir.to_path_buf();
    config
}

/// Writes `value` as the pretty-printed contents of `collection` under `dir`.
pub fn seed_collection(dir: &Path, collection: Collection, value: &Value) -> std::io::Result<()> {
    let data = serde_json::to_vec_pretty(value).map_err(std::io::Error::other)?;
    std::fs::write(dir.join(collection.file_name()), data)
}

/// Reads the raw JSON of `collection` under `dir`, or `None` if the file is absent.
pub fn read_collection_file(dir: &Path, collection: Collection) -> Option<Value> {
    let data = std::fs::read(dir.join(collection.file_name())).ok()?;
    serde_json::from_slice(&data).ok()
}

/// A temp data dir pre-populated with reference data.
///
/// - pets: Rex (7) and Mia (3)
/// - schedule: services 1 and 2 with a few slots each
/// - store: two products
pub fn seeded_data_dir() -> std::io::Result<TempDir> {
    let dir = TempDir::new()?;
    seed_collection(
        dir.path(),
        Collection::Pets,
        &json!([
            {"id": 7, "name": "Rex", "species": "dog"},
            {"id": 3, "name": "Mia", "species": "cat"}
        ]),
    )?;
    seed_collection(
        dir.path(),
        Collection::Schedule,
        &json!([
            {"id": 1, "service": "Banho", "slots": ["09:00", "10:00"]},
            {"id": 2, "service": "Consulta", "slots": ["14:00"]}
        ]),
    )?;
    seed_collection(
        dir.path(),
        Collection::Products,
        &json!([
            {"id": 1, "name": "Ração Premium", "price": 129.9},
            {"id": 2, "name": "Coleira", "price": 39.5}
        ]),
    )?;
    Ok(dir)
}
