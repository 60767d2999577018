use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A registered pet. Fields beyond `id` and `name` are kept as submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pet {
    /// Checks that a submitted pet carries an integer `id` and a string `name`.
    pub fn check(body: &Value) -> Result<Pet, serde_json::Error> {
        Pet::deserialize(body)
    }
}
