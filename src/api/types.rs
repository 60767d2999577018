use serde::Serialize;
use serde_json::Value;

/// Error response format.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub const PET_REGISTERED: &str = "Pet registrado com sucesso";

/// Response of the add-pet endpoint.
#[derive(Debug, Serialize)]
pub struct PetCreated {
    pub message: &'static str,
    pub pet: Value,
}
