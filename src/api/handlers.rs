use std::future::Future;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::ClinicError;
use crate::model::{Appointment, Purchase, PurchaseRequest, ScheduleRequest};
use crate::service::{
    ClinicService, INVALID_PET, PET_NOT_FOUND, PURCHASE_FIELDS_REQUIRED,
    SCHEDULE_FIELDS_REQUIRED, SCHEDULE_NOT_FOUND,
};

use super::error::ApiError;
use super::types::{PET_REGISTERED, PetCreated};

type ApiResult<T> = Result<T, ApiError>;

/// Parses a JSON request body, reporting any failure as a validation error with `message`.
fn parse_body<T: DeserializeOwned>(body: &Bytes, message: &str) -> Result<T, ClinicError> {
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("rejecting request body: {e}");
        ClinicError::ValidationError(message.to_string())
    })
}

/// Reads the leading integer of a path segment: `"7"`, `"7abc"` and `"7.5"` are all 7.
/// Segments without leading digits match nothing.
fn parse_id(raw: &str, not_found: &str) -> Result<i64, ClinicError> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if sign_len > 1 || digits == 0 {
        return Err(ClinicError::NotFound(not_found.to_string()));
    }
    trimmed[..sign_len + digits]
        .parse::<i64>()
        .map_err(|_| ClinicError::NotFound(not_found.to_string()))
}

/// Runs a mutation on its own task so a dropped connection cannot cut it short.
async fn run_to_completion<T, F>(task: F) -> Result<T, ClinicError>
where
    F: Future<Output = Result<T, ClinicError>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(task).await?
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn list_pets(State(service): State<Arc<ClinicService>>) -> ApiResult<Json<Vec<Value>>> {
    let pets = service.list_pets().await.map_err(ApiError::read)?;
    Ok(Json(pets))
}

pub async fn get_pet(
    State(service): State<Arc<ClinicService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id, PET_NOT_FOUND).map_err(ApiError::read)?;
    let pet = service.get_pet(id).await.map_err(ApiError::read)?;
    Ok(Json(pet))
}

pub async fn add_pet(
    State(service): State<Arc<ClinicService>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<PetCreated>)> {
    let body: Value = parse_body(&body, INVALID_PET).map_err(ApiError::pet)?;
    let pet = run_to_completion(async move { service.add_pet(body).await })
        .await
        .map_err(ApiError::pet)?;
    Ok((
        StatusCode::CREATED,
        Json(PetCreated {
            message: PET_REGISTERED,
            pet,
        }),
    ))
}

pub async fn schedule_service(
    State(service): State<Arc<ClinicService>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Appointment>)> {
    let request: ScheduleRequest =
        parse_body(&body, SCHEDULE_FIELDS_REQUIRED).map_err(ApiError::schedule)?;
    let appointment = run_to_completion(async move { service.schedule_service(request).await })
        .await
        .map_err(ApiError::schedule)?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

pub async fn list_appointments(
    State(service): State<Arc<ClinicService>>,
) -> ApiResult<Json<Vec<Value>>> {
    let appointments = service.list_appointments().await.map_err(ApiError::read)?;
    Ok(Json(appointments))
}

pub async fn get_schedule(
    State(service): State<Arc<ClinicService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id, SCHEDULE_NOT_FOUND).map_err(ApiError::read)?;
    let entry = service.get_schedule(id).await.map_err(ApiError::read)?;
    Ok(Json(entry))
}

pub async fn list_products(
    State(service): State<Arc<ClinicService>>,
) -> ApiResult<Json<Vec<Value>>> {
    let products = service.list_products().await.map_err(ApiError::read)?;
    Ok(Json(products))
}

pub async fn purchase(
    State(service): State<Arc<ClinicService>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Purchase>)> {
    let request: PurchaseRequest =
        parse_body(&body, PURCHASE_FIELDS_REQUIRED).map_err(ApiError::purchase)?;
    let confirmation = run_to_completion(async move { service.purchase(request).await })
        .await
        .map_err(ApiError::purchase)?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}
