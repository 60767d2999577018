mod state;

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use serde_json::Value;

use crate::conf::{ClinicConfig, Config};
use crate::core::ClinicError;
use crate::model::{
    Appointment, ORDER_COMPLETED, Pet, Purchase, PurchaseRequest, ScheduleRequest, UNKNOWN_PET,
};
use crate::store::{Collection, DocumentStore, LocalStore, read_collection, write_document};

use state::WriteLocks;

pub const PET_NOT_FOUND: &str = "Pet não encontrado";
pub const INVALID_PET: &str = "Pet inválido: id e name são obrigatórios";
pub const SCHEDULE_NOT_FOUND: &str = "Disponibilidade de serviço não encontrada";
pub const SCHEDULE_FIELDS_REQUIRED: &str =
    "Todos os parâmetros são necessários: petId, serviceId, date, time";
pub const SLOT_CONFLICT: &str = "Conflito de horário";
pub const PURCHASE_FIELDS_REQUIRED: &str = "Todos os parâmetros são necessários";

pub struct ClinicService {
    store: Arc<dyn DocumentStore>,
    clinic: ClinicConfig,
    purchase_delay: Duration,
    locks: WriteLocks,
}

impl ClinicService {
    pub fn new(store: Arc<dyn DocumentStore>, config: &Config) -> Self {
        Self {
            store,
            clinic: config.clinic.clone(),
            purchase_delay: config.purchase.delay,
            locks: WriteLocks::default(),
        }
    }

    /// Service backed by JSON files in `server.data_dir`.
    pub async fn open(config: &Config) -> Result<Self, ClinicError> {
        let store = LocalStore::open(&config.server.data_dir).await?;
        info!("Using data dir: {}", store.path().display());
        Ok(Self::new(Arc::new(store), config))
    }

    pub async fn list_pets(&self) -> Result<Vec<Value>, ClinicError> {
        read_collection(self.store.as_ref(), Collection::Pets).await
    }

    pub async fn get_pet(&self, id: i64) -> Result<Value, ClinicError> {
        self.list_pets()
            .await?
            .into_iter()
            .find(|p| p["id"].as_i64() == Some(id))
            .ok_or_else(|| ClinicError::NotFound(PET_NOT_FOUND.to_string()))
    }

    /// Appends the submitted pet exactly as received once it has passed [`Pet::check`].
    pub async fn add_pet(&self, body: Value) -> Result<Value, ClinicError> {
        let pet = Pet::check(&body).map_err(|e| {
            ClinicError::ValidationError(format!("{INVALID_PET}: {e}"))
        })?;

        let _guard = self.locks.pets.lock().await;
        let mut pets: Vec<Value> = read_collection(self.store.as_ref(), Collection::Pets).await?;
        pets.push(body.clone());
        write_document(self.store.as_ref(), Collection::Pets, &pets).await?;
        info!("registered pet {} ({})", pet.id, pet.name);
        Ok(body)
    }

    pub async fn schedule_service(
        &self,
        request: ScheduleRequest,
    ) -> Result<Appointment, ClinicError> {
        let appointment = request
            .into_appointment(&self.clinic)
            .ok_or_else(|| ClinicError::ValidationError(SCHEDULE_FIELDS_REQUIRED.to_string()))?;

        let _guard = self.locks.appointments.lock().await;
        let mut appointments: Vec<Value> =
            read_collection(self.store.as_ref(), Collection::Appointments).await?;

        if appointments.iter().any(|a| appointment.conflicts_with(a)) {
            warn!(
                "slot {} {} already booked for pet {}",
                appointment.date, appointment.time, appointment.pet_id
            );
            return Err(ClinicError::Conflict(SLOT_CONFLICT.to_string()));
        }

        appointments.push(serde_json::to_value(&appointment)?);
        write_document(self.store.as_ref(), Collection::Appointments, &appointments).await?;
        write_document(self.store.as_ref(), Collection::LatestAppointment, &appointment).await?;
        info!(
            "booked service {} for pet {} at {} {}",
            appointment.service_id, appointment.pet_id, appointment.date, appointment.time
        );
        Ok(appointment)
    }

    /// Stored appointments with a `petName` attached. Entries that are not
    /// objects are passed through untouched.
    pub async fn list_appointments(&self) -> Result<Vec<Value>, ClinicError> {
        let mut appointments: Vec<Value> =
            read_collection(self.store.as_ref(), Collection::Appointments).await?;
        if appointments.is_empty() {
            return Ok(appointments);
        }
        let pets = self.list_pets().await?;

        for appointment in appointments.iter_mut() {
            let pet = appointment["petId"]
                .as_i64()
                .and_then(|id| pets.iter().find(|p| p["id"].as_i64() == Some(id)));
            let pet_name = match pet {
                Some(pet) => pet.get("name").cloned(),
                None => Some(Value::from(UNKNOWN_PET)),
            };
            if let (Value::Object(fields), Some(name)) = (appointment, pet_name) {
                fields.insert("petName".to_string(), name);
            }
        }
        Ok(appointments)
    }

    pub async fn get_schedule(&self, service_id: i64) -> Result<Value, ClinicError> {
        read_collection::<Value>(self.store.as_ref(), Collection::Schedule)
            .await?
            .into_iter()
            .find(|s| s["id"].as_i64() == Some(service_id))
            .ok_or_else(|| ClinicError::NotFound(SCHEDULE_NOT_FOUND.to_string()))
    }

    pub async fn list_products(&self) -> Result<Vec<Value>, ClinicError> {
        read_collection(self.store.as_ref(), Collection::Products).await
    }

    /// Places an order. The confirmation is persisted only after the configured
    /// processing delay; the purchases lock is held throughout so order ids stay
    /// sequential.
    pub async fn purchase(&self, request: PurchaseRequest) -> Result<Purchase, ClinicError> {
        let cart_items = request
            .into_cart_items()
            .ok_or_else(|| ClinicError::ValidationError(PURCHASE_FIELDS_REQUIRED.to_string()))?;

        let _guard = self.locks.purchases.lock().await;
        let mut purchases: Vec<Value> =
            read_collection(self.store.as_ref(), Collection::Purchases).await?;

        let confirmation = Purchase {
            order_id: purchases.len() as u64 + 1,
            cart_items,
            status: ORDER_COMPLETED.to_string(),
        };
        purchases.push(serde_json::to_value(&confirmation)?);

        tokio::time::sleep(self.purchase_delay).await;
        write_document(self.store.as_ref(), Collection::Purchases, &purchases).await?;
        info!("order {} completed", confirmation.order_id);
        Ok(confirmation)
    }
}
