mod error;
mod handlers;
mod types;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use log::info;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::ClinicError;
use crate::service::ClinicService;

pub use error::ApiError;

pub struct ClinicApi {
    service: Arc<ClinicService>,
}

impl ClinicApi {
    pub fn new(service: ClinicService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/pets", get(handlers::list_pets))
            .route("/api/pets/new", post(handlers::add_pet))
            .route("/api/pets/{id}", get(handlers::get_pet))
            .route("/api/scheduleService", post(handlers::schedule_service))
            .route("/api/appointments", get(handlers::list_appointments))
            .route("/api/schedule/{id}", get(handlers::get_schedule))
            .route("/api/store/products", get(handlers::list_products))
            .route("/api/purchase", post(handlers::purchase))
            // Response events reach env_logger through tracing's `log` feature.
            .layer(
                TraceLayer::new_for_http()
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .with_state(self.service.clone())
    }

    pub async fn serve(self, addr: &str) -> Result<(), ClinicError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ClinicError::IoError(format!("binding to {addr}: {e}")))?;
        self.serve_listener(listener).await
    }

    pub async fn serve_listener(self, listener: TcpListener) -> Result<(), ClinicError> {
        if let Ok(addr) = listener.local_addr() {
            info!("Listening on {addr}");
        }
        axum::serve(listener, self.router())
            .await
            .map_err(|e| ClinicError::IoError(format!("serving: {e}")))?;
        Ok(())
    }
}
