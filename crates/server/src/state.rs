use axum::extract::FromRef;
use shared_types::AppError;
use std::sync::Arc;

use crate::upstream::ParcelServiceClient;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<Arc<ParcelServiceClient>>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub parcel_service: Arc<ParcelServiceClient>,
}

impl AppState {
    pub fn new(parcel_service: ParcelServiceClient) -> Self {
        Self {
            parcel_service: Arc::new(parcel_service),
        }
    }

    /// State sharing the process-wide client configured from `config.toml`
    /// and the environment.
    pub fn from_config() -> Result<Self, AppError> {
        Ok(Self::new(crate::upstream::parcel_service()?.clone()))
    }
}
