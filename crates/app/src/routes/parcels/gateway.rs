use dioxus::prelude::ServerFnError;
use shared_types::{AppError, CreateParcelRequest, CreateParcelResponse};

/// The external create operation the shipment form submits to.
#[allow(async_fn_in_trait)]
pub trait ParcelGateway {
    async fn create_parcel(
        &self,
        request: CreateParcelRequest,
    ) -> Result<CreateParcelResponse, AppError>;
}

/// Reaches the parcel service through the `create_parcel` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnGateway;

impl ParcelGateway for ServerFnGateway {
    async fn create_parcel(
        &self,
        request: CreateParcelRequest,
    ) -> Result<CreateParcelResponse, AppError> {
        server::api::create_parcel(request).await.map_err(|e| {
            let err = app_error_from_server_fn(&e);
            tracing::warn!(kind = %err.kind, message = %err.message, "Shipment submission failed");
            err
        })
    }
}

/// Recover the `AppError` the server encoded into a `ServerFnError`.
/// Errors raised before the server function ran, such as transport
/// failures, carry no encoded error and become `InternalError`.
pub fn app_error_from_server_fn(err: &ServerFnError) -> AppError {
    let message = err.to_string();
    AppError::from_server_error(&message).unwrap_or_else(|| AppError::internal(message))
}
