use axum::Router;
use shared_types::{
    AppError, AppErrorKind, ContactDetails, CreateParcelRequest, CreateParcelResponse,
    ParcelServiceError,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::state::AppState;

/// OpenAPI documentation for the HTTP surface of the app server.
///
/// Parcel schemas are listed so the payload forwarded by the `create_parcel`
/// server function is documented next to the health endpoint.
#[derive(OpenApi)]
#[openapi(
    paths(health::health_check),
    components(schemas(
        AppError, AppErrorKind,
        ContactDetails, CreateParcelRequest, CreateParcelResponse, ParcelServiceError,
        health::HealthResponse,
    )),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "parcels", description = "Shipment payloads forwarded to the parcel service")
    ),
    info(
        title = "Parcel Desk API",
        description = "Shipment intake front end for the parcel service",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves `/health`, plus the API docs at `/docs`
/// when the `api_docs` feature flag is on.
pub fn api_router(state: AppState) -> Router {
    let flags = crate::config::feature_flags();

    let router = Router::new()
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if flags.api_docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
