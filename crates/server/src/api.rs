use dioxus::prelude::*;
use shared_types::{CreateParcelRequest, CreateParcelResponse};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Create a parcel. The payload is forwarded unchanged to the parcel
/// service; any rejection comes back as a JSON-encoded `AppError`.
#[cfg_attr(feature = "server", tracing::instrument(skip(body)))]
#[server]
pub async fn create_parcel(
    body: CreateParcelRequest,
) -> Result<CreateParcelResponse, ServerFnError> {
    let created = crate::upstream::parcel_service()
        .map_err(|e| e.into_server_fn_error())?
        .create_parcel(&body)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(tracking_number = %created.tracking_number, "Parcel created");
    Ok(created)
}
