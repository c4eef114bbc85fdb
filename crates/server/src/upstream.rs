use shared_types::{AppError, CreateParcelRequest, CreateParcelResponse, ParcelServiceError};
use std::sync::OnceLock;
use std::time::Duration;

use crate::error_convert::ReqwestErrorExt;

/// Upper bound on the `/health` reachability check, independent of the
/// configured create timeout.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Process-wide client shared by server functions and `AppState`.
static CLIENT: OnceLock<ParcelServiceClient> = OnceLock::new();

/// HTTP client for the external parcel service that persists shipments.
#[derive(Debug, Clone)]
pub struct ParcelServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ParcelServiceClient {
    /// Build a client for the service at `base_url`. `None` disables the
    /// request timeout for creates.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            AppError::internal(format!("Failed to build parcel service HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from `config.toml` and the environment.
    pub fn from_config() -> Result<Self, AppError> {
        let settings = crate::config::parcel_service_settings();
        Self::new(&settings.base_url, settings.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward a create request to `POST {base_url}/api/parcels` as-is.
    pub async fn create_parcel(
        &self,
        body: &CreateParcelRequest,
    ) -> Result<CreateParcelResponse, AppError> {
        let url = format!("{}/api/parcels", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<CreateParcelResponse>()
                .await
                .map_err(ReqwestErrorExt::into_app_error);
        }

        let message = match response.json::<ParcelServiceError>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Parcel service error")
                .to_string(),
        };
        tracing::warn!(status = status.as_u16(), %message, "Parcel service rejected create");

        Err(AppError::from_upstream_status(status.as_u16(), message))
    }

    /// Check that the service answers HTTP at all within [`PROBE_TIMEOUT`].
    /// Any status counts.
    pub async fn probe(&self) -> Result<(), AppError> {
        self.probe_within(PROBE_TIMEOUT).await
    }

    async fn probe_within(&self, limit: Duration) -> Result<(), AppError> {
        self.http
            .get(&self.base_url)
            .timeout(limit)
            .send()
            .await
            .map(|_| ())
            .map_err(ReqwestErrorExt::into_app_error)
    }
}

/// Get the process-wide parcel service client, building it from config on
/// first use. A build failure is returned, not cached, so a later call
/// retries.
pub fn parcel_service() -> Result<&'static ParcelServiceClient, AppError> {
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = ParcelServiceClient::from_config()?;
    Ok(CLIENT.get_or_init(|| client))
}
