use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup. Every field defaults to
/// `false` so that a missing or incomplete config file disables all
/// optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export request spans over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Serve the Scalar API reference at `/docs`.
    #[serde(default)]
    pub api_docs: bool,
}

/// Where the parcel service lives. Environment variables take precedence
/// over these values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ParcelServiceConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    /// Upstream request timeout. Absent means requests never time out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub parcel_service: ParcelServiceConfig,
}
