use shared_types::{AppConfig, FeatureFlags, ParcelServiceConfig};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Used when neither the environment nor `config.toml` names the service.
pub const DEFAULT_PARCEL_SERVICE_URL: &str = "http://localhost:5000";

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect.
pub fn load_config() {
    CONFIG.get_or_init(|| read_config(Path::new(CONFIG_PATH)));
}

/// Parse the config file at `path`. A missing or unparseable file yields
/// the defaults, with every feature off.
fn read_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => {
                tracing::info!(features = ?config.features, "Loaded {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse {}; using defaults", path.display());
                AppConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "{} not found; using defaults", path.display());
            AppConfig::default()
        }
    }
}

fn config() -> &'static AppConfig {
    static DEFAULT: AppConfig = AppConfig {
        features: FeatureFlags {
            telemetry: false,
            api_docs: false,
        },
        parcel_service: ParcelServiceConfig {
            base_url: None,
            timeout_secs: None,
        },
    };
    CONFIG.get().unwrap_or(&DEFAULT)
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_config()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    &config().features
}

/// Resolved connection settings for the parcel service.
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelServiceSettings {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

/// Resolve parcel service settings: `PARCEL_SERVICE_URL` and
/// `PARCEL_SERVICE_TIMEOUT_SECS` override `config.toml`, which overrides the
/// built-in default.
pub fn parcel_service_settings() -> ParcelServiceSettings {
    // Load .env file if present (ignored in production where env vars are set directly).
    let _ = dotenvy::dotenv();

    resolve_settings(
        &config().parcel_service,
        std::env::var("PARCEL_SERVICE_URL").ok(),
        std::env::var("PARCEL_SERVICE_TIMEOUT_SECS").ok(),
    )
}

fn resolve_settings(
    file: &ParcelServiceConfig,
    env_url: Option<String>,
    env_timeout: Option<String>,
) -> ParcelServiceSettings {
    let base_url = env_url
        .filter(|url| !url.trim().is_empty())
        .or_else(|| file.base_url.clone().filter(|url| !url.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_PARCEL_SERVICE_URL.to_string());

    let timeout_secs = match env_timeout.filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse::<u64>().ok(),
        None => file.timeout_secs,
    };

    ParcelServiceSettings {
        base_url,
        timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
    }
}
