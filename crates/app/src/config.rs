use shared_types::AppConfig;

const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

/// Embedded `config.toml`, with the base URL optionally replaced by the
/// `SEATMAKERS_API_URL` value present at compile time.
pub fn load() -> AppConfig {
    let config = AppConfig::from_toml_str(EMBEDDED_CONFIG)
        .with_api_override(option_env!("SEATMAKERS_API_URL"));
    tracing::info!(api = %config.api.base_url, "Loaded configuration");
    config
}
