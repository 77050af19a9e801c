use serde::{Deserialize, Serialize};

/// Backend used when neither the config file nor the build environment
/// names one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Business name shown in the shell and on the sign-in card.
pub const DEFAULT_BUSINESS_NAME: &str = "Seatmakers Avenue";

/// REST backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandingConfig {
    #[serde(default = "default_business_name")]
    pub business_name: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            business_name: default_business_name(),
        }
    }
}

fn default_business_name() -> String {
    DEFAULT_BUSINESS_NAME.to_string()
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section defaults, so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
}

impl AppConfig {
    /// Parse a TOML document, falling back to defaults when it is invalid.
    pub fn from_toml_str(raw: &str) -> Self {
        toml::from_str(raw).unwrap_or_default()
    }

    /// Replace the backend URL when an override is present and non-empty.
    /// A trailing slash is dropped so endpoint paths can be appended as-is.
    pub fn with_api_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        let trimmed = self.api.base_url.trim_end_matches('/').len();
        self.api.base_url.truncate(trimmed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("");
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.branding.business_name, DEFAULT_BUSINESS_NAME);
    }

    #[test]
    fn partial_toml_defaults_missing_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://api.seatmakers.test"
            "#,
        );
        assert_eq!(config.api.base_url, "https://api.seatmakers.test");
        assert_eq!(config.branding, BrandingConfig::default());
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let config = AppConfig::from_toml_str("[api\nbase_url = ");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn override_replaces_base_url_and_strips_slash() {
        let config = AppConfig::default().with_api_override(Some("http://10.0.0.5:8080/"));
        assert_eq!(config.api.base_url, "http://10.0.0.5:8080");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = AppConfig::default().with_api_override(Some("   "));
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        let config = AppConfig::default().with_api_override(None);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }
}
