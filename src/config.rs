use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub tarot: TarotSettings,
    #[serde(default)]
    pub readings: ReadingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TarotSettings {
    pub base_url: String,
    #[serde(default = "default_tarot_timeout")]
    pub timeout_secs: u64,
}

fn default_tarot_timeout() -> u64 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct ReadingSettings {
    #[serde(default = "default_reading_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_readings")]
    pub max_readings: u64,
}

impl Default for ReadingSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_reading_ttl(),
            max_readings: default_max_readings(),
        }
    }
}

fn default_reading_ttl() -> u64 { 1800 }
fn default_max_readings() -> u64 { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ASTRO_)
    /// 4. ASTRO_API_URL for the content service base URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g., ASTRO__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ASTRO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_api_url_override(settings, std::env::var("ASTRO_API_URL").ok())?.try_deserialize()
    }
}

fn apply_api_url_override(settings: Config, api_url: Option<String>) -> Result<Config, ConfigError> {
    match api_url {
        Some(url) if !url.trim().is_empty() => Config::builder()
            .add_source(settings)
            .set_override("tarot.base_url", url)?
            .build(),
        _ => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const MINIMAL: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 8080

        [tarot]
        base_url = "http://localhost:5000"
    "#;

    fn minimal() -> Config {
        Config::builder()
            .add_source(File::from_str(MINIMAL, FileFormat::Toml))
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults_fill_optional_sections() {
        let settings: Settings = minimal().try_deserialize().unwrap();

        assert_eq!(settings.tarot.timeout_secs, 10);
        assert_eq!(settings.readings.ttl_secs, 1800);
        assert_eq!(settings.readings.max_readings, 10_000);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_api_url_override() {
        let config = apply_api_url_override(minimal(), Some("https://example.test".to_string())).unwrap();
        let settings: Settings = config.try_deserialize().unwrap();
        assert_eq!(settings.tarot.base_url, "https://example.test");

        let untouched: Settings = apply_api_url_override(minimal(), None)
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(untouched.tarot.base_url, "http://localhost:5000");
    }
}
