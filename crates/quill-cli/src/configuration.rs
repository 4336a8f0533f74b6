use crate::error::{to_env_var, ConfigError};
use config::{Config, Environment, File};
use quill::providers::configs::{GeminiProviderConfig, GEMINI_HOST, GEMINI_MODEL};
use quill::session::Theme;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_model")]
    pub model: String,
    pub api_key: String,
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl ProviderSettings {
    pub fn into_config(self) -> GeminiProviderConfig {
        GeminiProviderConfig {
            host: self.host,
            model: self.model,
            api_key: self.api_key,
            endpoint: self.endpoint,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UiSettings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            greeting: default_greeting(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub provider: ProviderSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

/// Values taken from the command line, applied on top of every other source
#[derive(Debug, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub host: Option<String>,
    pub endpoint: Option<String>,
    pub theme: Option<Theme>,
}

impl Settings {
    /// Layer defaults, the optional config file, `QUILL_*` environment variables
    /// and command line overrides, in that order.
    pub fn load(config_file: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("provider.host", default_host())?
            .set_default("provider.model", default_model())?
            .set_default("ui.theme", Theme::default().as_str())?
            .set_default("ui.greeting", default_greeting())?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(false));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("QUILL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("provider.api_key", overrides.api_key)?
            .set_override_option("provider.model", overrides.model)?
            .set_override_option("provider.host", overrides.host)?
            .set_override_option("provider.endpoint", overrides.endpoint)?
            .set_override_option("ui.theme", overrides.theme.map(|theme| theme.as_str()))?
            .build()?;

        match config.try_deserialize::<Self>() {
            Ok(settings) => Ok(settings),
            Err(err) => {
                tracing::debug!("Configuration error: {:?}", &err);

                // Only the provider section has required fields.
                let error_str = err.to_string();
                if error_str.contains("missing field") {
                    let field = error_str.split('`').nth(1).unwrap_or_default();
                    let env_var = to_env_var(&format!("provider.{}", field));
                    Err(ConfigError::MissingEnvVar { env_var })
                } else if let config::ConfigError::NotFound(field) = &err {
                    let env_var = to_env_var(field);
                    Err(ConfigError::MissingEnvVar { env_var })
                } else {
                    Err(ConfigError::Other(err))
                }
            }
        }
    }
}

/// `~/.config/quill/config.toml`, whether or not it exists
pub fn default_config_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("quill").join("config.toml"))
}

fn default_host() -> String {
    GEMINI_HOST.to_string()
}

fn default_model() -> String {
    GEMINI_MODEL.to_string()
}

fn default_greeting() -> String {
    "Hey! I am Quill 😊 Ask me anything.".to_string()
}
