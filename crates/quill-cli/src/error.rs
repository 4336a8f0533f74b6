use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration: set {env_var} or pass it on the command line")]
    MissingEnvVar { env_var: String },

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

/// Map a dotted configuration path to the environment variable that sets it
pub fn to_env_var(field_path: &str) -> String {
    format!("QUILL_{}", field_path.replace('.', "__").to_uppercase())
}
