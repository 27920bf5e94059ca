/// Configuration boundary errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config preset not found: '{name}'")]
    PresetNotFound { name: String },

    #[error("invalid config: {reason}")]
    Invalid { reason: String },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
