use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub placeholder: PlaceholderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PlaceholderConfig {
    /// Prefix marking a run-time parameter in filter values
    pub sigil: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: PlaceholderConfig {
                sigil: "&".to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[placeholder]
sigil = "&"

[logging]
level = "info"
"#;

const CONFIG_FILE_NAME: &str = "metadata_codec.toml";

/// Process-wide configuration, read once
pub static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        tracing::warn!("Cannot load codec config: {}; using defaults", e);
        Config::default()
    }
});

/// Load configuration from metadata_codec.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                tracing::info!("Loading codec config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::debug!("{} not found at: {}", CONFIG_FILE_NAME, config_path.display());
            }
        }
    }

    tracing::debug!("Using default embedded codec configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.placeholder.sigil.is_empty() {
        anyhow::bail!("placeholder.sigil must not be empty");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.placeholder.sigil, "&");
    }

    #[test]
    fn test_logging_section_optional() {
        let config = parse_config("[placeholder]\nsigil = \"$\"\n").unwrap();
        assert_eq!(config.placeholder.sigil, "$");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_sigil_rejected() {
        assert!(parse_config("[placeholder]\nsigil = \"\"\n").is_err());
        assert!(parse_config("").is_err());
    }
}
