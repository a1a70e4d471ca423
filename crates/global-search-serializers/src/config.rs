use anyhow::{Context, Result};
use confyg::{env, Confygery};
use global_search_core::RecordFamily;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::format::JsonFormat;

/// Configuration for global-search.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (GS_* prefix)
/// 3. Config file (~/.config/global-search/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream schema families installed in this deployment.
    ///
    /// Families not listed here get an unsupported serializer.
    ///
    /// Can be set via:
    /// - ENV: GS_INSTALLED_FAMILIES=lom,rdm
    /// - Config: installed_families = ["lom", "marc21", "rdm"]
    /// - Default: all families
    #[serde(
        default = "default_installed_families",
        deserialize_with = "deserialize_list"
    )]
    pub installed_families: Vec<String>,

    /// Pretty-print JSON output.
    ///
    /// Can be set via:
    /// - CLI: --pretty
    /// - ENV: GS_PRETTY=true
    /// - Config: pretty = true
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub pretty: bool,

    /// Log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Colour log output.
    #[serde(
        default = "default_log_coloured",
        deserialize_with = "deserialize_flag"
    )]
    pub log_coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            installed_families: default_installed_families(),
            pretty: false,
            log_level: default_log_level(),
            log_coloured: default_log_coloured(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/global-search/config.toml
    /// Reads environment variables with GS_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("gs");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// The installed families, parsed.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first entry that is not a known family.
    pub fn families(&self) -> Result<Vec<RecordFamily>> {
        let mut families = Vec::with_capacity(self.installed_families.len());
        for name in &self.installed_families {
            let family: RecordFamily = name
                .parse()
                .with_context(|| format!("Invalid entry in installed_families: {name}"))?;
            if !families.contains(&family) {
                families.push(family);
            }
        }
        Ok(families)
    }

    /// The JSON emitter selected by this configuration.
    #[must_use]
    pub const fn json_format(&self) -> JsonFormat {
        JsonFormat {
            pretty: self.pretty,
        }
    }
}

fn default_installed_families() -> Vec<String> {
    RecordFamily::ALL
        .iter()
        .map(|family| family.as_str().to_string())
        .collect()
}

fn default_log_level() -> String {
    String::from("info")
}

const fn default_log_coloured() -> bool {
    true
}

/// Environment variables arrive as strings, so list settings also accept a
/// comma-separated string.
fn deserialize_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrJoined {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match ListOrJoined::deserialize(deserializer)? {
        ListOrJoined::List(items) => items,
        ListOrJoined::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
    })
}

/// Boolean settings also accept `"true"`/`"false"` (and `1`/`0`, `yes`/`no`)
/// as strings.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagOrText {
        Flag(bool),
        Text(String),
    }

    match FlagOrText::deserialize(deserializer)? {
        FlagOrText::Flag(flag) => Ok(flag),
        FlagOrText::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => Err(de::Error::custom(format!(
                "expected a boolean, found \"{other}\""
            ))),
        },
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/global-search/config.toml
/// - macOS: ~/Library/Application Support/global-search/config.toml
/// - Windows: %APPDATA%\global-search\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("global-search")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Global Search Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (GS_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Upstream record schema families installed in this deployment.
# A family missing from this list still has a serializer slot, but
# serializing one of its records is refused.
#
# Known families: lom, marc21, rdm
installed_families = ["lom", "marc21", "rdm"]

# Pretty-print JSON output
#
# Can also be set via:
# - CLI: global-search serialize --pretty ...
pretty = false

# Logging
log_level = "info"
log_coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.families().unwrap(), RecordFamily::ALL.to_vec());
        assert!(!config.pretty);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config.installed_families.len(), 3);
        assert!(config.log_coloured);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("pretty = true").unwrap();
        assert!(config.pretty);
        assert_eq!(config.installed_families.len(), 3);
        assert!(config.json_format().pretty);
    }

    #[test]
    fn test_string_values_are_accepted() {
        let config: Config = toml::from_str(
            r#"
installed_families = "rdm, marc21"
pretty = "true"
log_coloured = "false"
"#,
        )
        .unwrap();
        assert_eq!(
            config.families().unwrap(),
            vec![RecordFamily::Rdm, RecordFamily::Marc21]
        );
        assert!(config.pretty);
        assert!(!config.log_coloured);
    }

    #[test]
    fn test_invalid_flag_text_is_rejected() {
        let err = toml::from_str::<Config>(r#"pretty = "sometimes""#).unwrap_err();
        assert!(err.to_string().contains("expected a boolean"));
    }

    #[test]
    fn test_env_overrides_non_string_fields() {
        std::env::set_var("GS_INSTALLED_FAMILIES", "rdm");
        std::env::set_var("GS_PRETTY", "true");
        std::env::set_var("GS_LOG_COLOURED", "false");

        let result = Config::load();

        std::env::remove_var("GS_INSTALLED_FAMILIES");
        std::env::remove_var("GS_PRETTY");
        std::env::remove_var("GS_LOG_COLOURED");

        let config = result.unwrap();
        assert_eq!(config.families().unwrap(), vec![RecordFamily::Rdm]);
        assert!(config.pretty);
        assert!(!config.log_coloured);
    }

    #[test]
    fn test_unknown_family_is_an_error() {
        let config = Config {
            installed_families: vec!["rdm".to_string(), "datacite".to_string()],
            ..Config::default()
        };
        let err = config.families().unwrap_err();
        assert!(err.to_string().contains("datacite"));
    }

    #[test]
    fn test_families_deduplicated() {
        let config = Config {
            installed_families: vec!["RDM".to_string(), "rdm".to_string()],
            ..Config::default()
        };
        assert_eq!(config.families().unwrap(), vec![RecordFamily::Rdm]);
    }
}
