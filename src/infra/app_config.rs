use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::DEFAULT_FILENAME;

/// Address of a locally running analysis service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable that overrides the service address.
pub const API_URL_ENV: &str = "CRITIQUE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    /// No timeout when unset.
    pub request_timeout_secs: Option<u64>,
    pub default_filename: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
            default_filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Replaces the service address when `url` is present and non-blank.
    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
        self
    }

    /// Service address without trailing slashes.
    pub fn api_base_url(&self) -> &str {
        let trimmed = self.api_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            DEFAULT_API_URL
        } else {
            trimmed
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Reads the config file (if any) and applies the environment override.
pub fn load_config() -> AppConfig {
    let path = config_path();
    let config = match std::fs::read_to_string(&path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    };
    config.with_api_url_override(std::env::var(API_URL_ENV).ok())
}

/// Strict variant for an explicitly requested file: errors instead of falling back.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config.with_api_url_override(std::env::var(API_URL_ENV).ok()))
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("CRITIQUE_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("CRITIQUE_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("critique");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("critique");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("critique");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".config").join("critique");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".critique")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_point_at_local_service() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url(), "http://localhost:8000");
        assert_eq!(config.default_filename, "example.js");
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn override_ignores_blank_values() {
        let config = AppConfig::default().with_api_url_override(Some("   ".into()));
        assert_eq!(config.api_url, DEFAULT_API_URL);

        let config = AppConfig::default().with_api_url_override(None);
        assert_eq!(config.api_url, DEFAULT_API_URL);

        let config =
            AppConfig::default().with_api_url_override(Some("https://review.example.com/".into()));
        assert_eq!(config.api_base_url(), "https://review.example.com");
    }

    #[test]
    fn zero_timeout_means_none() {
        let config = AppConfig {
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), None);

        let config = AppConfig {
            request_timeout_secs: Some(30),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "request_timeout_secs = 45").unwrap();

        let config: AppConfig =
            toml::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(config.request_timeout_secs, Some(45));
        assert_eq!(config.default_filename, DEFAULT_FILENAME);
    }

    #[test]
    fn strict_load_reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_url = [not valid").unwrap();

        let err = load_config_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn strict_load_reports_missing_file() {
        let err = load_config_from(Path::new("/nonexistent/critique.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
