// LogsView - platform/config.rs
//
// Platform-specific configuration directory resolution, config.toml loading
// with startup validation, and logs directory resolution.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogsView configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logsview/).
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logs]` section.
    pub logs: LogsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[logs]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LogsSection {
    /// Directory holding the `*.log` files.
    pub dir: Option<String>,
    /// Entries returned by `show` when no limit is passed.
    pub default_limit: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Logs directory from config, before env/CLI overrides.
    pub logs_dir: Option<PathBuf>,
    /// Default entry limit for content retrieval.
    pub default_limit: usize,
    /// Logging level string.
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logs_dir: None,
            default_limit: constants::DEFAULT_CONTENT_LIMIT,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings.
/// If the file is unreadable or unparseable, returns defaults with a warning.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(config_path) {
        Ok(raw) => raw,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    if let Some(ref dir) = raw.logs.dir {
        if !dir.trim().is_empty() {
            config.logs_dir = Some(PathBuf::from(dir));
        }
    }

    if let Some(limit) = raw.logs.default_limit {
        if (1..=constants::MAX_CONTENT_LIMIT).contains(&limit) {
            config.default_limit = limit;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "[logs] default_limit".to_string(),
                value: limit.to_string(),
                expected: format!("1-{}", constants::MAX_CONTENT_LIMIT),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_CONTENT_LIMIT
            ));
        }
    }

    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn read_raw_config(config_path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source: e,
    })
}

// =============================================================================
// Logs directory resolution
// =============================================================================

/// Pick the logs directory.
///
/// Priority: explicit argument > `LOGS_DIR` env var > `[logs] dir` >
/// `<app-root>/storage/logs`, where app-root is `APP_ROOT` or the current
/// directory.
pub fn resolve_logs_dir(explicit: Option<&Path>, config: &AppConfig) -> PathBuf {
    let env_dir = std::env::var_os(constants::LOGS_DIR_ENV).map(PathBuf::from);
    let app_root = std::env::var_os(constants::APP_ROOT_ENV).map(PathBuf::from);
    choose_logs_dir(explicit, env_dir, config, app_root)
}

fn choose_logs_dir(
    explicit: Option<&Path>,
    env_dir: Option<PathBuf>,
    config: &AppConfig,
    app_root: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Some(dir) = env_dir.filter(|d| !d.as_os_str().is_empty()) {
        return dir;
    }
    if let Some(ref dir) = config.logs_dir {
        return dir.clone();
    }
    app_root
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::DEFAULT_LOGS_SUBDIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let (_dir, path) = write_config(
            "[logs]\ndir = \"/var/app/logs\"\ndefault_limit = 200\n\n[logging]\nlevel = \"DEBUG\"\n",
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.logs_dir, Some(PathBuf::from("/var/app/logs")));
        assert_eq!(config.default_limit, 200);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_warn_and_default() {
        let (_dir, path) = write_config("[logs]\ndefault_limit = 0\n[logging]\nlevel = \"loud\"\n");
        let (config, warnings) = load_config(&path);
        assert_eq!(config.default_limit, constants::DEFAULT_CONTENT_LIMIT);
        assert!(config.log_level.is_none());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("default_limit"));
    }

    #[test]
    fn test_unparseable_config_warns_and_defaults() {
        let (_dir, path) = write_config("[logs\ndir = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn test_logs_dir_priority() {
        let config = AppConfig {
            logs_dir: Some(PathBuf::from("/from/config")),
            ..Default::default()
        };

        assert_eq!(
            choose_logs_dir(
                Some(Path::new("/explicit")),
                Some(PathBuf::from("/from/env")),
                &config,
                None
            ),
            PathBuf::from("/explicit")
        );
        assert_eq!(
            choose_logs_dir(None, Some(PathBuf::from("/from/env")), &config, None),
            PathBuf::from("/from/env")
        );
        assert_eq!(
            choose_logs_dir(None, None, &config, None),
            PathBuf::from("/from/config")
        );
    }

    #[test]
    fn test_logs_dir_defaults_under_app_root() {
        let config = AppConfig::default();
        assert_eq!(
            choose_logs_dir(None, None, &config, Some(PathBuf::from("/srv/site"))),
            PathBuf::from("/srv/site/storage/logs")
        );
        assert_eq!(
            choose_logs_dir(None, None, &config, None),
            PathBuf::from("./storage/logs")
        );
    }
}
