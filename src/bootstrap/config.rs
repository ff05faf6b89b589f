//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read the TOML configuration file / 读取 TOML 配置文件
//! - Map it onto the `AppConfig` DTO / 映射为 AppConfig DTO
//! - Resolve empty paths to platform defaults / 将空路径解析为平台默认路径
//!
//! `AppConfig` itself holds facts only: a missing key is an empty value, not
//! an error. Defaults are applied later, by [`resolve_paths`].
//! `AppConfig` 只保存事实：缺失的键是空值，不是错误。

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Directory under the platform data dir that holds everything DriverHub writes.
pub const APP_DIR_NAME: &str = "driverhub";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory for the per-domain SQLite cache files (may be empty)
    /// SQLite 缓存文件目录（可能为空）
    pub cache_dir: PathBuf,

    /// Root of the JSON profile document store (may be empty)
    /// JSON 资料文档存储根目录（可能为空）
    pub documents_dir: PathBuf,

    /// Tracing filter directives; `RUST_LOG` takes precedence
    pub log_filter: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// No validation and no defaults here. Empty strings are valid facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            cache_dir: PathBuf::from(str_at("storage", "cache_dir")),
            documents_dir: PathBuf::from(str_at("remote", "documents_dir")),
            log_filter: str_at("logging", "filter"),
        })
    }

    /// Create empty AppConfig (all empty values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
/// 文件无法读取或不是有效 TOML 时返回错误。
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Load the configuration the CLI should run with.
///
/// - An explicit path must load; its errors are returned
/// - Otherwise `<data dir>/driverhub/config.toml` is used when it exists
/// - Otherwise the empty config
pub fn load_app_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match default_app_dir() {
        Some(dir) if dir.join(CONFIG_FILE_NAME).is_file() => {
            load_config(&dir.join(CONFIG_FILE_NAME))
        }
        _ => Ok(AppConfig::empty()),
    }
}

/// Paths and settings after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub cache_dir: PathBuf,
    pub documents_dir: PathBuf,
    pub log_filter: String,
}

/// Fill empty config values with defaults under `base_dir`.
pub fn resolve_with_base(config: &AppConfig, base_dir: &Path) -> ResolvedConfig {
    let or_default = |value: &Path, default: &str| {
        if value.as_os_str().is_empty() {
            base_dir.join(default)
        } else {
            value.to_path_buf()
        }
    };

    ResolvedConfig {
        cache_dir: or_default(&config.cache_dir, "cache"),
        documents_dir: or_default(&config.documents_dir, "documents"),
        log_filter: if config.log_filter.trim().is_empty() {
            DEFAULT_LOG_FILTER.to_string()
        } else {
            config.log_filter.clone()
        },
    }
}

/// Fill empty config values with defaults under the platform data dir.
pub fn resolve_paths(config: &AppConfig) -> anyhow::Result<ResolvedConfig> {
    let base = default_app_dir().context("Failed to determine the platform data directory")?;
    Ok(resolve_with_base(config, &base))
}

fn default_app_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME))
}
