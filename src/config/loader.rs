//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（cardify.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::{DEFAULT_MAX_CHARS, DEFAULT_MIN_CHARS, DEFAULT_TARGET_CHARS};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["cardify", "cardify.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "CARDIFY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `CARDIFY_`，层级分隔符 `__`）
/// 2. 配置文件（cardify.toml 或 cardify.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `CARDIFY_SEGMENTATION__MIN_CHARS=30`
/// - `CARDIFY_SEGMENTATION__MAX_CHARS=300`
/// - `CARDIFY_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with_env_prefix(config_path, ENV_PREFIX)
}

/// 使用指定的环境变量前缀加载配置
fn load_config_with_env_prefix(
    config_path: Option<&Path>,
    env_prefix: &str,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("segmentation.min_chars", DEFAULT_MIN_CHARS as u64)?
        .set_default("segmentation.target_chars", DEFAULT_TARGET_CHARS as u64)?
        .set_default("segmentation.max_chars", DEFAULT_MAX_CHARS as u64)?
        .set_default("log.level", "info")?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 例如: CARDIFY_SEGMENTATION__MAX_CHARS=300
    builder = builder.add_source(
        Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    config
        .segmentation
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    if config.log.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Min Chars: {}", config.segmentation.min_chars);
    tracing::info!("Target Chars: {}", config.segmentation.target_chars);
    tracing::info!("Max Chars: {}", config.segmentation.max_chars);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_inverted_rules() {
        let mut config = AppConfig::default();
        config.segmentation.target_chars = config.segmentation.max_chars + 1;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_empty_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            "[segmentation]\nmin_chars = 10\ntarget_chars = 60\nmax_chars = 80\n\n[log]\nlevel = \"warn\"\n",
        );

        let config = load_config_from_path(Some(file.path())).unwrap();

        assert_eq!(config.segmentation.min_chars, 10);
        assert_eq!(config.segmentation.target_chars, 60);
        assert_eq!(config.segmentation.max_chars, 80);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_file_falls_back_to_defaults() {
        let file = write_config("[segmentation]\nmax_chars = 400\n");

        let config = load_config_from_path(Some(file.path())).unwrap();

        assert_eq!(config.segmentation.min_chars, DEFAULT_MIN_CHARS);
        assert_eq!(config.segmentation.target_chars, DEFAULT_TARGET_CHARS);
        assert_eq!(config.segmentation.max_chars, 400);
    }

    #[test]
    fn test_invalid_rules_in_file_rejected() {
        let file = write_config("[segmentation]\nmin_chars = 100\ntarget_chars = 50\n");

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("[segmentation]\nmin_chars = 10\nmax_chars = 250\n");
        std::env::set_var("CARDIFYENVTEST_SEGMENTATION__MAX_CHARS", "300");

        let config = load_config_with_env_prefix(Some(file.path()), "CARDIFYENVTEST").unwrap();

        assert_eq!(config.segmentation.min_chars, 10);
        assert_eq!(config.segmentation.max_chars, 300);
    }

    #[test]
    fn test_missing_required_file_rejected() {
        let err = load_config_from_path(Some(Path::new("/nonexistent/cardify.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
