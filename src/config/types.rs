//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::LengthRules;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 卡片长度规则
    #[serde(default)]
    pub segmentation: LengthRules,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    /// 构造 EnvFilter 指令
    pub fn filter_directive(&self) -> String {
        format!("{},cardify={}", self.level, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.segmentation, LengthRules::default());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_filter_directive() {
        let log = LogConfig {
            level: "debug".to_string(),
        };
        assert_eq!(log.filter_directive(), "debug,cardify=debug");
    }
}
