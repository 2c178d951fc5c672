//! 配置加载
//!
//! 读取 `~/.config/autobot/config.toml`（文件可选，所有字段都有默认值），
//! 然后应用环境变量覆盖，最后校验。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// 模拟处理延迟上限（毫秒）
const MAX_DELAY_MS: u64 = 60_000;

/// 顶层配置
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub notifications: NotificationConfig,
    pub logging: LoggingConfig,
}

/// 模拟处理
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// 提交后到完成的固定延迟
    pub delay_ms: u64,
}

/// 通知（toast）
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// 通知显示时长
    pub ttl_ms: u64,
}

/// 日志
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 过滤指令（`RUST_LOG` 语法）
    pub filter: String,
    /// 日志文件，相对路径基于数据目录
    pub file: PathBuf,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { delay_ms: 2000 }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { ttl_ms: 4000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "autobot=info".to_string(),
            file: PathBuf::from("autobot.log"),
        }
    }
}

impl Config {
    /// 从指定路径加载配置，再应用环境变量覆盖
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(ms) = var("AUTOBOT_DELAY_MS").and_then(|v| v.parse().ok()) {
            self.processing.delay_ms = ms;
        }
        if let Some(ms) = var("AUTOBOT_NOTIFY_TTL_MS").and_then(|v| v.parse().ok()) {
            self.notifications.ttl_ms = ms;
        }
        if let Some(filter) = var("AUTOBOT_LOG") {
            self.logging.filter = filter;
        }
        if let Some(filter) = var("RUST_LOG") {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.delay_ms == 0 || self.processing.delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "processing.delay_ms must be between 1 and {MAX_DELAY_MS}"
            )));
        }
        if self.notifications.ttl_ms == 0 {
            return Err(ConfigError::Validation(
                "notifications.ttl_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing.delay_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notifications.ttl_ms)
    }

    /// 日志文件的绝对路径
    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        if self.logging.file.is_absolute() {
            self.logging.file.clone()
        } else {
            data_dir.join(&self.logging.file)
        }
    }
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.processing_delay(), Duration::from_millis(2000));
        assert_eq!(config.notification_ttl(), Duration::from_millis(4000));
        assert_eq!(config.logging.filter, "autobot=info");
    }

    #[test]
    fn test_parse_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.processing.delay_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml() {
        let config: Config = toml::from_str(
            "
            [processing]
            delay_ms = 500

            [notifications]
            ttl_ms = 1500

            [logging]
            filter = 'autobot=debug'
            file = '/tmp/autobot.log'
            ",
        )
        .unwrap();

        assert_eq!(config.processing.delay_ms, 500);
        assert_eq!(config.notifications.ttl_ms, 1500);
        assert_eq!(config.logging.filter, "autobot=debug");
        assert_eq!(
            config.log_path(Path::new("/data")),
            PathBuf::from("/tmp/autobot.log")
        );
    }

    #[test]
    fn test_relative_log_path_uses_data_dir() {
        let config = Config::default();
        assert_eq!(
            config.log_path(Path::new("/data/autobot")),
            PathBuf::from("/data/autobot/autobot.log")
        );
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("AUTOBOT_DELAY_MS", "750"),
            ("AUTOBOT_NOTIFY_TTL_MS", "not-a-number"),
            ("AUTOBOT_LOG", "autobot=trace"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.processing.delay_ms, 750);
        // 无法解析的值保持默认
        assert_eq!(config.notifications.ttl_ms, 4000);
        assert_eq!(config.logging.filter, "autobot=trace");
    }

    #[test]
    fn test_rust_log_wins_over_autobot_log() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| match key {
            "AUTOBOT_LOG" => Some("autobot=debug".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_validate_rejects_zero_delay() {
        let config: Config = toml::from_str("[processing]\ndelay_ms = 0").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let config: Config = toml::from_str("[notifications]\nttl_ms = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("autobot-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[processing\ndelay_ms = ").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::Parse(_))
        ));
        assert!(Config::from_file(&dir.join("missing.toml")).is_ok());

        fs::remove_dir_all(&dir).unwrap();
    }
}
