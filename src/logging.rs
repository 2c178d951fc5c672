//! 日志初始化
//!
//! 终端由 TUI 占用，日志写入数据目录下的文件。

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::Result;

pub fn init(config: &Config, data_dir: &Path) -> Result<()> {
    let path = config.log_path(data_dir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_new(&config.logging.filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    tracing::info!(log_file = %path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_second_init_is_rejected() {
        let dir = std::env::temp_dir().join(format!("autobot-log-{}", uuid::Uuid::new_v4()));
        let config = Config::default();

        init(&config, &dir).unwrap();
        assert!(dir.join("autobot.log").exists());

        assert!(matches!(init(&config, &dir), Err(Error::LogInit(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
