use std::io;

use crate::config::ConfigError;

/// 启动与运行期间的致命错误
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("无法获取用户{0}目录")]
    MissingDir(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid log filter")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to install log subscriber")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
