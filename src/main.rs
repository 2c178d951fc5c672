mod config;
mod error;
mod logging;
mod models;
mod schema;
mod terminal;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::terminal::TerminalGuard;
use crate::ui::{App, render};

/// 事件轮询间隔，决定模拟处理与通知过期的刷新精度
const TICK_RATE: Duration = Duration::from_millis(100);

/// 获取数据目录路径 (~/.local/share/autobot/)
fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or(Error::MissingDir("数据"))?
        .join("autobot");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 配置文件路径 (~/.config/autobot/config.toml)
fn get_config_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or(Error::MissingDir("配置"))?
        .join("autobot")
        .join("config.toml"))
}

fn main() -> Result<()> {
    let config_path = get_config_path()?;
    let config = Config::load(&config_path)?;
    let data_dir = get_data_dir()?;
    logging::init(&config, &data_dir)?;
    tracing::info!(
        config = %config_path.display(),
        delay_ms = config.processing.delay_ms,
        "config loaded"
    );

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端，guard 负责在任何退出路径上恢复
    let guard = TerminalGuard::enter(io::stdout(), true)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    drop(guard);

    if let Err(err) = &result {
        tracing::error!(%err, "event loop failed");
    }
    tracing::info!("exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let timeout = app
            .composer
            .remaining(Instant::now())
            .map_or(TICK_RATE, |left| left.min(TICK_RATE));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key) {
                    break;
                }
            }
        }

        app.tick(Instant::now());
    }
    Ok(())
}
