//! 终端模式管理
//!
//! 进入时开启 raw mode 与备用屏幕，Guard 被丢弃时（包括出错返回和 panic 展开）恢复终端。

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// 切换到 TUI 模式；raw_mode 为 false 时只写入控制序列
    pub fn enter(out: W, raw_mode: bool) -> io::Result<Self> {
        let mut guard = Self {
            out,
            raw_mode: false,
        };
        if raw_mode {
            enable_raw_mode()?;
            guard.raw_mode = true;
        }
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        // 尽力恢复，单步失败不影响后续步骤
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        let _ = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}
