//! 通用 UI 组件
//!
//! 卡片边框、输入框、通知框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::notify::{Notice, NoticeKind};

/// [组件] 卡片边框，返回内部区域
pub fn render_card_frame(frame: &mut Frame, area: Rect, title: Line, border: Style) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带有标题和占位提示的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
) {
    let border = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let text = if value.is_empty() {
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else if is_focused {
        Line::from(vec![Span::raw(value), Span::styled("▏", border)])
    } else {
        Line::from(value)
    };

    let input = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);
}

/// [组件] 单条通知
pub fn render_toast(frame: &mut Frame, area: Rect, notice: &Notice) {
    frame.render_widget(Clear, area);

    let color = match notice.kind {
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    };

    let toast = Paragraph::new(notice.body.as_str())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    notice.title.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(toast, area);
}
