//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{App, Focus};
use crate::models::{EXAMPLE_REQUESTS, categories};
use components::{render_card_frame, render_input_widget, render_toast};
use layouts::{columns, toast_rect};

const TAGLINE: &str =
    "Universal AI-powered automation assistant for Enterprise IT, Healthcare, and Workflow Management";
const BADGES: [&str; 3] = ["⚡ Instant Actions", "⏱ 24/7 Available", "✔ Smart Automation"];
const COMPOSER_HINT: &str =
    "Describe your request and I'll handle it automatically or connect you with the right person.";
const PLACEHOLDER: &str =
    "Type your request here... (e.g., 'Book a doctor appointment for next Friday at 2 PM')";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 标题
            Constraint::Length(8), // 分类
            Constraint::Length(6), // 示例
            Constraint::Min(8),    // 编辑器
            Constraint::Length(3), // 帮助
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_categories(frame, app, chunks[1]);
    render_examples(frame, app, chunks[2]);
    render_composer(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);

    // 通知浮在右上角
    render_toasts(frame, app, area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let badge_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    let mut badges = Vec::new();
    for badge in BADGES {
        badges.push(Span::styled(format!(" {badge} "), badge_style));
        badges.push(Span::raw(" "));
    }

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "🤖 Auto-Bot",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(TAGLINE),
        Line::from(badges),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let outer = Block::default()
        .title("What can I help you with?")
        .borders(Borders::TOP);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let focused = app.focus == Focus::Categories;
    let selected = app.selector.selected_id();

    for (i, (category, cell)) in categories()
        .iter()
        .zip(columns(inner, categories().len()))
        .enumerate()
    {
        let is_selected = selected == Some(category.id);
        let is_highlighted = focused && i == app.selector.cursor();

        let border = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if is_highlighted {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        // 光标用反色标题表示，与选中的黄色边框互不覆盖
        let mut title_style = Style::default().add_modifier(Modifier::BOLD);
        if is_highlighted {
            title_style = title_style.add_modifier(Modifier::REVERSED);
        }
        let title = Line::from(vec![
            Span::styled(format!("{} ", category.icon), Style::default().fg(category.color)),
            Span::styled(format!("[{}] {}", i + 1, category.title), title_style),
        ]);
        let body_area = render_card_frame(frame, cell, title, border);

        let body = Paragraph::new(vec![
            Line::from(category.description),
            Line::from(Span::styled(
                format!("Examples: {}", category.examples.join(" · ")),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(body, body_area);
    }
}

fn render_examples(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Examples;
    let items: Vec<ListItem> = EXAMPLE_REQUESTS
        .iter()
        .map(|example| ListItem::new(*example))
        .collect();

    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title("Try these examples")
                .borders(Borders::ALL)
                .border_style(border),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.example_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_composer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title("Chat with Auto-Bot")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 说明
            Constraint::Min(3),    // 草稿
            Constraint::Length(1), // 分类 + 发送按钮
            Constraint::Length(1), // 处理状态
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(COMPOSER_HINT).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    render_input_widget(
        frame,
        chunks[1],
        "Request",
        app.composer.draft(),
        PLACEHOLDER,
        app.focus == Focus::Composer,
    );

    let mut status = Vec::new();
    if let Some(category) = app.selector.selected() {
        status.push(Span::styled(
            format!(" Category: {} ", category.title),
            Style::default().fg(category.color).add_modifier(Modifier::BOLD),
        ));
        status.push(Span::raw("  "));
    }
    let (label, style) = if app.composer.is_submitting() {
        ("[ Processing... ]", Style::default().fg(Color::Yellow))
    } else if app.composer.can_submit() {
        (
            "[ Send Request ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ Send Request ]", Style::default().fg(Color::DarkGray))
    };
    status.push(Span::styled(label, style));
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[2]);

    if app.composer.is_submitting() {
        let processing = Paragraph::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Cyan)),
            Span::raw("Auto-Bot is processing your request..."),
        ]));
        frame.render_widget(processing, chunks[3]);
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Categories => "[←/→] 移动  [Enter] 选择  [1-3] 快速选择  [Tab] 切换  [q] 退出",
        Focus::Examples => "[j/k] 导航  [Enter] 载入示例  [Tab] 切换  [q] 退出",
        Focus::Composer => "[Enter] 发送  [Esc] 离开编辑  [Tab] 切换  [Ctrl-C] 退出",
    };

    // 附带最近一条通知
    let text = match app.notifications.latest() {
        Some(notice) => format!("{}  |  {}", help_text, notice.title),
        None => help_text.to_string(),
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_toasts(frame: &mut Frame, app: &App, area: Rect) {
    if app.notifications.is_empty() {
        return;
    }
    // 最新的在最上方
    for (i, toast) in app.notifications.iter().rev().enumerate() {
        let Some(rect) = toast_rect(area, i as u16, 44, 4) else {
            break;
        };
        render_toast(frame, rect, &toast.notice);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::config::Config;
    use crate::models::CategoryId;

    fn draw(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 文本首字符所在单元格的坐标
    fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
        let chars: Vec<String> = text.chars().map(String::from).collect();
        let area = buffer.area;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let fits = (x as usize + chars.len()) <= area.right() as usize;
                if fits
                    && chars
                        .iter()
                        .enumerate()
                        .all(|(i, c)| buffer[(x + i as u16, y)].symbol() == c)
                {
                    return Some((x, y));
                }
            }
        }
        None
    }

    fn app() -> App {
        App::with_rng(&Config::default(), StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_initial_screen() {
        let mut app = app();
        let text = screen_text(&draw(&mut app));
        assert!(text.contains("Auto-Bot"));
        assert!(text.contains("Enterprise IT"));
        assert!(text.contains("Workflow Automation"));
        assert!(text.contains(EXAMPLE_REQUESTS[0]));
        assert!(text.contains("Type your request here..."));
        assert!(!text.contains("Category:"));
        assert!(!text.contains("is processing your request"));
    }

    #[test]
    fn test_selected_category_badge() {
        let mut app = app();
        app.selector.select(CategoryId::Healthcare);
        let text = screen_text(&draw(&mut app));
        assert!(text.contains("Category: Healthcare"));
    }

    #[test]
    fn test_processing_status_line() {
        let mut app = app();
        app.composer.set_draft_text("Reset my office email and Slack passwords");
        app.submit(Instant::now());

        let text = screen_text(&draw(&mut app));
        assert!(text.contains("Auto-Bot is processing your request..."));
        assert!(text.contains("[ Processing... ]"));
        assert!(text.contains("Processing request"));
    }

    #[test]
    fn test_composer_description_line() {
        let mut app = app();
        let text = screen_text(&draw(&mut app));
        assert!(text.contains(COMPOSER_HINT));
    }

    #[test]
    fn test_cursor_visible_on_selected_card() {
        let mut app = app();
        app.selector.select(CategoryId::EnterpriseIt);
        let buffer = draw(&mut app);

        let pos = find_text(&buffer, "[1] Enterprise IT").unwrap();
        assert!(buffer[pos].modifier.contains(Modifier::REVERSED));

        let other = find_text(&buffer, "[2] Healthcare").unwrap();
        assert!(!buffer[other].modifier.contains(Modifier::REVERSED));
    }
}
