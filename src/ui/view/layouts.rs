//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 将区域横向等分为 n 列
pub fn columns(area: Rect, n: usize) -> Vec<Rect> {
    let n = n.max(1) as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(area)
        .to_vec()
}

/// 右上角第 index 个通知框的位置，超出区域时返回 None
pub fn toast_rect(area: Rect, index: u16, width: u16, height: u16) -> Option<Rect> {
    let width = width.min(area.width);
    let y = area.y + 1 + index * height;
    if y + height > area.y + area.height {
        return None;
    }
    Some(Rect {
        x: area.x + area.width - width,
        y,
        width,
        height,
    })
}
