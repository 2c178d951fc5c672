//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    match focus {
        Focus::Categories => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveRight),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
            KeyCode::Char(c @ '1'..='9') => {
                Some(Action::SelectCategory(c as usize - '1' as usize))
            }
            _ => None,
        },
        Focus::Examples => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Enter => Some(Action::Activate),
            KeyCode::Esc => Some(Action::Leave),
            _ => None,
        },
        Focus::Composer => match key.code {
            KeyCode::Esc => Some(Action::Leave),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) if is_plain(key.modifiers) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 只有无修饰键或 Shift 的字符才写入草稿
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    get_action(app.focus, key).is_some_and(|action| app.dispatch(action))
}
