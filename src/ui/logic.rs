//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use std::time::Instant;

use super::actions::Action;
use super::notify::Notice;
use super::state::{App, Focus};
use crate::models::EXAMPLE_REQUESTS;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.dispatch_at(action, Instant::now())
    }

    pub fn dispatch_at(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),

            Action::MoveLeft => self.selector.move_left(),
            Action::MoveRight => self.selector.move_right(),
            Action::MoveUp => self.move_example_up(),
            Action::MoveDown => self.move_example_down(),

            Action::Activate => match self.focus {
                Focus::Categories => {
                    let notice = self.selector.select_highlighted();
                    self.notify(notice, now);
                }
                Focus::Examples => self.load_example(self.example_index, now),
                Focus::Composer => {}
            },

            Action::SelectCategory(index) => {
                if let Some(notice) = self.selector.select_index(index) {
                    self.notify(notice, now);
                }
            }

            Action::Input(c) => {
                if self.focus == Focus::Composer {
                    self.composer.push_char(c);
                }
            }
            Action::DeleteChar => {
                if self.focus == Focus::Composer {
                    self.composer.pop_char();
                }
            }
            Action::Submit => self.submit(now),
            Action::Leave => self.focus = Focus::Categories,
        }
        false
    }

    /// 推进模拟处理并清理过期通知，由主循环定期调用
    pub fn tick(&mut self, now: Instant) {
        if let Some(notice) = self.composer.tick(now, &mut self.rng) {
            self.notify(notice, now);
        }
        self.notifications.expire(now);
    }

    // ============ 示例相关 ============

    pub fn move_example_up(&mut self) {
        if self.example_index > 0 {
            self.example_index -= 1;
        }
    }

    pub fn move_example_down(&mut self) {
        if self.example_index + 1 < EXAMPLE_REQUESTS.len() {
            self.example_index += 1;
        }
    }

    /// 载入示例并切换到编辑器
    pub fn load_example(&mut self, index: usize, now: Instant) {
        if let Some(example) = EXAMPLE_REQUESTS.get(index) {
            let notice = self.composer.load_example(example);
            self.notify(notice, now);
            self.focus = Focus::Composer;
        }
    }

    // ============ 提交相关 ============

    pub fn submit(&mut self, now: Instant) {
        match self.composer.submit(now) {
            Ok(notice) => {
                if let Some(category) = self.selector.selected() {
                    tracing::debug!(category = %category.id, "submitted with category");
                }
                self.notify(notice, now);
            }
            Err(err) => {
                tracing::warn!(%err, "submission rejected");
                if let Some(notice) = err.notice() {
                    self.notify(notice, now);
                }
            }
        }
    }

    fn notify(&mut self, notice: Notice, now: Instant) {
        self.notifications.push(notice, now);
        tracing::debug!(visible = self.notifications.len(), "notification raised");
    }
}
