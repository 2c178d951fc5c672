//! 通知 (toast)
//!
//! 组件只产出 Notice（内容），由 Notifications 打上时间戳并负责过期。

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// 同时保留的最大通知数
pub const MAX_VISIBLE: usize = 3;

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// 通知内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, body)
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, body)
    }

    fn new(kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// 已显示的通知
#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub raised_at: Instant,
}

/// 通知队列，最新的在末尾
#[derive(Debug)]
pub struct Notifications {
    items: VecDeque<Toast>,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::with_capacity(MAX_VISIBLE),
            ttl,
        }
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        if self.items.len() == MAX_VISIBLE {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            notice,
            raised_at: now,
        });
    }

    /// 移除已过期的通知
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|toast| now.saturating_duration_since(toast.raised_at) < ttl);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.back().map(|toast| &toast.notice)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_after_ttl() {
        let start = Instant::now();
        let mut notifications = Notifications::new(Duration::from_millis(100));
        notifications.push(Notice::info("a", ""), start);
        notifications.push(Notice::info("b", ""), start + Duration::from_millis(50));

        notifications.expire(start + Duration::from_millis(99));
        assert_eq!(notifications.len(), 2);

        notifications.expire(start + Duration::from_millis(100));
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications.latest().unwrap().title, "b");

        notifications.expire(start + Duration::from_millis(200));
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let now = Instant::now();
        let mut notifications = Notifications::new(Duration::from_secs(5));
        for title in ["1", "2", "3", "4"] {
            notifications.push(Notice::info(title, ""), now);
        }

        let titles: Vec<_> = notifications
            .iter()
            .map(|t| t.notice.title.as_str())
            .collect();
        assert_eq!(titles, ["2", "3", "4"]);

        let newest_first: Vec<_> = notifications
            .iter()
            .rev()
            .map(|t| t.notice.title.as_str())
            .collect();
        assert_eq!(newest_first, ["4", "3", "2"]);
    }
}
