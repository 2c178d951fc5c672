//! 请求编辑器
//!
//! 持有草稿文本与"处理中"标记。提交后经过固定延迟模拟完成，
//! 完成时清空草稿并随机给出一条固定确认语。

use std::time::{Duration, Instant};

use rand::Rng;

use super::notify::Notice;
use crate::models::CANNED_CONFIRMATIONS;

/// 提交被拒绝的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please describe what you need before sending.")]
    EmptyDraft,
    #[error("a request is already being processed")]
    InFlight,
}

impl SubmitError {
    /// 需要展示给用户的通知；处理中相当于按钮被禁用，不提示
    pub fn notice(self) -> Option<Notice> {
        match self {
            SubmitError::EmptyDraft => Some(Notice::error("Empty request", self.to_string())),
            SubmitError::InFlight => None,
        }
    }
}

#[derive(Debug)]
pub struct RequestComposer {
    draft: String,
    /// 模拟处理的完成时刻，Some 表示处理中
    deadline: Option<Instant>,
    delay: Duration,
}

impl RequestComposer {
    pub fn new(delay: Duration) -> Self {
        Self {
            draft: String::new(),
            deadline: None,
            delay,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.deadline.is_some()
    }

    /// 发送按钮是否可用
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.draft.trim().is_empty()
    }

    /// 直接替换草稿
    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    /// 载入示例请求，原样写入草稿
    pub fn load_example(&mut self, text: &str) -> Notice {
        self.set_draft_text(text);
        tracing::debug!(example = text, "example loaded");
        Notice::info("Example loaded", text)
    }

    /// 提交草稿，开始模拟处理
    pub fn submit(&mut self, now: Instant) -> Result<Notice, SubmitError> {
        if self.draft.trim().is_empty() {
            return Err(SubmitError::EmptyDraft);
        }
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        self.deadline = Some(now + self.delay);
        tracing::info!(
            chars = self.draft.chars().count(),
            delay_ms = self.delay.as_millis() as u64,
            "submission started"
        );
        Ok(Notice::info(
            "Processing request",
            "Auto-Bot is working on your request...",
        ))
    }

    /// 推进模拟处理；到期时只返回一次完成通知
    pub fn tick<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Option<Notice> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        self.deadline = None;
        self.draft.clear();
        let confirmation = CANNED_CONFIRMATIONS[rng.random_range(0..CANNED_CONFIRMATIONS.len())];
        tracing::info!(confirmation, "submission completed");
        Some(Notice::success("Request complete", confirmation))
    }

    /// 距离完成的剩余时间
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}
