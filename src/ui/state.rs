//! App 状态定义 (Model)
//!
//! 屏幕的全部状态，生命周期与进程一致

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::composer::RequestComposer;
use super::notify::Notifications;
use super::selector::CategorySelector;
use crate::config::Config;

/// 应用状态
pub struct App {
    pub selector: CategorySelector,
    pub composer: RequestComposer,
    pub notifications: Notifications,
    pub focus: Focus,
    pub example_index: usize,
    pub(super) rng: StdRng,
}

/// 键盘焦点所在区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Examples,
    Composer,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Categories => Focus::Examples,
            Focus::Examples => Focus::Composer,
            Focus::Composer => Focus::Categories,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Categories => Focus::Composer,
            Focus::Examples => Focus::Categories,
            Focus::Composer => Focus::Examples,
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_rng(config: &Config, rng: StdRng) -> Self {
        Self {
            selector: CategorySelector::new(),
            composer: RequestComposer::new(config.processing_delay()),
            notifications: Notifications::new(config.notification_ttl()),
            focus: Focus::Categories,
            example_index: 0,
            rng,
        }
    }
}
