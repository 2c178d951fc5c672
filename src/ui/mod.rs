//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，组合分类选择器、请求编辑器与通知队列
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs): 用户交互转化为明确的语义化 Action

pub mod actions;
pub mod composer;
pub mod input;
pub mod logic;
pub mod notify;
pub mod selector;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::App;
pub use view::render;
