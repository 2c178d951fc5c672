//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    // 分类 / 示例导航
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Activate,              // Enter：选中分类 / 载入示例
    SelectCategory(usize), // 1-3 直接选择

    // 编辑器
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    Submit,      // Enter
    Leave,       // Esc
}
