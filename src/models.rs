use std::fmt;

use ratatui::style::Color;

/// 分类标识（编译期固定的封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    EnterpriseIt,
    Healthcare,
    Workflow,
}

impl CategoryId {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::EnterpriseIt => "enterprise-it",
            CategoryId::Healthcare => "healthcare",
            CategoryId::Workflow => "workflow",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 支持分类卡片
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub icon: &'static str,
    pub color: Color,
}

/// 全部分类，按显示顺序排列
pub static CATEGORIES: [Category; 3] = [
    Category {
        id: CategoryId::EnterpriseIt,
        title: "Enterprise IT",
        description: "Employee support, password resets, system troubleshooting",
        examples: &["Reset password", "Account access", "System issues"],
        icon: "🖥",
        color: Color::Blue,
    },
    Category {
        id: CategoryId::Healthcare,
        title: "Healthcare",
        description: "Appointment booking, medicine reminders, health reports",
        examples: &["Book appointment", "Medicine reminders", "Report management"],
        icon: "❤",
        color: Color::Red,
    },
    Category {
        id: CategoryId::Workflow,
        title: "Workflow Automation",
        description: "Task creation, notifications, tool integrations",
        examples: &["Create Trello card", "Send notifications", "Generate reports"],
        icon: "⚙",
        color: Color::Magenta,
    },
];

/// 示例请求
pub const EXAMPLE_REQUESTS: [&str; 4] = [
    "Book a cardiologist appointment next Monday at 10 AM",
    "Reset my office email and Slack passwords",
    "Create a Trello card for project tasks and notify the team",
    "Remind me to take my medicines every day at 8 PM",
];

/// 模拟处理完成后的固定确认语
pub const CANNED_CONFIRMATIONS: [&str; 4] = [
    "Your request has been processed successfully!",
    "Done! Auto-Bot has taken care of it.",
    "Request completed. You'll get a confirmation shortly.",
    "All set! Your task has been automated.",
];

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// 按 ID 查找分类
pub fn category(id: CategoryId) -> &'static Category {
    // 每个 CategoryId 在 CATEGORIES 中都有且只有一项
    match id {
        CategoryId::EnterpriseIt => &CATEGORIES[0],
        CategoryId::Healthcare => &CATEGORIES[1],
        CategoryId::Workflow => &CATEGORIES[2],
    }
}
