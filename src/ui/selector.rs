//! 分类选择器
//!
//! 单选，重复选择同一分类不会取消选中。

use super::notify::Notice;
use crate::models::{Category, CategoryId, categories, category};

#[derive(Debug, Default)]
pub struct CategorySelector {
    selected: Option<CategoryId>,
    cursor: usize,
}

impl CategorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选中分类，替换之前的选择
    pub fn select(&mut self, id: CategoryId) -> Notice {
        self.selected = Some(id);
        let category = category(id);
        tracing::info!(category = %id, "category selected");
        Notice::info(
            "Category selected",
            format!("{} requests will be handled by Auto-Bot", category.title),
        )
    }

    /// 选中光标所在的分类
    pub fn select_highlighted(&mut self) -> Notice {
        let id = self.highlighted().id;
        self.select(id)
    }

    /// 按显示序号选中（从 0 开始），越界时忽略
    pub fn select_index(&mut self, index: usize) -> Option<Notice> {
        let id = categories().get(index)?.id;
        self.cursor = index;
        Some(self.select(id))
    }

    pub fn selected(&self) -> Option<&'static Category> {
        self.selected.map(category)
    }

    pub fn selected_id(&self) -> Option<CategoryId> {
        self.selected
    }

    pub fn highlighted(&self) -> &'static Category {
        &categories()[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor + 1 < categories().len() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notify::NoticeKind;

    #[test]
    fn test_starts_without_selection() {
        let selector = CategorySelector::new();
        assert!(selector.selected().is_none());
        assert_eq!(selector.cursor(), 0);
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut selector = CategorySelector::new();
        selector.select(CategoryId::EnterpriseIt);
        selector.select(CategoryId::Workflow);
        assert_eq!(selector.selected_id(), Some(CategoryId::Workflow));

        // 再次选择同一分类仍保持选中
        selector.select(CategoryId::Workflow);
        assert_eq!(selector.selected_id(), Some(CategoryId::Workflow));
    }

    #[test]
    fn test_select_notice_names_category() {
        let mut selector = CategorySelector::new();
        let notice = selector.select(CategoryId::Healthcare);
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.body.contains("Healthcare"));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut selector = CategorySelector::new();
        selector.move_left();
        assert_eq!(selector.cursor(), 0);
        for _ in 0..10 {
            selector.move_right();
        }
        assert_eq!(selector.cursor(), categories().len() - 1);
        selector.select_highlighted();
        assert_eq!(selector.selected().unwrap().title, "Workflow Automation");
    }

    #[test]
    fn test_select_index_out_of_range() {
        let mut selector = CategorySelector::new();
        assert!(selector.select_index(3).is_none());
        assert!(selector.selected().is_none());

        assert!(selector.select_index(1).is_some());
        assert_eq!(selector.selected_id(), Some(CategoryId::Healthcare));
        assert_eq!(selector.cursor(), 1);
    }
}
