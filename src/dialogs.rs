//! 对话框状态管理
//!
//! 管理所有 TUI 对话框的显示状态和数据。

// 从 ui/components 导入对话框数据类型
pub use crate::ui::components::task_form::TaskFormData;

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// Add Task 弹窗
    pub task_form: Option<TaskFormData>,
    /// 是否显示帮助面板
    pub show_help: bool,
}

impl DialogState {
    /// 创建新的对话框状态
    pub fn new() -> Self {
        Self::default()
    }
}
