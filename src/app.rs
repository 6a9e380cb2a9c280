use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::aggregate::DashboardData;
use crate::dialogs::{DialogState, TaskFormData};
use crate::editor::GridEditor;
use crate::model::{AddOutcome, TaskStore};
use crate::storage::config::{self, Config};
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 级别（决定边框配色）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
}

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 页面模式
///
/// Tasks 页负责录入和编辑；Dashboard 页在进入时计算一次聚合，
/// 退出即丢弃（拉取模型，编辑不触发重算）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Tasks,
    Dashboard,
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 当前页面
    pub mode: AppMode,
    /// 会话任务列表
    pub store: TaskStore,
    /// 表格编辑器
    pub editor: GridEditor,
    /// 对话框状态
    pub dialogs: DialogState,
    /// 进入 Dashboard 时计算的聚合结果
    pub dashboard: Option<DashboardData>,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
    /// 工时 +/- 调节步长
    pub hours_step: f64,
    /// 会话开始时间
    pub session_started: DateTime<Local>,
    /// 持久化配置
    config: Config,
}

impl App {
    pub fn new(config: Config, theme_override: Option<&str>) -> Self {
        let theme_name = theme_override.unwrap_or(&config.theme.name);
        let theme = Theme::from_name(theme_name);
        let last_system_dark = detect_system_theme();
        let colors = get_theme_colors(theme);
        let hours_step = config.entry.hours_step;

        Self {
            should_quit: false,
            mode: AppMode::Tasks,
            store: TaskStore::new(),
            editor: GridEditor::new(),
            dialogs: DialogState::new(),
            dashboard: None,
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            last_system_dark,
            hours_step,
            session_started: Local::now(),
            config,
        }
    }

    // ========== Add Task Form ==========

    /// 打开 Add Task 弹窗
    pub fn open_task_form(&mut self) {
        self.dialogs.task_form = Some(TaskFormData::new());
    }

    /// 关闭 Add Task 弹窗
    pub fn close_task_form(&mut self) {
        self.dialogs.task_form = None;
    }

    /// 提交表单：走校验路径，拒绝显示在表单内，成功后清空以便连续录入
    pub fn submit_task_form(&mut self) {
        let Some(form) = self.dialogs.task_form.as_ref() else {
            return;
        };
        let member = form.member.clone();
        let task_id = form.task_id.clone();
        let hours = form.parsed_hours();

        match self.store.add(&member, &task_id, hours) {
            AddOutcome::Added => {
                self.editor.sync(self.store.snapshot());
                if let Some(form) = self.dialogs.task_form.as_mut() {
                    form.clear_fields();
                }
                self.show_toast(ToastKind::Success, "Task added");
            }
            outcome => {
                if let Some(form) = self.dialogs.task_form.as_mut() {
                    form.set_error(rejection_message(outcome));
                }
            }
        }
    }

    // ========== Grid Editing ==========

    /// 提交单元格编辑并直写回任务列表
    pub fn grid_commit_edit(&mut self) {
        self.editor.commit_edit();
        self.push_grid();
    }

    /// 插入空行并直写回任务列表
    pub fn grid_insert_row(&mut self) {
        self.editor.insert_row();
        self.push_grid();
    }

    /// 删除选中行并直写回任务列表
    pub fn grid_delete_row(&mut self) {
        if self.editor.is_empty() {
            return;
        }
        self.editor.delete_row();
        self.push_grid();
        self.show_toast(ToastKind::Info, "Row deleted");
    }

    /// 调节选中行工时并直写回任务列表
    pub fn grid_adjust_hours(&mut self, direction: f64) {
        if self.editor.is_empty() {
            return;
        }
        self.editor.adjust_hours(direction * self.hours_step);
        self.push_grid();
    }

    /// 草稿整体覆盖任务列表（不重新校验，见 TaskStore::replace_all）
    fn push_grid(&mut self) {
        self.store.replace_all(self.editor.to_tasks());
    }

    // ========== Dashboard ==========

    /// 显式请求仪表盘：空列表只提示，不计算
    pub fn open_dashboard(&mut self) {
        if self.store.is_empty() {
            self.show_toast(ToastKind::Warning, "Add some tasks to generate the dashboard");
            return;
        }

        self.dashboard = DashboardData::compute(self.store.snapshot());
        if self.dashboard.is_some() {
            self.mode = AppMode::Dashboard;
        }
    }

    /// 返回 Tasks 页并丢弃聚合结果
    pub fn close_dashboard(&mut self) {
        self.dashboard = None;
        self.mode = AppMode::Tasks;
    }

    /// 重新计算当前仪表盘
    pub fn refresh_dashboard(&mut self) {
        self.dashboard = DashboardData::compute(self.store.snapshot());
        if self.dashboard.is_none() {
            // 列表在别处被清空的兜底：退回 Tasks 页
            self.mode = AppMode::Tasks;
        } else {
            self.show_toast(ToastKind::Info, "Dashboard recomputed");
        }
    }

    // ========== Theme Selector ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        // 找到当前主题在列表中的索引
        let themes = Theme::all();
        self.theme_selector_index = themes
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并持久化
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;
        self.show_toast(ToastKind::Info, format!("Theme: {}", self.theme.label()));

        self.config.theme.name = self.theme.label().to_string();
        let _ = config::save_config(&self.config);
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    // ========== Misc ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, kind, Duration::from_secs(2)));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        // 只在 Auto 模式下检查
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default(), None)
    }
}

/// 表单校验拒绝的提示文案
fn rejection_message(outcome: AddOutcome) -> &'static str {
    match outcome {
        AddOutcome::Added => "",
        AddOutcome::EmptyMember => "Member cannot be empty",
        AddOutcome::EmptyTaskId => "Task ID cannot be empty",
        AddOutcome::NonPositiveHours => "Hours must be greater than 0",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_form(member: &str, task_id: &str, hours: &str) -> App {
        let mut app = App::default();
        app.open_task_form();
        let form = app.dialogs.task_form.as_mut().unwrap();
        form.member = member.to_string();
        form.task_id = task_id.to_string();
        form.hours = hours.to_string();
        app
    }

    #[test]
    fn test_submit_valid_form_appends_and_clears() {
        let mut app = app_with_form(" alice ", "proj-1", "3.5");
        app.submit_task_form();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.snapshot()[0].member, "Alice");
        assert_eq!(app.store.snapshot()[0].task_id, "PROJ-1");
        assert_eq!(app.editor.rows.len(), 1);

        // 表单保留但已清空，Toast 提示成功
        let form = app.dialogs.task_form.as_ref().unwrap();
        assert!(form.member.is_empty());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_submit_invalid_form_sets_error_and_keeps_store() {
        let mut app = app_with_form("alice", "proj-1", "0");
        app.submit_task_form();

        assert!(app.store.is_empty());
        let form = app.dialogs.task_form.as_ref().unwrap();
        assert_eq!(form.error.as_deref(), Some("Hours must be greater than 0"));
        // 输入保留，便于修正
        assert_eq!(form.member, "alice");
    }

    #[test]
    fn test_dashboard_on_empty_store_warns_and_stays() {
        let mut app = App::default();
        app.open_dashboard();

        assert_eq!(app.mode, AppMode::Tasks);
        assert!(app.dashboard.is_none());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_dashboard_computes_on_entry_and_drops_on_exit() {
        let mut app = App::default();
        app.store.add("Carol", "T1", 1.0);
        app.store.add("Dave", "T2", 9.0);
        app.editor.sync(app.store.snapshot());

        app.open_dashboard();
        assert_eq!(app.mode, AppMode::Dashboard);
        let data = app.dashboard.as_ref().unwrap();
        assert_eq!(data.total, 10.0);
        assert_eq!(data.underloaded.len(), 1);

        app.close_dashboard();
        assert_eq!(app.mode, AppMode::Tasks);
        assert!(app.dashboard.is_none());
    }

    #[test]
    fn test_reentering_dashboard_recomputes_from_current_store() {
        let mut app = App::default();
        app.store.add("Carol", "T1", 1.0);
        app.editor.sync(app.store.snapshot());

        app.open_dashboard();
        assert_eq!(app.dashboard.as_ref().unwrap().total, 1.0);
        app.close_dashboard();

        // 编辑后再次请求：从当前列表重算，没有旧值缓存
        app.store.add("Dave", "T2", 9.0);
        app.editor.sync(app.store.snapshot());
        app.open_dashboard();
        assert_eq!(app.dashboard.as_ref().unwrap().total, 10.0);
    }

    #[test]
    fn test_grid_edits_write_through_without_validation() {
        let mut app = App::default();
        app.store.add("Alice", "T1", 2.0);
        app.editor.sync(app.store.snapshot());

        // 把工时改成非法文本，直写后按 0.0 落库
        app.editor.selected_col = crate::editor::Column::Hours;
        app.editor.begin_edit();
        app.editor.buffer = Some("abc".to_string());
        app.grid_commit_edit();

        assert_eq!(app.store.snapshot()[0].hours, 0.0);
    }

    #[test]
    fn test_grid_insert_and_delete_rows_write_through() {
        let mut app = App::default();
        app.store.add("Alice", "T1", 2.0);
        app.editor.sync(app.store.snapshot());

        app.grid_insert_row();
        assert_eq!(app.store.len(), 2);
        // 空行原样入库
        assert_eq!(app.store.snapshot()[1].member, "");

        app.grid_delete_row();
        app.grid_delete_row();
        assert!(app.store.is_empty());
    }
}
