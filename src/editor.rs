//! 任务表格的就地编辑状态
//!
//! 表格行是草稿：工时按文本持有，允许空行和半成品行存在。每次提交
//! 编辑后由 App 将草稿整体转换成记录序列，经 `replace_all` 直写回
//! 任务列表（不走 `add` 的校验路径）。

use crate::model::Task;

/// 表格列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Member,
    TaskId,
    Hours,
}

impl Default for Column {
    fn default() -> Self {
        Column::Member
    }
}

impl Column {
    pub fn next(&self) -> Self {
        match self {
            Column::Member => Column::TaskId,
            Column::TaskId => Column::Hours,
            Column::Hours => Column::Member,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Column::Member => Column::Hours,
            Column::TaskId => Column::Member,
            Column::Hours => Column::TaskId,
        }
    }
}

/// 一行草稿
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowDraft {
    pub member: String,
    pub task_id: String,
    /// 工时文本，提交时解析；解析失败按 0.0 处理
    pub hours: String,
}

impl RowDraft {
    fn from_task(task: &Task) -> Self {
        Self {
            member: task.member.clone(),
            task_id: task.task_id.clone(),
            // f64 Display 给出最短往返表示，避免精度丢失
            hours: task.hours.to_string(),
        }
    }

    fn to_task(&self) -> Task {
        Task::new(
            self.member.clone(),
            self.task_id.clone(),
            self.hours.trim().parse().unwrap_or(0.0),
        )
    }

    fn cell(&self, col: Column) -> &str {
        match col {
            Column::Member => &self.member,
            Column::TaskId => &self.task_id,
            Column::Hours => &self.hours,
        }
    }

    fn set_cell(&mut self, col: Column, value: String) {
        match col {
            Column::Member => self.member = value,
            Column::TaskId => self.task_id = value,
            Column::Hours => self.hours = value,
        }
    }
}

/// 表格编辑器状态
#[derive(Debug, Default)]
pub struct GridEditor {
    pub rows: Vec<RowDraft>,
    pub selected_row: usize,
    pub selected_col: Column,
    /// 正在编辑的单元格缓冲，None 表示未处于编辑态
    pub buffer: Option<String>,
}

impl GridEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从任务列表重建草稿（取消进行中的编辑，收敛选中位置）
    pub fn sync(&mut self, tasks: &[Task]) {
        self.rows = tasks.iter().map(RowDraft::from_task).collect();
        self.buffer = None;
        self.clamp_selection();
    }

    /// 草稿整体转换成记录序列（原样透传，不做校验）
    pub fn to_tasks(&self) -> Vec<Task> {
        self.rows.iter().map(RowDraft::to_task).collect()
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 选中下一行
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected_row = (self.selected_row + 1) % self.rows.len();
    }

    /// 选中上一行
    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected_row = if self.selected_row == 0 {
            self.rows.len() - 1
        } else {
            self.selected_row - 1
        };
    }

    pub fn next_col(&mut self) {
        self.selected_col = self.selected_col.next();
    }

    pub fn prev_col(&mut self) {
        self.selected_col = self.selected_col.prev();
    }

    /// 开始编辑当前单元格
    pub fn begin_edit(&mut self) {
        if let Some(row) = self.rows.get(self.selected_row) {
            self.buffer = Some(row.cell(self.selected_col).to_string());
        }
    }

    /// 编辑缓冲输入字符
    pub fn input_char(&mut self, c: char) {
        if let Some(ref mut buffer) = self.buffer {
            buffer.push(c);
        }
    }

    /// 编辑缓冲删除字符
    pub fn delete_char(&mut self) {
        if let Some(ref mut buffer) = self.buffer {
            buffer.pop();
        }
    }

    /// 提交编辑缓冲到单元格
    pub fn commit_edit(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            if let Some(row) = self.rows.get_mut(self.selected_row) {
                row.set_cell(self.selected_col, buffer);
            }
        }
    }

    /// 放弃编辑缓冲
    pub fn cancel_edit(&mut self) {
        self.buffer = None;
    }

    /// 在选中行之后插入空行，并选中它
    pub fn insert_row(&mut self) {
        if self.rows.is_empty() {
            self.rows.push(RowDraft::default());
            self.selected_row = 0;
        } else {
            let at = self.selected_row + 1;
            self.rows.insert(at, RowDraft::default());
            self.selected_row = at;
        }
        self.selected_col = Column::Member;
    }

    /// 删除选中行
    pub fn delete_row(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.rows.remove(self.selected_row);
        self.clamp_selection();
    }

    /// 调节选中行的工时（下限 0，与表单的最小值一致）
    pub fn adjust_hours(&mut self, step: f64) {
        if let Some(row) = self.rows.get_mut(self.selected_row) {
            let current: f64 = row.hours.trim().parse().unwrap_or(0.0);
            let adjusted = (current + step).max(0.0);
            row.hours = adjusted.to_string();
        }
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.selected_row = 0;
        } else if self.selected_row >= self.rows.len() {
            self.selected_row = self.rows.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(tasks: &[Task]) -> GridEditor {
        let mut editor = GridEditor::new();
        editor.sync(tasks);
        editor
    }

    #[test]
    fn test_sync_to_tasks_round_trip() {
        let tasks = vec![
            Task::new("Alice", "T1", 3.25),
            Task::new("Bob", "T2", 5.0),
        ];
        let editor = editor_with(&tasks);

        assert_eq!(editor.to_tasks(), tasks);
    }

    #[test]
    fn test_unparsable_hours_become_zero() {
        let mut editor = editor_with(&[Task::new("Alice", "T1", 2.0)]);
        editor.selected_col = Column::Hours;
        editor.begin_edit();
        editor.buffer = Some("lots".to_string());
        editor.commit_edit();

        assert_eq!(editor.to_tasks()[0].hours, 0.0);
    }

    #[test]
    fn test_commit_edit_writes_cell() {
        let mut editor = editor_with(&[Task::new("Alice", "T1", 2.0)]);
        editor.selected_col = Column::TaskId;
        editor.begin_edit();
        assert_eq!(editor.buffer.as_deref(), Some("T1"));

        editor.delete_char();
        editor.delete_char();
        editor.input_char('t');
        editor.input_char('9');
        editor.commit_edit();

        assert!(!editor.is_editing());
        // 原样写入，不规范化
        assert_eq!(editor.rows[0].task_id, "t9");
    }

    #[test]
    fn test_cancel_edit_keeps_cell() {
        let mut editor = editor_with(&[Task::new("Alice", "T1", 2.0)]);
        editor.begin_edit();
        editor.input_char('x');
        editor.cancel_edit();

        assert_eq!(editor.rows[0].member, "Alice");
    }

    #[test]
    fn test_insert_and_delete_row() {
        let mut editor = editor_with(&[Task::new("Alice", "T1", 2.0)]);
        editor.insert_row();

        assert_eq!(editor.rows.len(), 2);
        assert_eq!(editor.selected_row, 1);
        assert_eq!(editor.rows[1], RowDraft::default());

        editor.delete_row();
        assert_eq!(editor.rows.len(), 1);
        assert_eq!(editor.selected_row, 0);

        editor.delete_row();
        assert!(editor.is_empty());
        // 空表格上再删不会崩
        editor.delete_row();
    }

    #[test]
    fn test_insert_row_on_empty_grid() {
        let mut editor = GridEditor::new();
        editor.insert_row();
        assert_eq!(editor.rows.len(), 1);
        assert_eq!(editor.selected_row, 0);
    }

    #[test]
    fn test_adjust_hours_clamps_at_zero() {
        let mut editor = editor_with(&[Task::new("Alice", "T1", 0.5)]);
        editor.adjust_hours(-0.5);
        assert_eq!(editor.rows[0].hours, "0");

        editor.adjust_hours(-0.5);
        assert_eq!(editor.rows[0].hours, "0");

        editor.adjust_hours(0.5);
        assert_eq!(editor.rows[0].hours, "0.5");
    }

    #[test]
    fn test_selection_wraps() {
        let mut editor = editor_with(&[
            Task::new("A", "T1", 1.0),
            Task::new("B", "T2", 2.0),
        ]);
        editor.select_previous();
        assert_eq!(editor.selected_row, 1);
        editor.select_next();
        assert_eq!(editor.selected_row, 0);
    }

    #[test]
    fn test_sync_clamps_selection() {
        let mut editor = editor_with(&[
            Task::new("A", "T1", 1.0),
            Task::new("B", "T2", 2.0),
            Task::new("C", "T3", 3.0),
        ]);
        editor.selected_row = 2;
        editor.sync(&[Task::new("A", "T1", 1.0)]);
        assert_eq!(editor.selected_row, 0);
    }
}
