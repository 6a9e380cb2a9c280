//! Add Task 弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{normalize_member, normalize_task_id};
use crate::theme::ThemeColors;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Member,
    TaskId,
    Hours,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Member => FormField::TaskId,
            FormField::TaskId => FormField::Hours,
            FormField::Hours => FormField::Member,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Member => FormField::Hours,
            FormField::TaskId => FormField::Member,
            FormField::Hours => FormField::TaskId,
        }
    }
}

/// Add Task 弹窗数据
#[derive(Debug, Clone)]
pub struct TaskFormData {
    pub member: String,
    pub task_id: String,
    /// 工时输入缓冲（只接受数字和小数点）
    pub hours: String,
    pub focus: FormField,
    /// 校验拒绝消息
    pub error: Option<String>,
}

impl TaskFormData {
    pub fn new() -> Self {
        Self {
            member: String::new(),
            task_id: String::new(),
            hours: String::new(),
            focus: FormField::Member,
            error: None,
        }
    }

    /// 当前焦点字段输入字符
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Member => self.member.push(c),
            FormField::TaskId => self.task_id.push(c),
            FormField::Hours => {
                if c.is_ascii_digit() || c == '.' {
                    self.hours.push(c);
                }
            }
        }
        self.error = None; // 清除错误
    }

    /// 当前焦点字段删除字符
    pub fn delete_char(&mut self) {
        match self.focus {
            FormField::Member => self.member.pop(),
            FormField::TaskId => self.task_id.pop(),
            FormField::Hours => self.hours.pop(),
        };
        self.error = None;
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// 工时 +/- 调节（下限 0）
    pub fn step_hours(&mut self, step: f64) {
        let adjusted = (self.parsed_hours() + step).max(0.0);
        self.hours = adjusted.to_string();
        self.error = None;
    }

    /// 解析工时输入，失败按 0.0（会被 add 校验拒绝）
    pub fn parsed_hours(&self) -> f64 {
        self.hours.trim().parse().unwrap_or(0.0)
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    /// 提交成功后清空字段，保留弹窗以便连续录入
    pub fn clear_fields(&mut self) {
        self.member.clear();
        self.task_id.clear();
        self.hours.clear();
        self.focus = FormField::Member;
        self.error = None;
    }
}

impl Default for TaskFormData {
    fn default() -> Self {
        Self::new()
    }
}

/// 渲染 Add Task 弹窗
pub fn render(frame: &mut Frame, data: &TaskFormData, colors: &ThemeColors) {
    let area = frame.area();

    // 计算弹窗尺寸
    let popup_width = 56u16.min(area.width.saturating_sub(4));
    let popup_height = if data.error.is_some() { 13 } else { 11 };

    // 居中显示
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // 清除背景
    frame.render_widget(Clear, popup_area);

    // 外框
    let block = Block::default()
        .title(" Add Task ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // 内部布局: 空行 + 三个字段行 + 空行 + 预览行 + (错误行) + 空行 + 提示行
    let mut constraints = vec![
        Constraint::Length(1), // 顶部空行
        Constraint::Length(1), // Member
        Constraint::Length(1), // Task ID
        Constraint::Length(1), // Hours
        Constraint::Length(1), // 空行
        Constraint::Length(1), // 预览行
    ];
    if data.error.is_some() {
        constraints.push(Constraint::Length(1)); // 错误行
    }
    constraints.push(Constraint::Length(1)); // 空行
    constraints.push(Constraint::Length(1)); // 提示行

    let areas = Layout::vertical(constraints).split(inner_area);

    render_field(frame, areas[1], "Member", &data.member, data.focus == FormField::Member, colors);
    render_field(frame, areas[2], "Task ID", &data.task_id, data.focus == FormField::TaskId, colors);
    render_field(frame, areas[3], "Hours", &data.hours, data.focus == FormField::Hours, colors);

    render_preview(frame, areas[5], data, colors);

    if data.error.is_some() {
        render_error(frame, areas[6], data, colors);
    }

    let hint_area = areas[areas.len() - 1];
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(colors.highlight)),
        Span::styled(" field  ", Style::default().fg(colors.muted)),
        Span::styled("+/-", Style::default().fg(colors.highlight)),
        Span::styled(" hours  ", Style::default().fg(colors.muted)),
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" add  ", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" close", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    colors: &ThemeColors,
) {
    let label_style = if focused {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };

    let mut spans = vec![
        Span::styled(format!("  {:<9}", format!("{}:", label)), label_style),
        Span::styled(value.to_string(), Style::default().fg(colors.text)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(colors.highlight))); // 光标
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 预览行: "→ Alice · PROJ-1 · 3.5h"（展示规范化后的记录）
fn render_preview(frame: &mut Frame, area: Rect, data: &TaskFormData, colors: &ThemeColors) {
    let member = normalize_member(&data.member);
    let task_id = normalize_task_id(&data.task_id);

    let preview_line = if member.is_empty() && task_id.is_empty() {
        Line::from(Span::styled(
            "  (enter member, task id and hours)",
            Style::default().fg(colors.muted),
        ))
    } else {
        Line::from(vec![
            Span::styled("  → ", Style::default().fg(colors.success)),
            Span::styled(
                member,
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", Style::default().fg(colors.muted)),
            Span::styled(task_id, Style::default().fg(colors.text)),
            Span::styled(" · ", Style::default().fg(colors.muted)),
            Span::styled(
                format!("{:.1}h", data.parsed_hours()),
                Style::default().fg(colors.text),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(preview_line), area);
}

fn render_error(frame: &mut Frame, area: Rect, data: &TaskFormData, colors: &ThemeColors) {
    if let Some(ref error) = data.error {
        let error_line = Line::from(vec![
            Span::styled("  ✗ ", Style::default().fg(colors.error)),
            Span::styled(error.as_str(), Style::default().fg(colors.error)),
        ]);
        frame.render_widget(Paragraph::new(error_line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_field_only_accepts_numeric_input() {
        let mut data = TaskFormData::new();
        data.focus = FormField::Hours;
        for c in "3a.b5".chars() {
            data.input_char(c);
        }
        assert_eq!(data.hours, "3.5");
        assert_eq!(data.parsed_hours(), 3.5);
    }

    #[test]
    fn test_parsed_hours_fallback_is_zero() {
        let mut data = TaskFormData::new();
        data.hours = "..".to_string();
        assert_eq!(data.parsed_hours(), 0.0);
    }

    #[test]
    fn test_step_hours_clamps_at_zero() {
        let mut data = TaskFormData::new();
        data.step_hours(-0.5);
        assert_eq!(data.parsed_hours(), 0.0);

        data.step_hours(0.5);
        data.step_hours(0.5);
        assert_eq!(data.parsed_hours(), 1.0);
    }

    #[test]
    fn test_field_cycle() {
        let mut data = TaskFormData::new();
        data.next_field();
        assert_eq!(data.focus, FormField::TaskId);
        data.next_field();
        data.next_field();
        assert_eq!(data.focus, FormField::Member);
        data.prev_field();
        assert_eq!(data.focus, FormField::Hours);
    }

    #[test]
    fn test_input_clears_error() {
        let mut data = TaskFormData::new();
        data.set_error("Member cannot be empty");
        data.input_char('a');
        assert!(data.error.is_none());
    }

    #[test]
    fn test_clear_fields_resets_form() {
        let mut data = TaskFormData::new();
        data.member = "alice".to_string();
        data.task_id = "t1".to_string();
        data.hours = "2".to_string();
        data.focus = FormField::Hours;

        data.clear_fields();
        assert!(data.member.is_empty());
        assert!(data.task_id.is_empty());
        assert!(data.hours.is_empty());
        assert_eq!(data.focus, FormField::Member);
    }
}
