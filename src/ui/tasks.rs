use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::aggregate;
use crate::app::App;

use super::components::{
    empty_state, footer, header, help_panel, task_form, task_table, theme_selector, toast,
};

/// 渲染 Tasks 页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, table_area, footer_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    // 渲染 Header（统计行跟随当前列表）
    header::render(
        frame,
        header_area,
        app.store.len(),
        app.store.member_count(),
        aggregate::total_effort(app.store.snapshot()),
        &app.session_started,
        colors,
    );

    // 渲染表格或空状态
    if app.editor.is_empty() {
        empty_state::render(frame, table_area, colors);
    } else {
        task_table::render(frame, table_area, &app.editor, colors);
    }

    // 渲染 Footer
    footer::render(
        frame,
        footer_area,
        app.mode,
        !app.editor.is_empty(),
        app.editor.is_editing(),
        colors,
    );

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, t.kind, colors);
        }
    }

    // 渲染主题选择器（如果打开）
    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, colors);
    }

    // 渲染 Add Task 弹窗（如果打开）
    if let Some(ref data) = app.dialogs.task_form {
        task_form::render(frame, data, colors);
    }

    // 渲染帮助面板
    if app.dialogs.show_help {
        help_panel::render(frame, colors);
    }
}
