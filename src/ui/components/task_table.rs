//! 任务表格（可就地编辑）

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::editor::{Column, GridEditor};
use crate::theme::ThemeColors;

/// 渲染任务表格
pub fn render(frame: &mut Frame, area: Rect, editor: &GridEditor, colors: &ThemeColors) {
    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from("MEMBER"),
        Cell::from("TASK ID"),
        Cell::from("HOURS"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    // 数据行
    let rows: Vec<Row> = editor
        .rows
        .iter()
        .enumerate()
        .map(|(i, draft)| {
            let is_selected = i == editor.selected_row;
            let selector = if is_selected { "❯" } else { " " };

            let row_style = if is_selected {
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                cell(editor, i, Column::Member, &draft.member, colors),
                cell(editor, i, Column::TaskId, &draft.task_id, colors),
                cell(editor, i, Column::Hours, &draft.hours, colors),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(2), // 选择器
        Constraint::Fill(2),   // MEMBER (flex)
        Constraint::Fill(2),   // TASK ID (flex)
        Constraint::Length(8), // HOURS
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    // 渲染表格（使用 TableState）
    let mut table_state = TableState::default();
    table_state.select(Some(editor.selected_row));

    frame.render_stateful_widget(table, area, &mut table_state);
}

/// 单元格：编辑中显示缓冲加光标，选中显示下划线高亮
fn cell<'a>(
    editor: &'a GridEditor,
    row: usize,
    col: Column,
    value: &'a str,
    colors: &ThemeColors,
) -> Cell<'a> {
    let is_cursor = row == editor.selected_row && col == editor.selected_col;

    if is_cursor {
        if let Some(ref buffer) = editor.buffer {
            return Cell::from(Line::from(vec![
                Span::styled(buffer.as_str(), Style::default().fg(colors.text)),
                Span::styled("█", Style::default().fg(colors.highlight)), // 光标
            ]));
        }
        return Cell::from(display_value(value, colors)).style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::UNDERLINED),
        );
    }

    Cell::from(display_value(value, colors))
}

/// 空单元格显示占位符，避免整行看起来缺列
fn display_value<'a>(value: &'a str, colors: &ThemeColors) -> Line<'a> {
    if value.is_empty() {
        Line::from(Span::styled("—", Style::default().fg(colors.muted)))
    } else {
        Line::from(value)
    }
}
