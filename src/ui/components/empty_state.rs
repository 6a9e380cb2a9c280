use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::logo;

/// 渲染空状态（带 Logo 和提示文字）
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 垂直居中布局
    let text_height = 3u16; // 提示文字行数
    let total_height = logo::LOGO_HEIGHT + 2 + text_height; // 2 是间距

    if inner_area.height < total_height {
        // 空间不足，只显示提示文字
        render_hint_only(frame, inner_area, colors);
        return;
    }

    let vertical_padding = (inner_area.height - total_height) / 2;

    let [_, logo_area, _, text_area, _] = Layout::vertical([
        Constraint::Length(vertical_padding),
        Constraint::Length(logo::LOGO_HEIGHT),
        Constraint::Length(2),
        Constraint::Length(text_height),
        Constraint::Fill(1),
    ])
    .areas(inner_area);

    logo::render(frame, logo_area, colors);
    render_hint(frame, text_area, colors);
}

fn hint_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "No tasks yet",
            Style::default().fg(colors.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " a ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "to record the first task",
                Style::default().fg(colors.text),
            ),
        ]),
    ]
}

fn render_hint(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let hint_widget = Paragraph::new(hint_lines(colors)).alignment(Alignment::Center);
    frame.render_widget(hint_widget, area);
}

fn render_hint_only(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let hint_widget = Paragraph::new(hint_lines(colors)).alignment(Alignment::Center);

    // 垂直居中
    let y_offset = (area.height.saturating_sub(3)) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: 3.min(area.height),
    };

    frame.render_widget(hint_widget, centered_area);
}
