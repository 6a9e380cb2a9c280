use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::logo;

/// Header 总高度：1 (边框) + 6 (Logo) + 1 (下边距) + 1 (统计行) = 9
pub const HEADER_HEIGHT: u16 = 9;

/// 渲染顶部区域（Logo + 会话统计行）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    task_count: usize,
    member_count: usize,
    total_hours: f64,
    session_started: &DateTime<Local>,
    colors: &ThemeColors,
) {
    // 外框
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 内部垂直布局: Logo + 边距 + 统计行
    let [logo_area, _, stats_area] = Layout::vertical([
        Constraint::Length(logo::LOGO_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    logo::render(frame, logo_area, colors);

    // 统计行: "4 tasks · 2 members · 12.5 hours · since 14:02"
    let stats_line = Line::from(vec![
        Span::styled(
            format!("{} tasks", task_count),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · ", Style::default().fg(colors.muted)),
        Span::styled(
            format!("{} members", member_count),
            Style::default().fg(colors.text),
        ),
        Span::styled(" · ", Style::default().fg(colors.muted)),
        Span::styled(
            format!("{:.1} hours", total_hours),
            Style::default().fg(colors.text),
        ),
        Span::styled(" · ", Style::default().fg(colors.muted)),
        Span::styled(
            format!("since {}", session_started.format("%H:%M")),
            Style::default().fg(colors.muted),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(stats_line).alignment(Alignment::Center),
        stats_area,
    );
}
