use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::theme::ThemeColors;

use super::components::{
    distribution, effort_bars, footer, header, help_panel, suggestions, theme_selector, toast,
    workload_table,
};

/// 渲染 Dashboard 页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    // 进入本页前已计算好，这里只消费结果
    let Some(data) = app.dashboard.as_ref() else {
        return;
    };

    // 建议区和汇总表按内容高度分配，其余给图表
    let suggestion_rows = data.underloaded.len().clamp(1, 4) as u16;
    let table_rows = (data.summary.len().min(8)) as u16;

    let [header_area, metric_area, charts_area, suggestions_area, table_area, footer_area] =
        Layout::vertical([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(suggestion_rows + 2),
            Constraint::Length(table_rows + 4),
            Constraint::Length(3),
        ])
        .areas(area);

    // 渲染 Header
    header::render(
        frame,
        header_area,
        app.store.len(),
        data.summary.len(),
        data.total,
        &app.session_started,
        colors,
    );

    render_metric(frame, metric_area, data.total, data.average, colors);

    // 图表区：左侧条形图 + 右侧占比视图
    let [bars_area, distribution_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(charts_area);

    effort_bars::render(frame, bars_area, &data.summary, colors);
    distribution::render(frame, distribution_area, &data.shares, colors);

    suggestions::render(
        frame,
        suggestions_area,
        &data.underloaded,
        data.average,
        colors,
    );

    workload_table::render(frame, table_area, &data.summary, colors);

    // 渲染 Footer
    footer::render(frame, footer_area, app.mode, true, false, colors);

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

    // 渲染帮助面板
    if app.dialogs.show_help {
        help_panel::render(frame, colors);
    }
}

/// 总工时指标行: "Total Team Effort  22.5 hours  ·  average 7.5 per member"
fn render_metric(frame: &mut Frame, area: Rect, total: f64, average: f64, colors: &ThemeColors) {
    let line = Line::from(vec![
        Span::styled("  Total Team Effort  ", Style::default().fg(colors.muted)),
        Span::styled(
            format!("{:.1} hours", total),
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ·  ", Style::default().fg(colors.muted)),
        Span::styled(
            format!("average {:.1} per member", average),
            Style::default().fg(colors.text),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
