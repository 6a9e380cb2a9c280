//! 每成员工时条形图

use ratatui::{
    layout::{Direction, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::aggregate::MemberEffort;
use crate::theme::ThemeColors;

/// 渲染每成员工时横向条形图
pub fn render(frame: &mut Frame, area: Rect, summary: &[MemberEffort], colors: &ThemeColors) {
    let bars: Vec<Bar> = summary
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let accent = colors.accent(i);
            Bar::default()
                // 条长以 0.1 小时为刻度，显示值保留一位小数
                .value((row.total_hours * 10.0).round() as u64)
                .text_value(format!("{:.1}", row.total_hours))
                .label(Line::from(row.member.clone()))
                .style(Style::default().fg(accent))
                .value_style(Style::default().fg(colors.bg).bg(accent))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Hours per Member ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
