//! 成员工时汇总表（按工时深浅着色）

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::aggregate::MemberEffort;
use crate::theme::ThemeColors;

/// 渲染工时汇总表
///
/// 行底色沿主题渐变按 `total_hours / max` 插值，工时越高颜色越深。
pub fn render(frame: &mut Frame, area: Rect, summary: &[MemberEffort], colors: &ThemeColors) {
    // summary 按降序排列，首行即最大值
    let max = summary.first().map(|row| row.total_hours).unwrap_or(0.0);

    let header = Row::new(vec![Cell::from("MEMBER"), Cell::from("HOURS")])
        .style(Style::default().fg(colors.muted))
        .height(1)
        .bottom_margin(1);

    let rows: Vec<Row> = summary
        .iter()
        .map(|row| {
            let t = if max > 0.0 { row.total_hours / max } else { 0.0 };
            Row::new(vec![
                Cell::from(row.member.clone()),
                Cell::from(format!("{:.1}", row.total_hours)),
            ])
            .style(
                Style::default()
                    .fg(colors.text)
                    .bg(colors.workload_shade(t)),
            )
        })
        .collect();

    let widths = [Constraint::Fill(3), Constraint::Length(8)];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Member Workload ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );

    frame.render_widget(table, area);
}
