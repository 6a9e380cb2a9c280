//! 任务分配建议

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::aggregate::MemberEffort;
use crate::theme::ThemeColors;

/// 渲染建议区
///
/// 每个低于平均的成员一条提示；没有则显示负载均衡的成功提示。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    underloaded: &[MemberEffort],
    average: f64,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(" Suggestions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = if underloaded.is_empty() {
        vec![Line::from(vec![
            Span::styled(" ✓ ", Style::default().fg(colors.success)),
            Span::styled(
                "Workload is evenly distributed!",
                Style::default()
                    .fg(colors.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ])]
    } else {
        underloaded
            .iter()
            .take(inner_area.height as usize)
            .map(|row| {
                Line::from(vec![
                    Span::styled(" • ", Style::default().fg(colors.info)),
                    Span::styled(
                        row.member.clone(),
                        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(
                            " has only {:.1} hours (team average {:.1}). Consider assigning more tasks.",
                            row.total_hours, average
                        ),
                        Style::default().fg(colors.text),
                    ),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines), inner_area);
}
