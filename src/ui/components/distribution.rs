//! 工时占比视图（比例条 + 图例）

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::aggregate::MemberShare;
use crate::theme::ThemeColors;

/// 渲染占比视图
///
/// shares 为空（总工时为 0）时显示占位提示，不做除法。
pub fn render(frame: &mut Frame, area: Rect, shares: &[MemberShare], colors: &ThemeColors) {
    let block = Block::default()
        .title(" Distribution ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if shares.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No recorded effort yet",
            Style::default().fg(colors.muted),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, inner_area);
        return;
    }

    let [_, bar_area, _, legend_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner_area);

    render_bar(frame, bar_area, shares, colors);
    render_legend(frame, legend_area, shares, colors);
}

/// 一条按占比分段着色的横条
fn render_bar(frame: &mut Frame, area: Rect, shares: &[MemberShare], colors: &ThemeColors) {
    let total_width = area.width.saturating_sub(4) as usize;
    let widths = segment_widths(shares, total_width);

    let mut spans = vec![Span::raw("  ")];
    for (i, width) in widths.iter().enumerate() {
        if *width == 0 {
            continue;
        }
        spans.push(Span::styled(
            " ".repeat(*width),
            Style::default().bg(colors.accent(i)),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 图例: "■ Alice  45.0%"
fn render_legend(frame: &mut Frame, area: Rect, shares: &[MemberShare], colors: &ThemeColors) {
    let lines: Vec<Line> = shares
        .iter()
        .take(area.height as usize)
        .enumerate()
        .map(|(i, share)| {
            Line::from(vec![
                Span::styled("  ■ ", Style::default().fg(colors.accent(i))),
                Span::styled(share.member.clone(), Style::default().fg(colors.text)),
                Span::styled(
                    format!("  {:.1}%", share.percent),
                    Style::default().fg(colors.muted),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// 按占比切分整条宽度，余数从头部往后补齐，保证总宽一致
fn segment_widths(shares: &[MemberShare], total_width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = shares
        .iter()
        .map(|s| (s.percent / 100.0 * total_width as f64).floor() as usize)
        .collect();

    let used: usize = widths.iter().sum();
    let mut remainder = total_width.saturating_sub(used);
    for width in widths.iter_mut() {
        if remainder == 0 {
            break;
        }
        *width += 1;
        remainder -= 1;
    }

    widths
}
