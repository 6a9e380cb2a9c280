//! ASCII Art Logo

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

pub const LOGO: &[&str] = &[
    "████████╗ █████╗ ██╗     ██╗  ██╗   ██╗",
    "╚══██╔══╝██╔══██╗██║     ██║  ╚██╗ ██╔╝",
    "   ██║   ███████║██║     ██║   ╚████╔╝ ",
    "   ██║   ██╔══██║██║     ██║    ╚██╔╝  ",
    "   ██║   ██║  ██║███████╗███████╗██║   ",
    "   ╚═╝   ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝   ",
];

/// Logo 行数
pub const LOGO_HEIGHT: u16 = 6;

/// 渲染居中 Logo
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let lines: Vec<Line> = LOGO
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(colors.logo))))
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
