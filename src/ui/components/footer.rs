use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppMode;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    mode: AppMode,
    has_tasks: bool,
    editing: bool,
    colors: &ThemeColors,
) {
    let shortcuts = get_shortcuts(mode, has_tasks, editing);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(mode: AppMode, has_tasks: bool, editing: bool) -> Vec<(&'static str, &'static str)> {
    match mode {
        AppMode::Tasks => {
            if editing {
                vec![("Enter", "apply"), ("Esc", "cancel")]
            } else if has_tasks {
                vec![
                    ("a", "add"),
                    ("Enter", "edit"),
                    ("o", "row"),
                    ("x", "delete"),
                    ("d", "dashboard"),
                    ("?", "help"),
                    ("q", "quit"),
                ]
            } else {
                vec![("a", "add"), ("o", "row"), ("?", "help"), ("q", "quit")]
            }
        }
        AppMode::Dashboard => {
            vec![
                ("Esc", "back"),
                ("r", "recompute"),
                ("t", "theme"),
                ("?", "help"),
                ("q", "quit"),
            ]
        }
    }
}
