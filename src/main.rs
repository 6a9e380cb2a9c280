mod aggregate;
mod app;
mod dialogs;
mod editor;
mod error;
mod event;
mod model;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::{App, AppMode};

#[derive(Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "Team effort entry and workload dashboard")]
struct Cli {
    /// Theme override for this session (Auto / Dark / Light / Dracula / Nord)
    #[arg(long)]
    theme: Option<String>,
}

/// 启动 TUI 界面
fn run_tui(theme_override: Option<String>) -> io::Result<()> {
    let config = storage::config::load_config();

    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用
    let mut app = App::new(config, theme_override.as_deref());

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state
        ratatui::restore();
        // Call the original panic hook
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    run_tui(cli.theme)
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| match app.mode {
            AppMode::Tasks => ui::tasks::render(frame, app),
            AppMode::Dashboard => ui::dashboard::render(frame, app),
        })?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
