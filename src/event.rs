use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, AppMode};

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 帮助面板
    if app.dialogs.show_help {
        handle_help_key(app, key);
        return;
    }

    // 主题选择器
    if app.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    // Add Task 弹窗
    if app.dialogs.task_form.is_some() {
        handle_task_form_key(app, key);
        return;
    }

    // 单元格编辑态
    if app.mode == AppMode::Tasks && app.editor.is_editing() {
        handle_cell_edit_key(app, key);
        return;
    }

    // 根据模式分发事件
    match app.mode {
        AppMode::Tasks => handle_tasks_key(app, key),
        AppMode::Dashboard => handle_dashboard_key(app, key),
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => {
            app.dialogs.show_help = false;
        }
        _ => {}
    }
}

/// 处理 Tasks 模式的键盘事件
fn handle_tasks_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.editor.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.editor.select_previous();
        }

        // 导航 - 左右切换列
        KeyCode::Char('h') | KeyCode::Left => {
            app.editor.prev_col();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.editor.next_col();
        }

        // 功能按键 - Add Task 表单
        KeyCode::Char('a') => {
            app.open_task_form();
        }

        // 功能按键 - 编辑单元格
        KeyCode::Enter | KeyCode::Char('e') => {
            app.editor.begin_edit();
        }

        // 功能按键 - 插入空行
        KeyCode::Char('o') => {
            app.grid_insert_row();
        }

        // 功能按键 - 删除行
        KeyCode::Char('x') => {
            app.grid_delete_row();
        }

        // 功能按键 - 工时步进
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.grid_adjust_hours(1.0);
        }
        KeyCode::Char('-') => {
            app.grid_adjust_hours(-1.0);
        }

        // 功能按键 - 请求仪表盘
        KeyCode::Char('d') => {
            app.open_dashboard();
        }

        // 功能按键 - Theme 选择器
        KeyCode::Char('T') | KeyCode::Char('t') => {
            app.open_theme_selector();
        }

        // 功能按键 - 帮助
        KeyCode::Char('?') => {
            app.dialogs.show_help = true;
        }

        _ => {}
    }
}

/// 处理 Dashboard 模式的键盘事件
fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 返回 Tasks 页
        KeyCode::Esc | KeyCode::Char('b') => {
            app.close_dashboard();
        }

        // 重新计算
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.refresh_dashboard();
        }

        // 功能按键 - Theme 选择器
        KeyCode::Char('T') | KeyCode::Char('t') => {
            app.open_theme_selector();
        }

        // 功能按键 - 帮助
        KeyCode::Char('?') => {
            app.dialogs.show_help = true;
        }

        _ => {}
    }
}

/// 处理 Add Task 弹窗的键盘事件
fn handle_task_form_key(app: &mut App, key: KeyEvent) {
    // 关闭与提交动用整个 App，先于字段借用处理
    match key.code {
        KeyCode::Esc => {
            app.close_task_form();
            return;
        }
        KeyCode::Enter => {
            app.submit_task_form();
            return;
        }
        _ => {}
    }

    let step = app.hours_step;
    let Some(form) = app.dialogs.task_form.as_mut() else {
        return;
    };

    match key.code {
        // 字段切换
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
        }

        // 删除字符
        KeyCode::Backspace => {
            form.delete_char();
        }

        // 工时步进（任意字段下都生效，输入框本身不接受 +/-）
        KeyCode::Char('+') | KeyCode::Char('=') => {
            form.step_hours(step);
        }
        KeyCode::Char('-') => {
            form.step_hours(-step);
        }

        // 输入字符
        KeyCode::Char(c) => {
            form.input_char(c);
        }

        _ => {}
    }
}

/// 处理单元格编辑态的键盘事件
fn handle_cell_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 提交
        KeyCode::Enter => {
            app.grid_commit_edit();
        }

        // 取消
        KeyCode::Esc => {
            app.editor.cancel_edit();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.editor.delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.editor.input_char(c);
        }

        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_selector_prev();
        }

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_selector_next();
        }

        // 确认选择
        KeyCode::Enter => {
            app.theme_selector_confirm();
        }

        // 取消
        KeyCode::Esc => {
            app.close_theme_selector();
        }

        _ => {}
    }
}
