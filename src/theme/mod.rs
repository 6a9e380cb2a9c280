mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::detect_system_theme;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
    Dracula,
    Nord,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Auto,
            Theme::Dark,
            Theme::Light,
            Theme::Dracula,
            Theme::Nord,
        ]
    }

    /// 从名称创建主题（用于配置加载）
    pub fn from_name(name: &str) -> Self {
        match name {
            "Auto" => Theme::Auto,
            "Dark" => Theme::Dark,
            "Light" => Theme::Light,
            "Dracula" => Theme::Dracula,
            "Nord" => Theme::Nord,
            _ => Theme::Auto, // 默认 Auto
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    /// Logo 颜色
    pub logo: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 信息色 (蓝色) - 建议提示
    pub info: Color,
    /// 警告色 (黄色) - 空列表警告
    pub warning: Color,
    /// 错误色 (红色) - 表单拒绝
    pub error: Color,
    /// 成功色 (绿色) - 添加成功、负载均衡
    pub success: Color,
    /// 图表系列色（按成员轮转）
    pub accent_palette: [Color; 10],
    /// 工时表底色渐变起点 (RGB)
    pub shade_start: (u8, u8, u8),
    /// 工时表底色渐变终点 (RGB)
    pub shade_end: (u8, u8, u8),
}

impl ThemeColors {
    /// 图表系列色，按索引轮转
    pub fn accent(&self, index: usize) -> Color {
        self.accent_palette[index % self.accent_palette.len()]
    }

    /// 工时表底色：t 在 [0, 1] 区间内沿渐变插值
    pub fn workload_shade(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::Rgb(
            lerp(self.shade_start.0, self.shade_end.0),
            lerp(self.shade_start.1, self.shade_end.1),
            lerp(self.shade_start.2, self.shade_end.2),
        )
    }
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
        Theme::Nord => nord_colors(),
    }
}
