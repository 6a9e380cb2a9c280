//! 主题颜色定义

use super::ThemeColors;
use ratatui::style::Color;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        logo: Color::Rgb(0, 255, 136),        // 亮绿色
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        info: Color::Rgb(100, 181, 246),  // 蓝色
        warning: Color::Rgb(255, 213, 79), // 黄色
        error: Color::Rgb(255, 85, 85),   // 红色
        success: Color::Rgb(0, 200, 120), // 绿色
        accent_palette: [
            Color::Rgb(235, 130, 130), // coral
            Color::Rgb(240, 170, 115), // peach
            Color::Rgb(230, 200, 105), // gold
            Color::Rgb(130, 205, 145), // mint
            Color::Rgb(110, 198, 195), // aqua
            Color::Rgb(120, 175, 225), // sky
            Color::Rgb(150, 155, 230), // periwinkle
            Color::Rgb(185, 148, 225), // lavender
            Color::Rgb(220, 148, 195), // orchid
            Color::Rgb(230, 150, 160), // rose
        ],
        shade_start: (28, 34, 44), // 接近背景的深蓝
        shade_end: (36, 84, 140),  // 饱和蓝
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        logo: Color::Rgb(0, 128, 68),            // 深绿色
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30), // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        info: Color::Rgb(33, 150, 243),   // 蓝色
        warning: Color::Rgb(255, 152, 0), // 橙黄色
        error: Color::Rgb(200, 50, 50),   // 红色
        success: Color::Rgb(0, 150, 80),  // 绿色
        accent_palette: [
            Color::Rgb(220, 80, 80),   // warm red
            Color::Rgb(230, 140, 60),  // tangerine
            Color::Rgb(200, 170, 40),  // olive gold
            Color::Rgb(60, 170, 90),   // emerald
            Color::Rgb(40, 160, 160),  // teal
            Color::Rgb(50, 130, 200),  // ocean
            Color::Rgb(100, 100, 210), // indigo
            Color::Rgb(150, 90, 200),  // violet
            Color::Rgb(190, 80, 150),  // magenta
            Color::Rgb(210, 90, 110),  // berry
        ],
        shade_start: (240, 246, 252), // 近白的浅蓝
        shade_end: (140, 185, 230),   // 中蓝
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),           // 背景色
        bg_secondary: Color::Rgb(68, 71, 90), // 选中行
        logo: Color::Rgb(189, 147, 249),      // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),      // 前景色
        muted: Color::Rgb(98, 114, 164),      // 注释色
        border: Color::Rgb(68, 71, 90),       // 边框
        info: Color::Rgb(139, 233, 253),      // cyan
        warning: Color::Rgb(241, 250, 140),   // yellow
        error: Color::Rgb(255, 85, 85),       // red
        success: Color::Rgb(80, 250, 123),    // green
        accent_palette: [
            Color::Rgb(255, 85, 85),   // red
            Color::Rgb(255, 184, 108), // orange
            Color::Rgb(241, 250, 140), // yellow
            Color::Rgb(80, 250, 123),  // green
            Color::Rgb(139, 233, 253), // cyan
            Color::Rgb(98, 114, 164),  // comment blue
            Color::Rgb(189, 147, 249), // purple
            Color::Rgb(255, 121, 198), // pink
            Color::Rgb(248, 248, 242), // foreground
            Color::Rgb(255, 150, 150), // light red
        ],
        shade_start: (44, 46, 62),
        shade_end: (98, 80, 158), // 紫色渐变
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82), // 选中行
        logo: Color::Rgb(136, 192, 208),      // frost cyan
        highlight: Color::Rgb(136, 192, 208),
        text: Color::Rgb(236, 239, 244), // snow storm
        muted: Color::Rgb(106, 118, 137),
        border: Color::Rgb(59, 66, 82),
        info: Color::Rgb(129, 161, 193),    // frost blue
        warning: Color::Rgb(235, 203, 139), // aurora yellow
        error: Color::Rgb(191, 97, 106),    // aurora red
        success: Color::Rgb(163, 190, 140), // aurora green
        accent_palette: [
            Color::Rgb(191, 97, 106),  // aurora red
            Color::Rgb(208, 135, 112), // aurora orange
            Color::Rgb(235, 203, 139), // aurora yellow
            Color::Rgb(163, 190, 140), // aurora green
            Color::Rgb(143, 188, 187), // frost teal
            Color::Rgb(136, 192, 208), // frost cyan
            Color::Rgb(129, 161, 193), // frost blue
            Color::Rgb(94, 129, 172),  // frost deep blue
            Color::Rgb(180, 142, 173), // aurora purple
            Color::Rgb(216, 222, 233), // snow
        ],
        shade_start: (52, 58, 72),
        shade_end: (76, 110, 160), // frost 蓝渐变
    }
}
