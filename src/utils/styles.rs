// ============================================================================
// Aurora - 文本样式工具
// ============================================================================
//
// 文件: src/utils/styles.rs
// 职责: 可链式组合的彩色文本值
// 边界:
//   - ✅ 前景色、背景色、文本属性的链式组合
//   - ✅ 通过 Display 渲染
//   - ❌ 不应包含日志级别逻辑
//   - ❌ 不应包含输出目标写入
//
// ============================================================================

use std::fmt;

use super::colors::{Attribute, Color, Style};

/// 带样式的文本值
///
/// ```
/// use aurora::paint;
///
/// let warning = paint("disk almost full").bright_yellow().on_black().bold();
/// println!("{warning}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Painted {
    text: String,
    style: Style,
}

/// 创建未着色的文本值
pub fn paint(text: impl Into<String>) -> Painted {
    Painted {
        text: text.into(),
        style: Style::new(),
    }
}

macro_rules! foreground_methods {
    ($($name:ident => $color:ident),* $(,)?) => {
        $(
            pub fn $name(mut self) -> Self {
                self.style = self.style.with_fg(Color::$color);
                self
            }
        )*
    };
}

macro_rules! background_methods {
    ($($name:ident => $color:ident),* $(,)?) => {
        $(
            pub fn $name(mut self) -> Self {
                self.style = self.style.with_bg(Color::$color);
                self
            }
        )*
    };
}

macro_rules! attribute_methods {
    ($($name:ident => $attr:ident),* $(,)?) => {
        $(
            pub fn $name(self) -> Self {
                self.with(Attribute::$attr)
            }
        )*
    };
}

impl Painted {
    /// 原始文本
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 当前样式
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// 替换为指定样式
    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// 追加文本属性
    pub fn with(mut self, attr: Attribute) -> Self {
        self.style = self.style.with(attr);
        self
    }

    foreground_methods! {
        black => Black,
        red => Red,
        green => Green,
        yellow => Yellow,
        blue => Blue,
        magenta => Magenta,
        cyan => Cyan,
        white => White,
        bright_black => BrightBlack,
        bright_red => BrightRed,
        bright_green => BrightGreen,
        bright_yellow => BrightYellow,
        bright_blue => BrightBlue,
        bright_magenta => BrightMagenta,
        bright_cyan => BrightCyan,
        bright_white => BrightWhite,
    }

    background_methods! {
        on_black => Black,
        on_red => Red,
        on_green => Green,
        on_yellow => Yellow,
        on_blue => Blue,
        on_magenta => Magenta,
        on_cyan => Cyan,
        on_white => White,
        on_bright_black => BrightBlack,
        on_bright_red => BrightRed,
        on_bright_green => BrightGreen,
        on_bright_yellow => BrightYellow,
        on_bright_blue => BrightBlue,
        on_bright_magenta => BrightMagenta,
        on_bright_cyan => BrightCyan,
        on_bright_white => BrightWhite,
    }

    attribute_methods! {
        bold => Bold,
        faint => Faint,
        italic => Italic,
        underline => Underline,
        blink => Blink,
        reverse => Reverse,
        conceal => Conceal,
        strike => Strike,
    }
}

impl fmt::Display for Painted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.style.paint(&self.text))
    }
}
