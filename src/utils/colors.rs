// ============================================================================
// Aurora - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 样式描述与终端颜色渲染
// 边界:
//   - ✅ 样式描述（前景色、背景色、文本属性）
//   - ✅ 样式渲染为终端转义序列
//   - ✅ 全局颜色开关
//   - ✅ 转义序列剥离
//   - ❌ 不应包含日志级别逻辑
//   - ❌ 不应包含输出目标写入
//
// ============================================================================

use std::sync::LazyLock;

use colored::{ColoredString, Colorize};
use regex::Regex;

pub use colored::Color;

/// ANSI 颜色代码（结构化输出着色使用）
pub mod ansi {
    /// 重置颜色
    pub const RESET: &str = "\x1b[0m";

    /// 前景色
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BRIGHT_BLACK: &str = "\x1b[90m";
    pub const BOLD_BRIGHT_BLUE: &str = "\x1b[1;94m";
}

static ANSI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("ANSI pattern is a valid regex"));

/// 文本属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    Reverse,
    Conceal,
    Strike,
}

/// 样式描述：前景色、背景色与文本属性的组合
///
/// 空样式（无颜色、无属性）渲染时原样返回文本。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    attrs: Vec<Attribute>,
}

impl Style {
    /// 创建空样式
    pub fn new() -> Self {
        Self::default()
    }

    /// 仅带前景色的样式
    pub fn fg(color: Color) -> Self {
        Self::new().with_fg(color)
    }

    /// 设置前景色
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// 设置背景色
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// 追加文本属性
    pub fn with(mut self, attr: Attribute) -> Self {
        if !self.attrs.contains(&attr) {
            self.attrs.push(attr);
        }
        self
    }

    pub fn foreground(&self) -> Option<Color> {
        self.fg
    }

    pub fn background(&self) -> Option<Color> {
        self.bg
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attrs
    }

    /// 是否为空样式
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// 按样式渲染文本
    ///
    /// 颜色被全局关闭时 `colored` 会跳过转义序列，返回原文。
    pub fn paint(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }

        let mut styled: ColoredString = text.normal();
        if let Some(fg) = self.fg {
            styled = styled.color(fg);
        }
        if let Some(bg) = self.bg {
            styled = styled.on_color(bg);
        }
        for attr in &self.attrs {
            styled = match attr {
                Attribute::Bold => styled.bold(),
                Attribute::Faint => styled.dimmed(),
                Attribute::Italic => styled.italic(),
                Attribute::Underline => styled.underline(),
                Attribute::Blink => styled.blink(),
                Attribute::Reverse => styled.reversed(),
                Attribute::Conceal => styled.hidden(),
                Attribute::Strike => styled.strikethrough(),
            };
        }
        styled.to_string()
    }
}

/// 全局颜色开关是否打开
pub fn enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

/// 强制打开或关闭全局颜色输出
pub fn set_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

/// 取消强制设置，回到环境检测结果
pub fn unset_override() {
    colored::control::unset_override();
}

/// 去除文本中的 ANSI 颜色转义序列
pub fn strip_ansi(text: &str) -> String {
    ANSI_PATTERN.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_returns_text_unchanged() {
        assert_eq!(Style::new().paint("hello"), "hello");
    }

    #[test]
    fn painted_text_survives_stripping() {
        let style = Style::fg(Color::BrightRed)
            .with_bg(Color::Black)
            .with(Attribute::Bold)
            .with(Attribute::Underline);
        assert_eq!(strip_ansi(&style.paint("boom")), "boom");
    }

    #[test]
    fn duplicate_attributes_are_ignored() {
        let style = Style::new().with(Attribute::Bold).with(Attribute::Bold);
        assert_eq!(style.attributes(), &[Attribute::Bold]);
    }

    #[test]
    fn strip_ansi_removes_sgr_sequences() {
        let raw = "\x1b[1;94m\"key\"\x1b[0m:\x1b[32m\"value\"\x1b[0m";
        assert_eq!(strip_ansi(raw), "\"key\":\"value\"");
    }
}
