// ============================================================================
// Aurora - 级别注册表
// ============================================================================
//
// 文件: src/core/registry.rs
// 职责: 进程级 级别 → 符号/样式 映射
// 边界:
//   - ✅ 默认符号与样式
//   - ✅ 单项覆盖与整体重置
//   - ✅ 快照与恢复
//   - ✅ 读写锁保护
//   - ❌ 不应包含输出目标写入
//   - ❌ 不应包含消息格式化
//
// ============================================================================

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::level::Level;
use crate::utils::colors::{Color, Style};
use crate::utils::constants::symbols;

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| {
    RwLock::new(Registry {
        symbols: default_symbols(),
        styles: default_styles(),
    })
});

#[derive(Debug, Clone)]
struct Registry {
    symbols: HashMap<Level, String>,
    styles: HashMap<Level, Style>,
}

/// 注册表快照，用于在测试或嵌入场景中整体恢复
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    inner: Registry,
}

impl RegistrySnapshot {
    /// 用快照内容覆盖当前注册表
    pub fn restore(self) {
        *write() = self.inner;
    }
}

fn default_symbols() -> HashMap<Level, String> {
    [
        (Level::Debug, symbols::DEBUG),
        (Level::Info, symbols::INFO),
        (Level::Notice, symbols::NOTICE),
        (Level::Warn, symbols::WARN),
        (Level::Error, symbols::ERROR),
        (Level::Alert, symbols::ALERT),
        (Level::Critical, symbols::CRITICAL),
        (Level::NoLevel, symbols::NO_LEVEL),
    ]
    .into_iter()
    .map(|(level, symbol)| (level, symbol.to_string()))
    .collect()
}

fn default_styles() -> HashMap<Level, Style> {
    [
        (Level::Debug, Color::BrightCyan),
        (Level::Info, Color::BrightGreen),
        (Level::Notice, Color::BrightYellow),
        (Level::Warn, Color::BrightMagenta),
        (Level::Error, Color::BrightRed),
        (Level::Alert, Color::BrightBlue),
        (Level::Critical, Color::BrightWhite),
        (Level::NoLevel, Color::BrightBlack),
    ]
    .into_iter()
    .map(|(level, color)| (level, Style::fg(color)))
    .collect()
}

fn read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// 设置级别符号
///
/// 不校验级别，内置集合之外的 `Level::Custom` 同样会被记录。
pub fn set_symbol(level: Level, symbol: impl Into<String>) {
    write().symbols.insert(level, symbol.into());
}

/// 设置级别样式
pub fn set_style(level: Level, style: Style) {
    write().styles.insert(level, style);
}

/// 恢复全部默认符号，丢弃所有自定义
pub fn reset_symbols() {
    write().symbols = default_symbols();
    tracing::debug!("level symbols reset to defaults");
}

/// 恢复全部默认样式，丢弃所有自定义
pub fn reset_styles() {
    write().styles = default_styles();
    tracing::debug!("level styles reset to defaults");
}

/// 查询级别符号，未登记时返回空串
pub fn symbol(level: Level) -> String {
    read().symbols.get(&level).cloned().unwrap_or_default()
}

/// 查询级别样式，未登记时返回无样式
pub fn style(level: Level) -> Style {
    read().styles.get(&level).cloned().unwrap_or_default()
}

/// 一次读锁内同时取得符号与样式
pub(crate) fn decoration(level: Level) -> (String, Style) {
    let registry = read();
    (
        registry.symbols.get(&level).cloned().unwrap_or_default(),
        registry.styles.get(&level).cloned().unwrap_or_default(),
    )
}

/// 复制当前注册表
pub fn snapshot() -> RegistrySnapshot {
    RegistrySnapshot {
        inner: read().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 本模块测试只读取注册表；修改类测试位于 tests/registry.rs

    #[test]
    fn every_builtin_level_has_a_decoration() {
        for level in Level::BUILTIN {
            let (symbol, style) = decoration(level);
            assert!(!symbol.is_empty(), "missing symbol for {level}");
            assert!(!style.is_plain(), "missing style for {level}");
        }
    }

    #[test]
    fn unknown_levels_fall_back_to_neutral_decoration() {
        assert_eq!(symbol(Level::Custom(9_999)), "");
        assert!(style(Level::Custom(9_999)).is_plain());
    }

    #[test]
    fn default_tables_match_documented_symbols() {
        let defaults = default_symbols();
        assert_eq!(defaults[&Level::Info], "[✔]");
        assert_eq!(defaults[&Level::Debug], "[⧳]");
        assert_eq!(defaults[&Level::NoLevel], " ");
        assert_eq!(default_styles()[&Level::Error], Style::fg(Color::BrightRed));
    }
}
