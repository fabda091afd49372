// ============================================================================
// Aurora - 全局默认 Notifier
// ============================================================================
//
// 文件: src/core/global.rs
// 职责: 可替换的进程级默认实例及其快捷函数
// 边界:
//   - ✅ 默认实例的读取与整体替换
//   - ✅ 委托给默认实例的快捷函数
//   - ❌ 不应包含行组装逻辑（由 Notifier 负责）
//   - ❌ 不应原地修改默认实例
//
// ============================================================================

use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use super::notifier::Notifier;
use super::structured::{Encode, Indent};
use crate::models::level::Level;
use crate::utils::colors::Style;

/// 全局默认实例，初始绑定标准输出
static DEFAULT: LazyLock<RwLock<Arc<Notifier>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Notifier::stdout())));

/// 当前默认实例
///
/// 返回的是调用时刻的引用；之后的 [`set_default`] 不会影响已取得的实例。
pub fn default_notifier() -> Arc<Notifier> {
    Arc::clone(&DEFAULT.read().unwrap_or_else(PoisonError::into_inner))
}

/// 替换默认实例，返回被替换的旧实例
pub fn set_default(notifier: Notifier) -> Arc<Notifier> {
    let mut slot = DEFAULT.write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *slot, Arc::new(notifier))
}

/// 从默认实例派生带前缀的实例
pub fn with(prefix: &str) -> Notifier {
    default_notifier().with(prefix)
}

pub fn logf(level: Level, args: fmt::Arguments<'_>) {
    default_notifier().logf(level, args);
}

pub fn inlinef(level: Level, args: fmt::Arguments<'_>) {
    default_notifier().inlinef(level, args);
}

pub fn printf(level: Level, args: fmt::Arguments<'_>) {
    default_notifier().printf(level, args);
}

pub fn line(count: usize) {
    default_notifier().line(count);
}

pub fn br() {
    default_notifier().br();
}

pub fn debug(args: fmt::Arguments<'_>) {
    default_notifier().debug(args);
}

pub fn info(args: fmt::Arguments<'_>) {
    default_notifier().info(args);
}

pub fn notice(args: fmt::Arguments<'_>) {
    default_notifier().notice(args);
}

pub fn warn(args: fmt::Arguments<'_>) {
    default_notifier().warn(args);
}

pub fn error(args: fmt::Arguments<'_>) {
    default_notifier().error(args);
}

pub fn alert(args: fmt::Arguments<'_>) {
    default_notifier().alert(args);
}

pub fn critical(args: fmt::Arguments<'_>) {
    default_notifier().critical(args);
}

pub fn success(args: fmt::Arguments<'_>) {
    default_notifier().success(args);
}

pub fn failure(args: fmt::Arguments<'_>) {
    default_notifier().failure(args);
}

pub fn when(condition: bool, level: Level, args: fmt::Arguments<'_>) {
    if condition {
        default_notifier().inlinef(level, args);
    }
}

pub fn lazy<F>(level: Level, produce: F)
where
    F: FnOnce() -> String,
{
    default_notifier().lazy(level, produce);
}

pub fn color(style: &Style, args: fmt::Arguments<'_>) {
    default_notifier().color(style, args);
}

pub fn highlight(args: fmt::Arguments<'_>) {
    default_notifier().highlight(args);
}

pub fn format<F>(formatter: F, args: fmt::Arguments<'_>)
where
    F: FnOnce(fmt::Arguments<'_>) -> String,
{
    default_notifier().format(formatter, args);
}

pub fn json(values: &[&dyn Encode]) {
    default_notifier().json(values);
}

pub fn json_title(title: &str, values: &[&dyn Encode]) {
    default_notifier().json_title(title, values);
}

pub fn json_indent(title: Option<&str>, indent: Indent, values: &[&dyn Encode]) {
    default_notifier().json_indent(title, indent, values);
}

pub fn robot(level: Level) {
    default_notifier().robot(level);
}

pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    default_notifier().fatal(args)
}
