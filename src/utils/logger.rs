// ============================================================================
// Aurora - 内部诊断日志
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: tracing 订阅器初始化
// 边界:
//   - ✅ 诊断日志级别管理
//   - ✅ 诊断日志输出到 stderr
//   - ❌ 不应包含面向用户的彩色输出（由 Notifier 负责）
//   - ❌ 不应包含文件日志写入
//
// ============================================================================

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 初始化诊断日志
///
/// `RUST_LOG` 优先；未设置时 verbose 模式使用 debug，否则使用 warn。
/// 重复初始化会被忽略。
pub fn init_tracing(verbose: bool, colored: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .with_ansi(colored);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
