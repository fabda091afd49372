// ============================================================================
// Aurora - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明与公共 API 导出
// 边界:
//   - ✅ 子模块声明
//   - ✅ 常用类型与快捷函数重新导出
//   - ❌ 不应包含具体实现
//
// ============================================================================

//! Aurora - 彩色分级终端日志工具
//!
//! 提供带级别符号、颜色、可选时间戳和上下文前缀的终端输出，
//! 以及带颜色的 JSON 美化输出。
//!
//! ```
//! use aurora::{Level, MemorySink, Notifier};
//!
//! let sink = MemorySink::new();
//! let log = Notifier::from_writer(sink.clone()).with("build");
//!
//! aurora::info!(log => "compiled {} crates", 12);
//! aurora::success!(log => "done");
//! log.json_title("stats", &[&serde_json::json!({"warnings": 0})]);
//!
//! let text = aurora::strip_ansi(&sink.contents());
//! assert!(text.starts_with("[✔] [build] compiled 12 crates\n"));
//! assert!(text.contains("\"warnings\":0"));
//! # let _ = Level::Info;
//! ```

pub mod core;
pub mod error;
mod macros;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::global::{
    alert, br, color, critical, debug, default_notifier, error, failure, fatal, format, highlight,
    info, inlinef, json, json_indent, json_title, lazy, line, logf, notice, printf, robot,
    set_default, success, warn, when, with,
};
pub use crate::core::notifier::Notifier;
pub use crate::core::registry::{
    reset_styles, reset_symbols, set_style, set_symbol, snapshot, RegistrySnapshot,
};
pub use crate::core::structured::{to_colored_json, Encode, Indent};
pub use crate::error::{AuroraError, Result};
pub use crate::models::config::{ColorMode, Config, RuntimeArgs};
pub use crate::models::level::Level;
pub use crate::utils::colors::{strip_ansi, Attribute, Color, Style};
pub use crate::utils::sink::{FanOut, MemorySink, Sink};
pub use crate::utils::styles::{paint, Painted};
