// ============================================================================
// Aurora - 日志级别
// ============================================================================
//
// 文件: src/models/level.rs
// 职责: 日志级别数据结构定义
// 边界:
//   - ✅ 内置级别枚举定义
//   - ✅ 自定义级别键
//   - ✅ 级别名称解析与显示
//   - ❌ 不应包含符号/样式映射（由注册表负责）
//   - ❌ 不应包含级别过滤逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AuroraError;

/// 日志级别
///
/// 级别只作为符号和样式的查找键，不存在阈值过滤。
/// `Custom` 用于内置集合之外的键，注册表对其同样宽容：
/// 未登记时使用空符号和无样式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// 调试信息
    Debug,
    /// 常规信息
    Info,
    /// 值得留意的事件
    Notice,
    /// 潜在问题
    Warn,
    /// 错误
    Error,
    /// 需要关注的提醒
    Alert,
    /// 严重问题
    Critical,
    /// 无级别装饰的输出
    NoLevel,
    /// 内置集合之外的级别键
    Custom(u16),
}

impl Level {
    /// 全部内置级别
    pub const BUILTIN: [Level; 8] = [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warn,
        Level::Error,
        Level::Alert,
        Level::Critical,
        Level::NoLevel,
    ];

    /// 级别名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Notice => "notice",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Alert => "alert",
            Level::Critical => "critical",
            Level::NoLevel => "none",
            Level::Custom(_) => "custom",
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Level::Custom(_))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Custom(key) => write!(f, "custom({})", key),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl FromStr for Level {
    type Err = AuroraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "notice" => Ok(Level::Notice),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "alert" => Ok(Level::Alert),
            "critical" => Ok(Level::Critical),
            "none" => Ok(Level::NoLevel),
            _ => Err(AuroraError::UnknownLevel(s.to_string())),
        }
    }
}
