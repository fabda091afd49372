// ============================================================================
// Aurora - 错误类型
// ============================================================================
//
// 文件: src/error.rs
// 职责: 库内统一错误类型定义
// 边界:
//   - ✅ 错误枚举定义
//   - ✅ 第三方错误转换
//   - ❌ 不应包含错误输出逻辑
//   - ❌ 不应包含恢复策略
//
// ============================================================================

use thiserror::Error;

/// Aurora 库错误
#[derive(Debug, Error)]
pub enum AuroraError {
    /// 结构化数据编码失败
    #[error("failed to marshal JSON: {0}")]
    Encode(#[from] serde_json::Error),

    /// 输出目标读写失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 无法识别的日志级别名称
    #[error("unknown level: {0}")]
    UnknownLevel(String),

    /// 无法识别的缩进模式名称
    #[error("unknown indent mode: {0}")]
    UnknownIndent(String),

    /// 无法识别的颜色模式
    #[error("invalid color mode: {0} (expected auto, always or never)")]
    InvalidColorMode(String),

    /// 全局配置错误
    #[error("configuration error: {0}")]
    Config(String),
}

/// Aurora 结果类型
pub type Result<T> = std::result::Result<T, AuroraError>;
