// ============================================================================
// Aurora - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 日志符号、图标与格式常量定义
// 边界:
//   - ✅ 默认级别符号定义
//   - ✅ 成功/失败图标定义
//   - ✅ 时间戳格式定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含颜色渲染逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "AURORA";

/// 时间戳格式（本地时间，12 小时制）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// 结构化输出标题后缀
pub const JSON_TITLE_SUFFIX: &str = "JSON ↴↴";

/// 图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
}

/// 各级别默认符号
pub mod symbols {
    pub const DEBUG: &str = "[⧳]";
    pub const INFO: &str = "[✔]";
    pub const NOTICE: &str = "[⚑]";
    pub const WARN: &str = "[⚠]";
    pub const ERROR: &str = "[✘]";
    pub const ALERT: &str = "[✭]";
    pub const CRITICAL: &str = "[‼]";
    /// 无级别输出只保留一个空格占位
    pub const NO_LEVEL: &str = " ";
}
