// ============================================================================
// Aurora - 数据模型
// ============================================================================
//
// 文件: src/models/mod.rs
// 职责: 数据模型子模块导出
// 边界:
//   - ✅ 日志级别与运行配置
//   - ❌ 不应包含输出逻辑
//
// ============================================================================

pub mod config;
pub mod level;

pub use config::{ColorMode, Config, RuntimeArgs};
pub use level::Level;
