// ============================================================================
// Aurora - 工具模块
// ============================================================================
//
// 文件: src/utils/mod.rs
// 职责: 通用工具子模块导出
// 边界:
//   - ✅ 样式渲染、输出目标、常量、诊断日志
//   - ❌ 不应包含 Notifier 逻辑
//
// ============================================================================

pub mod colors;
pub mod constants;
pub mod logger;
pub mod sink;
pub mod styles;
