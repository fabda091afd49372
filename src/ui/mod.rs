// ============================================================================
// Aurora - UI 模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 装饰性终端内容
// 边界:
//   - ✅ ASCII 机器人生成
//   - ❌ 不应包含输出目标写入
//
// ============================================================================

pub mod robot;
