// ============================================================================
// Aurora - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心输出逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体输出实现
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

pub mod global;
pub mod notifier;
pub mod registry;
pub mod structured;

// 重新导出常用类型
pub use global::{default_notifier, set_default};
pub use notifier::Notifier;
pub use registry::RegistrySnapshot;
pub use structured::{Encode, Indent};
