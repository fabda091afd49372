// ============================================================================
// Aurora - levels 命令
// ============================================================================
//
// 文件: src/cli/levels.rs
// 职责: 列出内置级别与当前符号
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 文本与 JSON 两种展示
//   - ❌ 不应修改注册表
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use aurora::core::registry;
use aurora::{Level, Notifier};

/// 级别列表命令参数
#[derive(Debug, Args)]
pub struct LevelsArgs {
    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

/// 级别表中的一行
#[derive(Debug, Serialize)]
struct LevelRow {
    level: Level,
    name: &'static str,
    symbol: String,
}

/// 处理 levels 命令
pub fn handle_levels(args: LevelsArgs) -> Result<()> {
    let notifier = Notifier::stdout();
    let rows = level_rows();

    if args.json {
        notifier.json_indent(None, aurora::Indent::Space2, &[&rows]);
        return Ok(());
    }

    for row in &rows {
        notifier.inlinef(row.level, format_args!("{}", row.name));
    }
    Ok(())
}

fn level_rows() -> Vec<LevelRow> {
    Level::BUILTIN
        .into_iter()
        .map(|level| LevelRow {
            level,
            name: level.as_str(),
            symbol: registry::symbol(level),
        })
        .collect()
}
