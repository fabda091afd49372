// ============================================================================
// Aurora - json 命令
// ============================================================================
//
// 文件: src/cli/json.rs
// 职责: 读取 JSON 并美化输出
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 从文件或标准输入读取一个或多个 JSON 值
//   - ❌ 不应包含 JSON 编码逻辑
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

use aurora::{Encode, Indent, Notifier};

/// JSON 美化命令参数
#[derive(Debug, Args)]
pub struct JsonArgs {
    /// Input file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Title line printed before the data
    #[arg(short, long)]
    pub title: Option<String>,

    /// Indentation (none, space, space2, space4, tab, debug)
    #[arg(short, long, default_value = "space2")]
    pub indent: Indent,
}

/// 处理 json 命令
pub fn handle_json(args: JsonArgs) -> Result<()> {
    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let values = parse_values(&input)?;
    tracing::debug!(count = values.len(), indent = %args.indent, "parsed JSON input");

    let refs: Vec<&dyn Encode> = values.iter().map(|value| value as &dyn Encode).collect();
    Notifier::stdout().json_indent(args.title.as_deref(), args.indent, &refs);
    Ok(())
}

/// 解析空白分隔的多个 JSON 值（兼容 NDJSON）
fn parse_values(input: &str) -> Result<Vec<Value>> {
    serde_json::Deserializer::from_str(input)
        .into_iter::<Value>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("input is not valid JSON")
}
