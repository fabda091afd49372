// ============================================================================
// Aurora - demo 命令
// ============================================================================
//
// 文件: src/cli/demo.rs
// 职责: 演示全部输出形态
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 依次调用各种输出操作
//   - ❌ 不应包含行组装逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use serde_json::json;

use aurora::{paint, Indent, Level, Notifier};

/// 演示命令参数
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Prefix used for the derived-notifier section
    #[arg(short, long, default_value = "demo")]
    pub prefix: String,
}

/// 处理 demo 命令
pub fn handle_demo(args: DemoArgs) -> Result<()> {
    let n = Notifier::stdout();

    for level in Level::BUILTIN {
        n.inlinef(level, format_args!("{} message", level));
    }
    n.br();

    n.logf(Level::Info, format_args!("timestamped line"));
    n.printf(Level::Notice, format_args!("plain line, no symbol"));
    n.success(format_args!("operation completed"));
    n.failure(format_args!("operation failed"));
    n.br();

    let scoped = n.with(&args.prefix);
    scoped.info(format_args!("one prefix"));
    scoped.with("child").warn(format_args!("two prefixes"));
    n.when(true, Level::Debug, format_args!("guard was true"));
    n.when(false, Level::Debug, format_args!("never printed"));
    n.lazy(Level::Alert, || format!("lazy value: {}\n", 6 * 7));
    n.br();

    n.highlight(format_args!(" highlighted "));
    n.br();
    n.printf(
        Level::NoLevel,
        format_args!(
            "{} {} {}",
            paint("bold").bold(),
            paint("underline").bright_cyan().underline(),
            paint("inverse").reverse()
        ),
    );
    n.br();

    let sample = json!({
        "name": "aurora",
        "levels": Level::BUILTIN.len(),
        "tags": ["color", "prefix", "json"],
        "nested": {"ok": true, "ratio": 0.5, "missing": null}
    });
    n.json_title("Sample", &[&sample]);
    n.json_indent(Some("Debug indent"), Indent::Debug, &[&sample["tags"]]);

    n.robot(Level::Debug);
    Ok(())
}
