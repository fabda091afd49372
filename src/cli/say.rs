// ============================================================================
// Aurora - say 命令
// ============================================================================
//
// 文件: src/cli/say.rs
// 职责: 输出一行带级别装饰的消息
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 选择输出形态（行内、时间戳、纯文本）
//   - ❌ 不应包含行组装逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use aurora::{Level, Notifier};

/// 单行输出命令参数
#[derive(Debug, Args)]
pub struct SayArgs {
    /// Message words, joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,

    /// Level (debug, info, notice, warn, error, alert, critical, none)
    #[arg(short, long, default_value = "info")]
    pub level: Level,

    /// Context prefix; repeat to build a chain
    #[arg(short, long)]
    pub prefix: Vec<String>,

    /// Include a timestamp
    #[arg(short, long, conflicts_with = "plain")]
    pub timestamp: bool,

    /// Omit the level symbol
    #[arg(long)]
    pub plain: bool,
}

/// 处理 say 命令
pub fn handle_say(args: SayArgs) -> Result<()> {
    let notifier = build_notifier(Notifier::stdout(), &args.prefix);
    let message = args.message.join(" ");

    if args.timestamp {
        notifier.logf(args.level, format_args!("{}", message));
    } else if args.plain {
        notifier.printf(args.level, format_args!("{}", message));
    } else {
        notifier.inlinef(args.level, format_args!("{}", message));
    }
    Ok(())
}

fn build_notifier(root: Notifier, prefixes: &[String]) -> Notifier {
    prefixes
        .iter()
        .fold(root, |notifier, prefix| notifier.with(prefix))
}
