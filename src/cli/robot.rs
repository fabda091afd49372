// ============================================================================
// Aurora - robot 命令
// ============================================================================
//
// 文件: src/cli/robot.rs
// 职责: 输出随机 ASCII 机器人
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ❌ 不应包含机器人生成逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use aurora::{Level, Notifier};

/// 机器人命令参数
#[derive(Debug, Args)]
pub struct RobotArgs {
    /// Level whose color is used
    #[arg(short, long, default_value = "info")]
    pub level: Level,

    /// Number of robots
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,
}

/// 处理 robot 命令
pub fn handle_robot(args: RobotArgs) -> Result<()> {
    let notifier = Notifier::stdout();
    for index in 0..args.count {
        if index > 0 {
            notifier.br();
        }
        notifier.robot(args.level);
    }
    Ok(())
}
