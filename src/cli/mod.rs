// ============================================================================
// Aurora - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含行组装逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod demo;
pub mod json;
pub mod levels;
pub mod robot;
pub mod say;

use anyhow::Result;
use clap::{Parser, Subcommand};

use aurora::utils::constants::APP_NAME;
use aurora::utils::logger::init_tracing;
use aurora::{ColorMode, Config, RuntimeArgs};
use demo::{handle_demo, DemoArgs};
use json::{handle_json, JsonArgs};
use levels::{handle_levels, LevelsArgs};
use robot::{handle_robot, RobotArgs};
use say::{handle_say, SayArgs};

/// Aurora - Colorful leveled terminal output
#[derive(Debug, Parser)]
#[command(name = "aurora")]
#[command(about = "Colorful leveled terminal output for scripts and tools")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Print internal diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Color mode (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Disable colored output (same as --color never)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print one decorated line
    Say(SayArgs),
    /// Pretty-print JSON from a file or stdin
    Json(JsonArgs),
    /// Draw random ASCII robots
    Robot(RobotArgs),
    /// List levels and their symbols
    Levels(LevelsArgs),
    /// Show every output shape
    Demo(DemoArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    Config::initialize()?;
    // Merge runtime args to global config
    Config::merge_runtime_args(build_runtime_args(&cli))?;

    let config = Config::current()?;
    init_tracing(config.output.verbose, config.output.color.resolve());
    config.apply();
    tracing::debug!(app = APP_NAME, ?config, "configuration loaded");

    match cli.command {
        Commands::Say(args) => handle_say(args),
        Commands::Json(args) => handle_json(args),
        Commands::Robot(args) => handle_robot(args),
        Commands::Levels(args) => handle_levels(args),
        Commands::Demo(args) => handle_demo(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        color: if cli.no_color {
            Some(ColorMode::Never)
        } else {
            cli.color
        },
    }
}
