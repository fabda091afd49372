// ============================================================================
// Aurora - 命令行入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 程序入口与顶层错误输出
// 边界:
//   - ✅ 调用 CLI 路由
//   - ✅ 失败时输出错误并设置退出码
//   - ❌ 不应包含命令实现
//
// ============================================================================

mod cli;

fn main() {
    if let Err(err) = cli::run_cli() {
        aurora::failure!("{:#}", err);
        std::process::exit(1);
    }
}
