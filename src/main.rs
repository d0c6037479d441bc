//! validate-env 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 退出码：校验通过为 0，任何失败为 1
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::Parser;
use envgate::app::{AppConfig, Application};
use envgate::cli::Cli;

fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();

    // 配置初始化
    let config = match AppConfig::from_cli(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            e.report(cli.verbose);
            std::process::exit(1);
        }
    };

    init_logger(&config);

    let app = Application::new(config.clone());

    match app.run(cli.command()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            e.report(config.verbose);
            std::process::exit(1);
        }
    }
}

/// 初始化日志：默认 warn，--verbose 为 debug，RUST_LOG 优先
fn init_logger(config: &AppConfig) {
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
