//! CLI 参数定义

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// validate-env - 构建前的 .env 校验工具
#[derive(Parser, Debug)]
#[command(
    name = "validate-env",
    version,
    about = "构建前校验 .env 中的 Supabase 凭据",
    long_about = "检查工作目录下的 .env 是否包含格式正确的 REACT_APP_SUPABASE_URL 和 REACT_APP_SUPABASE_KEY；\n缺少 .env 时会尝试从 .env.example 复制一份。校验通过退出码为 0，否则为 1。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// .env 与 .env.example 所在目录（默认当前目录）
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// 输出格式 (env/json)
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Env)]
    pub format: OutputFormat,

    /// 禁用彩色输出
    #[arg(long, global = true)]
    pub no_color: bool,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// 校验 .env（默认命令）
    Check,

    /// 列出必需变量及其格式
    Requirements,
}

/// 输出格式类型
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 彩色文本
    #[default]
    Env,
    /// JSON 报告
    Json,
}

impl Cli {
    /// 未指定子命令时执行 check
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_check() {
        let cli = Cli::try_parse_from(["validate-env"]).unwrap();
        assert_eq!(cli.command(), Commands::Check);
        assert_eq!(cli.format, OutputFormat::Env);
        assert!(cli.dir.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "validate-env",
            "requirements",
            "--format",
            "json",
            "-C",
            "/srv/app",
            "--no-color",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.command(), Commands::Requirements);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.dir, Some(PathBuf::from("/srv/app")));
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["validate-env", "--format", "yaml"]).is_err());
    }
}
