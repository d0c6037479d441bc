//! 命令处理器
//!
//! 每个命令一个模块，实现 CommandHandler trait

use crate::cli::OutputFormat;
use crate::domain::error::Result;

pub mod check;
pub mod console;
pub mod requirements;

pub use check::CheckCommand;
pub use requirements::RequirementsCommand;

/// 命令上下文
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub verbose: bool,
    pub format: OutputFormat,
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令，返回进程退出码
    fn execute(&self, ctx: &CommandContext) -> Result<i32>;
}
