//! 应用程序容器
//!
//! 负责依赖注入和生命周期管理

use crate::application::services::ValidationService;
use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands::{CheckCommand, CommandContext, CommandHandler, RequirementsCommand};
use crate::domain::error::Result;
use crate::domain::models::requirements;
use crate::domain::repositories::{EnvFileRepository, StorageConfig};
use crate::infrastructure::{FileEnvRepository, paths};
use std::sync::Arc;

/// 应用程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub verbose: bool,
    pub color: bool,
    pub format: OutputFormat,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// 从命令行参数构建配置
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root_dir = paths::resolve_root(cli.dir.as_deref())?;
        Ok(Self {
            verbose: cli.verbose,
            color: !cli.no_color,
            format: cli.format,
            storage: StorageConfig::new(root_dir),
        })
    }

    /// 日志默认级别
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            format: OutputFormat::Env,
            storage: StorageConfig::default(),
        }
    }
}

/// 应用程序容器
pub struct Application {
    /// 校验服务
    pub validation_service: Arc<ValidationService>,
    context: CommandContext,
}

impl Application {
    /// 创建应用程序实例
    pub fn new(config: AppConfig) -> Self {
        let repo: Arc<dyn EnvFileRepository> = Arc::new(FileEnvRepository::new(&config.storage));
        let validation_service = Arc::new(ValidationService::new(repo, requirements()));

        if !config.color {
            colored::control::set_override(false);
        }

        Self {
            validation_service,
            context: CommandContext {
                verbose: config.verbose,
                format: config.format,
            },
        }
    }

    /// 执行命令，返回进程退出码
    pub fn run(&self, command: Commands) -> Result<i32> {
        let handler: Box<dyn CommandHandler> = match command {
            Commands::Check => Box::new(CheckCommand::new(self.validation_service.clone())),
            Commands::Requirements => {
                Box::new(RequirementsCommand::new(self.validation_service.clone()))
            }
        };
        handler.execute(&self.context)
    }
}
