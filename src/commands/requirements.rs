//! requirements 命令处理器

use super::console::Console;
use super::{CommandContext, CommandHandler};
use crate::application::services::ValidationService;
use crate::cli::OutputFormat;
use crate::domain::error::{DomainError, Result};
use std::sync::Arc;

/// requirements 命令：列出必需变量规则
pub struct RequirementsCommand {
    validation_service: Arc<ValidationService>,
}

impl RequirementsCommand {
    pub fn new(validation_service: Arc<ValidationService>) -> Self {
        Self { validation_service }
    }
}

impl CommandHandler for RequirementsCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<i32> {
        let requirements = self.validation_service.requirements();
        match ctx.format {
            OutputFormat::Env => Console::stdout()
                .requirements(requirements)
                .map_err(|e| DomainError::io("<stdout>", e))?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(requirements)?;
                Console::stdout()
                    .raw(&json)
                    .map_err(|e| DomainError::io("<stdout>", e))?;
            }
        }
        Ok(0)
    }
}
