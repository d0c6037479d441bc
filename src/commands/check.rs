//! check 命令处理器

use super::console::Console;
use super::{CommandContext, CommandHandler};
use crate::application::services::ValidationService;
use crate::cli::OutputFormat;
use crate::domain::error::{DomainError, Result};
use crate::domain::models::FileStatus;
use log::{info, warn};
use std::sync::Arc;

/// check 命令
pub struct CheckCommand {
    validation_service: Arc<ValidationService>,
}

impl CheckCommand {
    pub fn new(validation_service: Arc<ValidationService>) -> Self {
        Self { validation_service }
    }
}

impl CommandHandler for CheckCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<i32> {
        let mut console = Console::stdout();
        if ctx.format == OutputFormat::Env {
            console.header().map_err(|e| DomainError::io("<stdout>", e))?;
        }

        let report = self.validation_service.run()?;
        info!(
            "{}: {} -> {}",
            report.env_file.display(),
            report.file_status,
            if report.valid { "通过" } else { "未通过" }
        );

        match ctx.format {
            OutputFormat::Env => console
                .report(&report, self.validation_service.requirements())
                .map_err(|e| DomainError::io("<stdout>", e))?,
            OutputFormat::Json => {
                // JSON 模式下没有文字说明，生成模板的提示走日志
                if report.file_status == FileStatus::Seeded {
                    warn!(
                        "已从模板生成 {}，请填写真实的 Supabase 凭据",
                        report.env_file.display()
                    );
                }
                let json = serde_json::to_string_pretty(&report)?;
                console
                    .raw(&json)
                    .map_err(|e| DomainError::io("<stdout>", e))?;
            }
        }

        Ok(report.exit_code())
    }
}
