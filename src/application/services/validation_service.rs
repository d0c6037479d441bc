//! 环境校验应用服务

use crate::config::format::DotenvParser;
use crate::domain::error::Result;
use crate::domain::models::outcome::preview;
use crate::domain::models::requirement::SUPABASE_URL;
use crate::domain::models::{
    EnvMap, FileStatus, Requirement, RequirementOutcome, RequirementStatus, ValidationReport,
};
use crate::domain::repositories::EnvFileRepository;
use log::debug;
use std::sync::Arc;

/// 环境校验服务
pub struct ValidationService {
    repository: Arc<dyn EnvFileRepository>,
    requirements: &'static [Requirement],
}

impl ValidationService {
    pub fn new(
        repository: Arc<dyn EnvFileRepository>,
        requirements: &'static [Requirement],
    ) -> Self {
        Self {
            repository,
            requirements,
        }
    }

    /// 规则表
    pub fn requirements(&self) -> &'static [Requirement] {
        self.requirements
    }

    /// 完整流程：准备文件 → 解析 → 校验 → 诊断信息
    ///
    /// 文件刚从模板生成或完全缺失时直接返回失败报告，不校验模板里的占位值。
    pub fn run(&self) -> Result<ValidationReport> {
        let env_file = self.repository.env_path().to_path_buf();

        let status = self.repository.ensure()?;
        if status != FileStatus::Present {
            return Ok(ValidationReport::without_checks(env_file, status));
        }

        let content = self.repository.read()?;
        let vars = DotenvParser::parse(&content);
        debug!("解析到 {} 个变量", vars.len());

        let (valid, outcomes) = Self::validate(&vars, self.requirements);
        let project_id = if valid {
            Self::project_id(&vars)
        } else {
            None
        };

        Ok(ValidationReport {
            env_file,
            file_status: status,
            valid,
            requirements: outcomes,
            project_id,
        })
    }

    /// 按顺序校验全部规则，不短路：每条规则都会给出结果
    pub fn validate(vars: &EnvMap, requirements: &[Requirement]) -> (bool, Vec<RequirementOutcome>) {
        let outcomes: Vec<RequirementOutcome> = requirements
            .iter()
            .map(|req| Self::check(vars, req))
            .collect();
        let valid = outcomes.iter().all(RequirementOutcome::is_valid);
        (valid, outcomes)
    }

    fn check(vars: &EnvMap, req: &Requirement) -> RequirementOutcome {
        let (status, preview) = match vars.present(req.name) {
            None => (RequirementStatus::Missing, None),
            Some(value) if !req.matches(value) => {
                (RequirementStatus::InvalidFormat, Some(preview(value)))
            }
            Some(_) => (RequirementStatus::Valid, None),
        };
        debug!("{}: {:?}", req.name, status);

        RequirementOutcome {
            name: req.name,
            description: req.description,
            status,
            preview,
        }
    }

    /// 从项目地址中取出子域名，即 Supabase 项目 ID
    ///
    /// `https://abcxyz.supabase.co` → `abcxyz`
    pub fn project_id(vars: &EnvMap) -> Option<String> {
        let url = vars.present(SUPABASE_URL)?;
        let (_, rest) = url.split_once("//")?;
        let label = rest.split('.').next()?;
        Some(label.to_string())
    }
}
