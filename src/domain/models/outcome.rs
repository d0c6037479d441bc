//! 校验结果模型

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// 预览截断长度（字符数）
pub const PREVIEW_CHARS: usize = 20;

/// .env 文件状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// 文件已存在，继续解析校验
    Present,
    /// 文件不存在，已从 .env.example 复制
    Seeded,
    /// 文件和模板都不存在
    Missing,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Present => write!(f, "present"),
            FileStatus::Seeded => write!(f, "seeded"),
            FileStatus::Missing => write!(f, "missing"),
        }
    }
}

/// 单条规则的校验状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    Valid,
    Missing,
    InvalidFormat,
}

/// 单条规则的校验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementOutcome {
    pub name: &'static str,
    pub description: &'static str,
    pub status: RequirementStatus,
    /// 仅格式错误时给出，避免完整密钥进入日志
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl RequirementOutcome {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status == RequirementStatus::Valid
    }
}

/// 一次完整校验的结论
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub env_file: PathBuf,
    pub file_status: FileStatus,
    pub valid: bool,
    pub requirements: Vec<RequirementOutcome>,
    pub project_id: Option<String>,
}

impl ValidationReport {
    /// 文件缺失或刚生成时的报告（不做变量校验）
    #[must_use]
    pub fn without_checks(env_file: PathBuf, file_status: FileStatus) -> Self {
        Self {
            env_file,
            file_status,
            valid: false,
            requirements: Vec::new(),
            project_id: None,
        }
    }

    /// 进程退出码：通过为 0，其余一律为 1
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.valid { 0 } else { 1 }
    }
}

/// 截取前 20 个字符并追加省略号
#[must_use]
pub fn preview(value: &str) -> String {
    let head: String = value.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}
