//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: 领域实体（规则表、变量映射、校验结果）
//! - repositories: 存储接口（输出端口）
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{DomainError, Result};
pub use models::{EnvMap, FileStatus, Requirement, RequirementOutcome, RequirementStatus, ValidationReport};
pub use repositories::{EnvFileRepository, StorageConfig};
