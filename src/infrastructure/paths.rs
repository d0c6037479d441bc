//! 路径管理工具

use crate::domain::error::{DomainError, Result};
use crate::domain::repositories::{ENV_FILE, StorageConfig, TEMPLATE_FILE};
use std::path::{Path, PathBuf};

/// 解析工作目录：必须是已存在的目录
pub fn resolve_root(dir: Option<&Path>) -> Result<PathBuf> {
    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|e| DomainError::io(".", e))?,
    };

    if !root.is_dir() {
        return Err(DomainError::WorkingDir(root));
    }
    Ok(root)
}

/// 目标 .env 路径
#[must_use]
pub fn env_file_path(config: &StorageConfig) -> PathBuf {
    config.root_dir.join(ENV_FILE)
}

/// 模板 .env.example 路径
#[must_use]
pub fn template_file_path(config: &StorageConfig) -> PathBuf {
    config.root_dir.join(TEMPLATE_FILE)
}

/// 检查文件是否存在
#[must_use]
pub fn file_exists(path: &Path) -> bool {
    path.exists()
}
