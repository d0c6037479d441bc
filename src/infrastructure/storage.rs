//! 文件存储实现

use crate::domain::error::{DomainError, Result};
use crate::domain::models::FileStatus;
use crate::domain::repositories::{EnvFileRepository, StorageConfig};
use crate::infrastructure::paths;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// 基于文件系统的 .env 存储
#[derive(Debug, Clone)]
pub struct FileEnvRepository {
    env_path: PathBuf,
    template_path: PathBuf,
}

impl FileEnvRepository {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            env_path: paths::env_file_path(config),
            template_path: paths::template_file_path(config),
        }
    }
}

impl EnvFileRepository for FileEnvRepository {
    fn env_path(&self) -> &Path {
        &self.env_path
    }

    fn template_path(&self) -> &Path {
        &self.template_path
    }

    fn ensure(&self) -> Result<FileStatus> {
        if paths::file_exists(&self.env_path) {
            debug!("找到 {}", self.env_path.display());
            return Ok(FileStatus::Present);
        }

        if !paths::file_exists(&self.template_path) {
            debug!(
                "{} 与 {} 均不存在",
                self.env_path.display(),
                self.template_path.display()
            );
            return Ok(FileStatus::Missing);
        }

        // 按字节原样复制
        std::fs::copy(&self.template_path, &self.env_path)
            .map_err(|e| DomainError::io(&self.env_path, e))?;
        info!(
            "已从 {} 生成 {}",
            self.template_path.display(),
            self.env_path.display()
        );
        Ok(FileStatus::Seeded)
    }

    fn read(&self) -> Result<String> {
        let bytes = std::fs::read(&self.env_path).map_err(|e| DomainError::io(&self.env_path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
