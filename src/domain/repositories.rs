//! 存储接口定义（输出端口）

use crate::domain::error::Result;
use crate::domain::models::FileStatus;
use std::path::{Path, PathBuf};

/// .env 文件存储接口
pub trait EnvFileRepository {
    /// 目标 .env 路径
    fn env_path(&self) -> &Path;

    /// 模板 .env.example 路径
    fn template_path(&self) -> &Path;

    /// 确保 .env 存在：已存在则不动，缺失时尝试从模板复制
    fn ensure(&self) -> Result<FileStatus>;

    /// 读取 .env 原始内容
    fn read(&self) -> Result<String>;
}

/// 存储配置
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// .env 与 .env.example 所在目录
    pub root_dir: PathBuf,
}

/// 目标文件名（固定）
pub const ENV_FILE: &str = ".env";
/// 模板文件名（固定）
pub const TEMPLATE_FILE: &str = ".env.example";

impl StorageConfig {
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
