//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - storage: 文件系统存储实现
//! - paths: 路径工具

pub mod paths;
pub mod storage;

pub use storage::FileEnvRepository;
