//! 领域层错误类型
//!
//! 只有意料之外的 IO 失败会以错误值传播；缺失变量、格式错误等
//! 属于校验结论，由 `ValidationReport` 表达。

use miette::Diagnostic;
use std::error::Error as _;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("IO 错误: {path}")]
    #[diagnostic(code(envgate::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("权限不足: {path}")]
    #[diagnostic(
        code(envgate::permission_denied),
        help("检查 .env / .env.example 以及所在目录的读写权限")
    )]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("工作目录不可用: {0}")]
    #[diagnostic(code(envgate::working_dir), help("使用 --dir 指定存在的目录"))]
    WorkingDir(PathBuf),

    #[error("序列化错误: {0}")]
    #[diagnostic(code(envgate::serialization))]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    /// 为 IO 错误附加出错路径
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => DomainError::PermissionDenied { path, source },
            _ => DomainError::Io { path, source },
        }
    }

    /// 报告错误，支持详细/安静模式
    /// verbose = true: 错误链 + 帮助信息
    /// verbose = false: 单行关键信息
    pub fn report(&self, verbose: bool) {
        eprintln!("❌ 错误: {}", self);
        if !verbose {
            return;
        }

        let mut current = self.source();
        let mut first = true;
        while let Some(err) = current {
            if first {
                eprintln!("  └─ 原因: {}", err);
                first = false;
            } else {
                eprintln!("     └─ {}", err);
            }
            current = err.source();
        }

        if let Some(help) = self.help() {
            eprintln!("  提示: {}", help);
        }
    }
}
