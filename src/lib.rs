//! envgate - 构建前的 .env 校验工具
//!
//! 分层结构沿用 Clean Architecture：
//! - domain: 规则表、变量映射、校验结果与错误类型
//! - application: 校验用例
//! - infrastructure: .env / .env.example 文件访问
//! - commands: 命令处理与终端输出

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 文件格式
pub mod config;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

// 重新导出常用类型
pub use domain::{DomainError, EnvMap, FileStatus, Result, ValidationReport};
