//! Application Layer - 应用服务
//!
//! 包含：
//! - services: 应用服务（用例实现）

pub mod services;

pub use services::ValidationService;
