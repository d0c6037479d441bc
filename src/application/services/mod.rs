//! 应用服务

pub mod validation_service;

pub use validation_service::ValidationService;
