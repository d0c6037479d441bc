//! 领域实体

pub mod env_map;
pub mod outcome;
pub mod requirement;

pub use env_map::EnvMap;
pub use outcome::{FileStatus, RequirementOutcome, RequirementStatus, ValidationReport};
pub use requirement::{REQUIREMENTS, Requirement, requirements};
