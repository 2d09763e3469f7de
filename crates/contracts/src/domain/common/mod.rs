//! Common types and traits for all resources

pub mod audit;
pub mod resource;
pub mod serde_utils;

// Re-exports
pub use audit::AuditTrail;
pub use resource::{Capabilities, Resource, StatusChange};
