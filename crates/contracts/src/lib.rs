//! Wire model of the configuration admin panel.
//!
//! Shared by every page of the frontend: the four persisted resources, their
//! create/update/status-change DTOs and the enumerated status codes.

pub mod domain;
pub mod enums;
