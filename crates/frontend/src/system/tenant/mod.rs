//! Tenant (RUC) context: capture from the URL, persistence and the page gate.

pub mod context;
pub mod guard;
pub mod storage;

pub use context::{logout, resolve_tenant, TenantContext, TenantId, TenantResolution};
pub use guard::{use_current_tenant, TenantGate};
pub use storage::{LocalStorage, MemoryStorage, TenantStorage};
