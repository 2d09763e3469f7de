//! Enumerated codes carried as short strings on the wire.

pub mod code_table;
pub mod flags;
pub mod status;
pub mod sync_mode;

pub use code_table::CodeTable;
pub use flags::{Editability, ImportState, Visibility};
pub use status::{ParameterStatus, RecordStatus, StatusFlag};
pub use sync_mode::SyncMode;
