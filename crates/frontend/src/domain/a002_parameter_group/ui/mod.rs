pub mod form;
pub mod list;
pub mod view;

pub use form::ParameterGroupForm;
pub use list::ParameterGroupList;
