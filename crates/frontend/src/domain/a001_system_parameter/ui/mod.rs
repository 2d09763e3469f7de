pub mod form;
pub mod list;
pub mod view;

pub use form::SystemParameterForm;
pub use list::SystemParameterList;
