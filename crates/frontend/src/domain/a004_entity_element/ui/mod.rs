pub mod form;
pub mod list;
pub mod view;

pub use form::EntityElementForm;
pub use list::EntityElementList;
