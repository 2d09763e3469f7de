pub mod form;
pub mod list;
pub mod view;

pub use form::SystemEntityForm;
pub use list::SystemEntityList;
