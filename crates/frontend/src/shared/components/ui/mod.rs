pub mod badge;
pub mod form_field;

pub use badge::Badge;
pub use form_field::FormField;
