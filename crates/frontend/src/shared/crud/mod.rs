//! Generic list page of a resource: state, controller, form model and views.

pub mod controller;
pub mod dialogs;
pub mod expansion;
pub mod form;
pub mod page;
pub mod state;
pub mod view;
