pub mod api_client;
pub mod api_error;
pub mod browser;
pub mod components;
pub mod crud;
pub mod date_utils;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod resource_service;
pub mod transport;
