pub mod a001_system_parameter;
pub mod a002_parameter_group;
pub mod a003_system_entity;
pub mod a004_entity_element;
pub mod common;
