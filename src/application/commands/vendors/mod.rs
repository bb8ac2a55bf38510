// src/application/commands/vendors/mod.rs
mod create;
mod fields;
mod service;
mod update;

pub use fields::VendorFields;
pub use service::VendorCommandService;
