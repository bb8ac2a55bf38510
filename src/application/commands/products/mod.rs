// src/application/commands/products/mod.rs
mod create;
mod fields;
mod service;
mod update;

pub use fields::ProductFields;
pub use service::ProductCommandService;
