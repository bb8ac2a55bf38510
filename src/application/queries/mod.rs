// src/application/queries/mod.rs
pub mod products;
pub mod vendors;
