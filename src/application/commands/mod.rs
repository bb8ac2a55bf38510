// src/application/commands/mod.rs
pub mod products;
pub mod seed;
pub mod vendors;

mod shared;
