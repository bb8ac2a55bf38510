// src/domain/mod.rs
pub mod errors;
pub mod money;
pub mod product;
pub mod slug;
pub mod vendor;
