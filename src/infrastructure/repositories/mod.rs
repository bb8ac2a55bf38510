// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_product;
mod postgres_vendor;

pub use error::map_sqlx;
pub use postgres_product::{PostgresProductReadRepository, PostgresProductWriteRepository};
pub use postgres_vendor::{PostgresVendorReadRepository, PostgresVendorWriteRepository};
