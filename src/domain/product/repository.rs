use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{NewProduct, Product, ProductUpdate};
use crate::domain::product::value_objects::ProductId;
use crate::domain::slug::Slug;
use crate::domain::vendor::VendorId;
use async_trait::async_trait;

#[async_trait]
pub trait ProductWriteRepository: Send + Sync {
    /// Fails with `Conflict` when the slug is already taken.
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    /// Fails with `NotFound` when no product has `update.id`.
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;
    /// Insert unless the slug exists; otherwise return the stored row as is.
    async fn upsert(&self, product: NewProduct) -> DomainResult<Product>;
}

#[async_trait]
pub trait ProductReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>>;
    /// Newest first.
    async fn list(&self) -> DomainResult<Vec<Product>>;
    async fn list_by_vendor(&self, vendor_id: VendorId) -> DomainResult<Vec<Product>>;
}
