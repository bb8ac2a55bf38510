// src/application/commands/products/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{cache::CacheInvalidator, time::Clock},
    domain::{
        product::{ProductReadRepository, ProductWriteRepository, services::ProductSlugService},
        slug::Slug,
        vendor::VendorReadRepository,
    },
};

pub struct ProductCommandService {
    pub(super) write_repo: Arc<dyn ProductWriteRepository>,
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) vendor_repo: Arc<dyn VendorReadRepository>,
    pub(super) slug_service: Arc<ProductSlugService>,
    pub(super) cache: Arc<dyn CacheInvalidator>,
    pub(super) clock: Arc<dyn Clock>,
    /// Vendor that owns products submitted without an explicit vendor.
    pub(super) default_vendor: Slug,
}

impl ProductCommandService {
    pub fn new(
        write_repo: Arc<dyn ProductWriteRepository>,
        read_repo: Arc<dyn ProductReadRepository>,
        vendor_repo: Arc<dyn VendorReadRepository>,
        slug_service: Arc<ProductSlugService>,
        cache: Arc<dyn CacheInvalidator>,
        clock: Arc<dyn Clock>,
        default_vendor: Slug,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            vendor_repo,
            slug_service,
            cache,
            clock,
            default_vendor,
        }
    }
}
