// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{products::ProductCommandService, vendors::VendorCommandService},
        ports::{cache::CacheInvalidator, time::Clock, util::SlugGenerator},
        queries::{products::ProductQueryService, vendors::VendorQueryService},
    },
    domain::{
        product::{ProductReadRepository, ProductWriteRepository, services::ProductSlugService},
        slug::Slug,
        vendor::{VendorReadRepository, VendorWriteRepository, services::VendorSlugService},
    },
};

/// Catalog repositories handed to [`ApplicationServices::new`].
pub struct CatalogRepositories {
    pub vendor_write: Arc<dyn VendorWriteRepository>,
    pub vendor_read: Arc<dyn VendorReadRepository>,
    pub product_write: Arc<dyn ProductWriteRepository>,
    pub product_read: Arc<dyn ProductReadRepository>,
}

pub struct ApplicationServices {
    pub vendor_commands: Arc<VendorCommandService>,
    pub product_commands: Arc<ProductCommandService>,
    pub vendor_queries: Arc<VendorQueryService>,
    pub product_queries: Arc<ProductQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: CatalogRepositories,
        cache: Arc<dyn CacheInvalidator>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        default_vendor: Slug,
    ) -> Self {
        let CatalogRepositories {
            vendor_write,
            vendor_read,
            product_write,
            product_read,
        } = repos;

        let vendor_slugs = Arc::new(VendorSlugService::new(
            Arc::clone(&vendor_read),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let product_slugs = Arc::new(ProductSlugService::new(
            Arc::clone(&product_read),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let vendor_commands = Arc::new(VendorCommandService::new(
            vendor_write,
            Arc::clone(&vendor_read),
            vendor_slugs,
            Arc::clone(&cache),
            Arc::clone(&clock),
        ));
        let product_commands = Arc::new(ProductCommandService::new(
            product_write,
            Arc::clone(&product_read),
            Arc::clone(&vendor_read),
            product_slugs,
            cache,
            clock,
            default_vendor,
        ));

        let vendor_queries = Arc::new(VendorQueryService::new(
            Arc::clone(&vendor_read),
            Arc::clone(&product_read),
        ));
        let product_queries = Arc::new(ProductQueryService::new(product_read, vendor_read));

        Self {
            vendor_commands,
            product_commands,
            vendor_queries,
            product_queries,
        }
    }
}
