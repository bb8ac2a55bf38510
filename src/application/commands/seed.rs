// src/application/commands/seed.rs
use std::sync::Arc;

use tracing::info;

use crate::{
    application::{
        dto::{ProductDto, VendorDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{
        money::PriceCents,
        product::{NewProduct, ProductStatus, ProductTitle, ProductType, ProductWriteRepository},
        slug::Slug,
        vendor::{NewVendor, VendorName, VendorStatus, VendorWriteRepository},
    },
};

/// Bootstrap vendor every product form falls back to.
pub const BOOTSTRAP_VENDOR_NAME: &str = "Tried and True";
pub const BOOTSTRAP_VENDOR_SLUG: &str = "tried-and-true";

const BOOTSTRAP_PRODUCTS: [(&str, &str, i64); 2] = [
    (
        "Pre-American Revolution Activities",
        "pre-american-revolution-activities",
        2900,
    ),
    ("World War II Simulation", "world-war-ii-simulation", 4900),
];

#[derive(Debug)]
pub struct SeedReport {
    pub vendor: VendorDto,
    pub products: Vec<ProductDto>,
}

/// Loads the bootstrap catalog. Running it again changes nothing: rows are
/// matched by slug and existing ones are left as they are.
pub struct CatalogSeeder {
    vendor_repo: Arc<dyn VendorWriteRepository>,
    product_repo: Arc<dyn ProductWriteRepository>,
    clock: Arc<dyn Clock>,
}

impl CatalogSeeder {
    pub fn new(
        vendor_repo: Arc<dyn VendorWriteRepository>,
        product_repo: Arc<dyn ProductWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            vendor_repo,
            product_repo,
            clock,
        }
    }

    pub async fn seed(&self) -> ApplicationResult<SeedReport> {
        let now = self.clock.now();
        let vendor = self
            .vendor_repo
            .upsert(NewVendor {
                name: VendorName::new(BOOTSTRAP_VENDOR_NAME)?,
                slug: Slug::new(BOOTSTRAP_VENDOR_SLUG)?,
                description: None,
                contact_email: None,
                location: None,
                default_commission: None,
                status: VendorStatus::default(),
                created_at: now,
                updated_at: now,
            })
            .await?;

        let mut products = Vec::with_capacity(BOOTSTRAP_PRODUCTS.len());
        for (title, slug, cents) in BOOTSTRAP_PRODUCTS {
            let product = self
                .product_repo
                .upsert(NewProduct {
                    vendor_id: vendor.id,
                    title: ProductTitle::new(title)?,
                    slug: Slug::new(slug)?,
                    subtitle: None,
                    price: PriceCents::new(cents)?,
                    sale_price: None,
                    short_description: None,
                    long_description: None,
                    product_type: ProductType::default(),
                    status: ProductStatus::default(),
                    age_min: None,
                    age_max: None,
                    sku: None,
                    thumbnail_url: None,
                    featured: false,
                    created_at: now,
                    updated_at: now,
                })
                .await?;
            products.push(ProductDto::from(product));
        }

        info!(vendor = %vendor.slug, products = products.len(), "catalog seeded");
        Ok(SeedReport {
            vendor: vendor.into(),
            products,
        })
    }
}
