// src/domain/product/entity.rs
use crate::domain::money::PriceCents;
use crate::domain::product::value_objects::{
    AgeYears, ProductId, ProductStatus, ProductTitle, ProductType,
};
use crate::domain::slug::Slug;
use crate::domain::vendor::VendorId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub vendor_id: VendorId,
    pub title: ProductTitle,
    pub slug: Slug,
    pub subtitle: Option<String>,
    pub price: PriceCents,
    pub sale_price: Option<PriceCents>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub product_type: ProductType,
    pub status: ProductStatus,
    pub age_min: Option<AgeYears>,
    pub age_max: Option<AgeYears>,
    pub sku: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Replace every mutable attribute. Vendor and slug never change.
    pub fn apply(&mut self, update: &ProductUpdate) {
        self.title = update.title.clone();
        self.subtitle = update.subtitle.clone();
        self.price = update.price;
        self.sale_price = update.sale_price;
        self.short_description = update.short_description.clone();
        self.long_description = update.long_description.clone();
        self.product_type = update.product_type;
        self.status = update.status;
        self.age_min = update.age_min;
        self.age_max = update.age_max;
        self.sku = update.sku.clone();
        self.thumbnail_url = update.thumbnail_url.clone();
        self.featured = update.featured;
        self.updated_at = update.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub vendor_id: VendorId,
    pub title: ProductTitle,
    pub slug: Slug,
    pub subtitle: Option<String>,
    pub price: PriceCents,
    pub sale_price: Option<PriceCents>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub product_type: ProductType,
    pub status: ProductStatus,
    pub age_min: Option<AgeYears>,
    pub age_max: Option<AgeYears>,
    pub sku: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewProduct {
    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = slug;
        self
    }
}

/// Overwrite of all mutable product attributes; `None` clears a field.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub title: ProductTitle,
    pub subtitle: Option<String>,
    pub price: PriceCents,
    pub sale_price: Option<PriceCents>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub product_type: ProductType,
    pub status: ProductStatus,
    pub age_min: Option<AgeYears>,
    pub age_max: Option<AgeYears>,
    pub sku: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    pub updated_at: DateTime<Utc>,
}
