use super::{SelectOption, display};
use crate::domain::product::{Product, ProductStatus, ProductType};
use crate::domain::vendor::Vendor;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    pub vendor_id: i64,
    pub title: String,
    pub slug: String,
    pub subtitle: Option<String>,
    pub price_cents: i64,
    pub sale_price_cents: Option<i64>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub product_type: String,
    pub status: String,
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub sku: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            vendor_id: product.vendor_id.into(),
            title: product.title.into_inner(),
            slug: product.slug.into_inner(),
            subtitle: product.subtitle,
            price_cents: product.price.value(),
            sale_price_cents: product.sale_price.map(|p| p.value()),
            short_description: product.short_description,
            long_description: product.long_description,
            product_type: product.product_type.as_str().to_string(),
            status: product.status.as_str().to_string(),
            age_min: product.age_min.map(|a| a.value()),
            age_max: product.age_max.map(|a| a.value()),
            sku: product.sku,
            thumbnail_url: product.thumbnail_url,
            featured: product.featured,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// A product formatted for display, on storefront and admin listings alike.
///
/// When a sale price is present `price` is shown struck through next to
/// `sale_price`. Nothing checks that the sale price is actually lower.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductView {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub path: String,
    pub subtitle: Option<String>,
    pub vendor_name: Option<String>,
    pub vendor_slug: Option<String>,
    pub price: String,
    pub sale_price: Option<String>,
    pub on_sale: bool,
    pub age_range: Option<String>,
    pub type_label: String,
    pub status_label: String,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
}

impl ProductView {
    pub fn render(product: Product, vendor: Option<&Vendor>) -> Self {
        let sale_price = product.sale_price.map(display::format_price);
        Self {
            id: product.id.into(),
            path: format!("/products/{}", product.slug),
            title: product.title.into_inner(),
            slug: product.slug.into_inner(),
            subtitle: product.subtitle,
            vendor_name: vendor.map(|v| v.name.as_str().to_string()),
            vendor_slug: vendor.map(|v| v.slug.as_str().to_string()),
            price: display::format_price(product.price),
            on_sale: sale_price.is_some(),
            sale_price,
            age_range: display::age_range_label(product.age_min, product.age_max),
            type_label: display::humanize_label(product.product_type.as_str()),
            status_label: display::humanize_label(product.status.as_str()),
            short_description: product.short_description,
            long_description: product.long_description,
            thumbnail_url: product.thumbnail_url,
            featured: product.featured,
        }
    }
}

/// Values needed to refill the admin product edit form.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductEditView {
    pub id: i64,
    pub vendor_name: Option<String>,
    pub title: String,
    pub slug: String,
    pub subtitle: String,
    pub price: String,
    pub sale_price: String,
    pub sku: String,
    pub short_description: String,
    pub long_description: String,
    pub type_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub featured: bool,
    pub age_min: String,
    pub age_max: String,
    pub thumbnail_url: String,
}

impl ProductEditView {
    pub fn render(product: Product, vendor: Option<&Vendor>) -> Self {
        let kind = product.product_type;
        let status = product.status;
        Self {
            id: product.id.into(),
            vendor_name: vendor.map(|v| v.name.as_str().to_string()),
            title: product.title.into_inner(),
            slug: product.slug.into_inner(),
            subtitle: product.subtitle.unwrap_or_default(),
            price: display::price_input_value(Some(product.price)),
            sale_price: display::price_input_value(product.sale_price),
            sku: product.sku.unwrap_or_default(),
            short_description: product.short_description.unwrap_or_default(),
            long_description: product.long_description.unwrap_or_default(),
            type_options: ProductType::ALL
                .iter()
                .map(|t| SelectOption::new(t.as_str(), *t == kind))
                .collect(),
            status_options: ProductStatus::ALL
                .iter()
                .map(|s| SelectOption::new(s.as_str(), *s == status))
                .collect(),
            featured: product.featured,
            age_min: product
                .age_min
                .map(|a| a.value().to_string())
                .unwrap_or_default(),
            age_max: product
                .age_max
                .map(|a| a.value().to_string())
                .unwrap_or_default(),
            thumbnail_url: product.thumbnail_url.unwrap_or_default(),
        }
    }
}
