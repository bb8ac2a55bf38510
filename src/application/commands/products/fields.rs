use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        form::FormFields,
    },
    domain::{
        money::{PriceCents, normalize_optional_price, normalize_price},
        product::{
            AgeYears, NewProduct, ProductId, ProductStatus, ProductTitle, ProductType,
            ProductUpdate,
        },
        slug::Slug,
        vendor::VendorId,
    },
};
use chrono::{DateTime, Utc};

/// Validated product attributes shared by the create and edit forms.
#[derive(Debug, Clone)]
pub struct ProductFields {
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
}

impl ProductFields {
    pub fn parse(form: &FormFields) -> ApplicationResult<Self> {
        let (Some(title), Some(price)) = (form.text("title"), form.text("price")) else {
            return Err(ApplicationError::validation("title and price are required"));
        };
        let title = ProductTitle::new(title)?;
        let price = normalize_price(price)?;
        let sale_price = normalize_optional_price(form.text("salePrice"));

        let product_type = form
            .text("type")
            .map(str::parse::<ProductType>)
            .transpose()?
            .unwrap_or_default();
        let status = form
            .text("status")
            .map(str::parse::<ProductStatus>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            title,
            subtitle: form.owned("subtitle"),
            price,
            sale_price,
            short_description: form
                .first_of(&["shortDescription", "description"])
                .map(str::to_owned),
            long_description: form.owned("longDescription"),
            product_type,
            status,
            age_min: AgeYears::parse_optional("ageMin", form.text("ageMin"))?,
            age_max: AgeYears::parse_optional("ageMax", form.text("ageMax"))?,
            sku: form.owned("sku"),
            thumbnail_url: form.owned("thumbnailUrl"),
            featured: form.checkbox("featured"),
        })
    }

    pub fn into_new_product(
        self,
        vendor_id: VendorId,
        slug: Slug,
        now: DateTime<Utc>,
    ) -> NewProduct {
        NewProduct {
            vendor_id,
            title: self.title,
            slug,
            subtitle: self.subtitle,
            price: self.price,
            sale_price: self.sale_price,
            short_description: self.short_description,
            long_description: self.long_description,
            product_type: self.product_type,
            status: self.status,
            age_min: self.age_min,
            age_max: self.age_max,
            sku: self.sku,
            thumbnail_url: self.thumbnail_url,
            featured: self.featured,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_update(self, id: ProductId, now: DateTime<Utc>) -> ProductUpdate {
        ProductUpdate {
            id,
            title: self.title,
            subtitle: self.subtitle,
            price: self.price,
            sale_price: self.sale_price,
            short_description: self.short_description,
            long_description: self.long_description,
            product_type: self.product_type,
            status: self.status,
            age_min: self.age_min,
            age_max: self.age_max,
            sku: self.sku,
            thumbnail_url: self.thumbnail_url,
            featured: self.featured,
            updated_at: now,
        }
    }
}
