// tests/support/builders.rs
use bazaar_core::application::form::FormFields;
use bazaar_core::domain::{
    money::PriceCents,
    product::{NewProduct, ProductStatus, ProductTitle, ProductType},
    slug::Slug,
    vendor::{NewVendor, VendorId, VendorName, VendorStatus},
};

use super::mocks::fixed_now;

pub fn new_vendor(name: &str, slug: &str) -> NewVendor {
    NewVendor {
        name: VendorName::new(name).unwrap(),
        slug: Slug::new(slug).unwrap(),
        description: None,
        contact_email: None,
        location: None,
        default_commission: None,
        status: VendorStatus::default(),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

pub struct ProductBuilder {
    vendor_id: i64,
    title: String,
    slug: String,
    price_cents: i64,
    subtitle: Option<String>,
    seconds_after_epoch: i64,
}

impl ProductBuilder {
    pub fn new(vendor_id: i64, title: &str, slug: &str) -> Self {
        Self {
            vendor_id,
            title: title.into(),
            slug: slug.into(),
            price_cents: 2900,
            subtitle: None,
            seconds_after_epoch: 0,
        }
    }

    pub fn price(mut self, cents: i64) -> Self {
        self.price_cents = cents;
        self
    }

    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Shift `created_at` forward from the fixed clock.
    pub fn created_after(mut self, seconds: i64) -> Self {
        self.seconds_after_epoch = seconds;
        self
    }

    pub fn build(self) -> NewProduct {
        let at = fixed_now() + chrono::Duration::seconds(self.seconds_after_epoch);
        NewProduct {
            vendor_id: VendorId::new(self.vendor_id).unwrap(),
            title: ProductTitle::new(self.title).unwrap(),
            slug: Slug::new(self.slug).unwrap(),
            subtitle: self.subtitle,
            price: PriceCents::new(self.price_cents).unwrap(),
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
            created_at: at,
            updated_at: at,
        }
    }
}

pub fn form(pairs: &[(&str, &str)]) -> FormFields {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}
