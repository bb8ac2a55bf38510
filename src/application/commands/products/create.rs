// src/application/commands/products/create.rs
use super::{ProductCommandService, ProductFields};
use crate::{
    application::{
        commands::shared::{insert_with_slug_retry, invalidate_views},
        dto::Redirect,
        error::{ApplicationError, ApplicationResult},
        form::FormFields,
    },
    domain::{
        slug::Slug,
        vendor::{Vendor, VendorId},
    },
};
use tracing::info;

pub(crate) const ADMIN_PRODUCTS_PATH: &str = "/admin/products";
pub(crate) const PUBLIC_PRODUCTS_PATH: &str = "/products";

impl ProductCommandService {
    /// Handle the "new product" form.
    ///
    /// The owning vendor is taken from `vendorId`, then `vendorSlug`, then
    /// the configured default vendor; a missing vendor aborts before anything
    /// is written. On success the client is sent to the product page.
    pub async fn create_product(&self, form: &FormFields) -> ApplicationResult<Redirect> {
        let fields = ProductFields::parse(form)?;
        let vendor = self.resolve_vendor(form).await?;

        let source = form.text("slug").unwrap_or(fields.title.as_str());
        let base = self.slug_service.base_slug(source);
        let now = self.clock.now();
        let vendor_id = vendor.id;

        let slugs = &self.slug_service;
        let write_repo = &self.write_repo;
        let base_ref = base.as_str();
        let product = insert_with_slug_retry(
            "product",
            move || slugs.generate_unique_slug(base_ref),
            move |slug| {
                write_repo.insert(fields.clone().into_new_product(vendor_id, slug, now))
            },
        )
        .await?;

        info!(
            product_id = product.id.0,
            vendor_id = vendor.id.0,
            slug = %product.slug,
            "product created"
        );
        invalidate_views(
            self.cache.as_ref(),
            &[
                ADMIN_PRODUCTS_PATH.to_string(),
                PUBLIC_PRODUCTS_PATH.to_string(),
                format!("/vendors/{}", vendor.slug),
            ],
        )
        .await;

        Ok(Redirect::to(format!("{PUBLIC_PRODUCTS_PATH}/{}", product.slug)))
    }

    async fn resolve_vendor(&self, form: &FormFields) -> ApplicationResult<Vendor> {
        if let Some(raw_id) = form.text("vendorId") {
            let id = raw_id
                .parse::<i64>()
                .map_err(|_| ApplicationError::validation("invalid vendor id"))?;
            return self
                .vendor_repo
                .find_by_id(VendorId::new(id)?)
                .await?
                .ok_or_else(|| ApplicationError::not_found(format!("vendor {id} not found")));
        }

        let key = form.text("vendorSlug").unwrap_or(self.default_vendor.as_str());
        let found = match Slug::new(key) {
            Ok(slug) => self.vendor_repo.find_by_slug(&slug).await?,
            Err(_) => None,
        };
        found.ok_or_else(|| ApplicationError::not_found(format!("vendor '{key}' not found")))
    }
}
