// src/application/commands/vendors/create.rs
use super::{VendorCommandService, VendorFields};
use crate::application::{
    commands::shared::{insert_with_slug_retry, invalidate_views},
    dto::Redirect,
    error::ApplicationResult,
    form::FormFields,
};
use tracing::info;

pub(crate) const ADMIN_VENDORS_PATH: &str = "/admin/vendors";

impl VendorCommandService {
    /// Handle the "new vendor" form. The slug comes from the `slug` field
    /// when supplied, otherwise from the name, and collisions get a numeric
    /// suffix.
    pub async fn create_vendor(&self, form: &FormFields) -> ApplicationResult<Redirect> {
        let fields = VendorFields::parse(form)?;
        let source = form.text("slug").unwrap_or(fields.name.as_str());
        let base = self.slug_service.base_slug(source);
        let now = self.clock.now();

        let slugs = &self.slug_service;
        let write_repo = &self.write_repo;
        let base_ref = base.as_str();
        let vendor = insert_with_slug_retry(
            "vendor",
            move || slugs.generate_unique_slug(base_ref),
            move |slug| write_repo.insert(fields.clone().into_new_vendor(slug, now)),
        )
        .await?;

        info!(vendor_id = vendor.id.0, slug = %vendor.slug, "vendor created");
        invalidate_views(self.cache.as_ref(), &[ADMIN_VENDORS_PATH.to_string()]).await;

        Ok(Redirect::to(format!("/vendors/{}", vendor.slug)))
    }
}
