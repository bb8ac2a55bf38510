// src/application/commands/vendors/update.rs
use super::{VendorCommandService, VendorFields, create::ADMIN_VENDORS_PATH};
use crate::{
    application::{
        commands::shared::{invalidate_views, record_id},
        dto::Redirect,
        error::{ApplicationError, ApplicationResult},
        form::FormFields,
    },
    domain::vendor::VendorId,
};
use tracing::info;

impl VendorCommandService {
    /// Handle the vendor edit form. Every mutable attribute is overwritten,
    /// so a blank optional field clears the stored value. The slug is kept.
    pub async fn update_vendor(&self, form: &FormFields) -> ApplicationResult<Redirect> {
        let id = VendorId::new(record_id(form)?)?;
        let fields = VendorFields::parse(form)?;

        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("vendor not found"))?;

        let update = fields.into_update(id, self.clock.now());
        let vendor = self.write_repo.update(update).await?;
        info!(vendor_id = vendor.id.0, "vendor updated");

        invalidate_views(
            self.cache.as_ref(),
            &[
                ADMIN_VENDORS_PATH.to_string(),
                format!("/vendors/{}", existing.slug),
                "/products".to_string(),
            ],
        )
        .await;

        Ok(Redirect::to(ADMIN_VENDORS_PATH))
    }
}
