// src/application/commands/products/update.rs
use super::{
    ProductCommandService, ProductFields,
    create::{ADMIN_PRODUCTS_PATH, PUBLIC_PRODUCTS_PATH},
};
use crate::{
    application::{
        commands::shared::{invalidate_views, record_id},
        dto::Redirect,
        error::{ApplicationError, ApplicationResult},
        form::FormFields,
    },
    domain::product::ProductId,
};
use tracing::info;

impl ProductCommandService {
    /// Handle the product edit form.
    ///
    /// All mutable attributes are replaced in one write: blank optional
    /// fields clear what was stored and an unticked `featured` box means
    /// `false`. Slug and vendor stay as they were.
    pub async fn update_product(&self, form: &FormFields) -> ApplicationResult<Redirect> {
        let id = ProductId::new(record_id(form)?)?;
        let fields = ProductFields::parse(form)?;

        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let update = fields.into_update(id, self.clock.now());
        let product = self.write_repo.update(update).await?;
        info!(product_id = product.id.0, "product updated");

        invalidate_views(
            self.cache.as_ref(),
            &[
                ADMIN_PRODUCTS_PATH.to_string(),
                PUBLIC_PRODUCTS_PATH.to_string(),
                format!("{PUBLIC_PRODUCTS_PATH}/{}", existing.slug),
            ],
        )
        .await;

        Ok(Redirect::to(ADMIN_PRODUCTS_PATH))
    }
}
