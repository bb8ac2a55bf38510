use super::ProductQueryService;
use crate::{
    application::{
        dto::ProductEditView,
        error::{ApplicationError, ApplicationResult},
    },
    domain::product::ProductId,
};

impl ProductQueryService {
    /// Form values for the admin edit page.
    pub async fn get_product_for_edit(&self, id: i64) -> ApplicationResult<ProductEditView> {
        let id = ProductId::new(id)?;
        let product = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;
        let vendor = self.vendor_repo.find_by_id(product.vendor_id).await?;

        Ok(ProductEditView::render(product, vendor.as_ref()))
    }
}
