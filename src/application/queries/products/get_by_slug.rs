use super::ProductQueryService;
use crate::{
    application::{
        dto::ProductView,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

impl ProductQueryService {
    pub async fn get_product_by_slug(&self, slug: &str) -> ApplicationResult<ProductView> {
        // A string that could never be a slug cannot match a stored product.
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("product not found"))?;
        let product = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;
        let vendor = self.vendor_repo.find_by_id(product.vendor_id).await?;

        Ok(ProductView::render(product, vendor.as_ref()))
    }
}
