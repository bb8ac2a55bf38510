use super::ProductQueryService;
use crate::application::{dto::ProductView, error::ApplicationResult};

impl ProductQueryService {
    /// Storefront listing: all products, newest first, with vendor names.
    pub async fn list_products(&self) -> ApplicationResult<Vec<ProductView>> {
        let products = self.read_repo.list().await?;
        let vendors = self.vendors_by_id().await?;

        Ok(products
            .into_iter()
            .map(|product| {
                let vendor = vendors.get(&product.vendor_id);
                ProductView::render(product, vendor)
            })
            .collect())
    }
}
