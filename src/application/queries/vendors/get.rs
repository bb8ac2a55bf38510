use super::VendorQueryService;
use crate::{
    application::{
        dto::{ProductView, VendorEditView, VendorPageView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{slug::Slug, vendor::VendorId},
};

impl VendorQueryService {
    pub async fn get_vendor_page(&self, slug: &str) -> ApplicationResult<VendorPageView> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("vendor not found"))?;
        let vendor = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("vendor not found"))?;
        let products = self.product_repo.list_by_vendor(vendor.id).await?;

        let products = products
            .into_iter()
            .map(|product| ProductView::render(product, Some(&vendor)))
            .collect();

        Ok(VendorPageView {
            name: vendor.name.into_inner(),
            slug: vendor.slug.into_inner(),
            description: vendor.description,
            location: vendor.location,
            products,
        })
    }

    pub async fn get_vendor_for_edit(&self, id: i64) -> ApplicationResult<VendorEditView> {
        let vendor = self
            .read_repo
            .find_by_id(VendorId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("vendor not found"))?;
        Ok(vendor.into())
    }
}
