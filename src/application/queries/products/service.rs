use std::{collections::HashMap, sync::Arc};

use crate::{
    application::error::ApplicationResult,
    domain::{
        product::ProductReadRepository,
        vendor::{Vendor, VendorId, VendorReadRepository},
    },
};

pub struct ProductQueryService {
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) vendor_repo: Arc<dyn VendorReadRepository>,
}

impl ProductQueryService {
    pub fn new(
        read_repo: Arc<dyn ProductReadRepository>,
        vendor_repo: Arc<dyn VendorReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            vendor_repo,
        }
    }

    /// Every vendor keyed by id, for labelling product rows.
    pub(super) async fn vendors_by_id(&self) -> ApplicationResult<HashMap<VendorId, Vendor>> {
        let vendors = self.vendor_repo.list().await?;
        Ok(vendors.into_iter().map(|v| (v.id, v)).collect())
    }
}
