use std::sync::Arc;

use crate::domain::{product::ProductReadRepository, vendor::VendorReadRepository};

pub struct VendorQueryService {
    pub(super) read_repo: Arc<dyn VendorReadRepository>,
    pub(super) product_repo: Arc<dyn ProductReadRepository>,
}

impl VendorQueryService {
    pub fn new(
        read_repo: Arc<dyn VendorReadRepository>,
        product_repo: Arc<dyn ProductReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            product_repo,
        }
    }
}
