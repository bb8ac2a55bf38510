// src/application/commands/vendors/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{cache::CacheInvalidator, time::Clock},
    domain::vendor::{
        VendorReadRepository, VendorWriteRepository, services::VendorSlugService,
    },
};

pub struct VendorCommandService {
    pub(super) write_repo: Arc<dyn VendorWriteRepository>,
    pub(super) read_repo: Arc<dyn VendorReadRepository>,
    pub(super) slug_service: Arc<VendorSlugService>,
    pub(super) cache: Arc<dyn CacheInvalidator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl VendorCommandService {
    pub fn new(
        write_repo: Arc<dyn VendorWriteRepository>,
        read_repo: Arc<dyn VendorReadRepository>,
        slug_service: Arc<VendorSlugService>,
        cache: Arc<dyn CacheInvalidator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            cache,
            clock,
        }
    }
}
