// src/domain/product/services.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::DomainResult;
use crate::domain::product::repository::ProductReadRepository;
use crate::domain::slug::{Slug, allocate_unique_slug};

/// Domain service responsible for producing unique slugs for products.
pub struct ProductSlugService {
    read_repo: Arc<dyn ProductReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ProductSlugService {
    pub fn new(
        read_repo: Arc<dyn ProductReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
        }
    }

    pub fn base_slug(&self, source: &str) -> String {
        let base = self.generator.slugify(source);
        if base.is_empty() {
            format!("product-{}", self.clock.now().timestamp_millis())
        } else {
            base
        }
    }

    pub async fn generate_unique_slug(&self, base: &str) -> DomainResult<Slug> {
        allocate_unique_slug(base, |candidate| {
            let repo = Arc::clone(&self.read_repo);
            async move {
                repo.find_by_slug(&candidate)
                    .await
                    .map(|found| found.is_some())
            }
        })
        .await
    }
}
