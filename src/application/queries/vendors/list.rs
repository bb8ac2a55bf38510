use super::VendorQueryService;
use crate::application::{dto::VendorSummaryDto, error::ApplicationResult};

impl VendorQueryService {
    /// Admin vendor table, newest first, with product counts.
    pub async fn list_vendor_summaries(&self) -> ApplicationResult<Vec<VendorSummaryDto>> {
        let summaries = self.read_repo.list_summaries().await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
