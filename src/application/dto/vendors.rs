use super::{SelectOption, display, products::ProductView};
use crate::domain::vendor::{Vendor, VendorStatus, VendorSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub location: Option<String>,
    pub default_commission: Option<f64>,
    pub status: String,
    pub status_label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vendor> for VendorDto {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id.into(),
            name: vendor.name.into_inner(),
            slug: vendor.slug.into_inner(),
            description: vendor.description,
            contact_email: vendor.contact_email,
            location: vendor.location,
            default_commission: vendor.default_commission.map(|c| c.value()),
            status: vendor.status.as_str().to_string(),
            status_label: display::humanize_label(vendor.status.as_str()),
            created_at: vendor.created_at,
            updated_at: vendor.updated_at,
        }
    }
}

/// Row of the admin vendor table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorSummaryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub location: Option<String>,
    pub status: String,
    pub product_count: i64,
    pub edit_path: String,
}

impl From<VendorSummary> for VendorSummaryDto {
    fn from(summary: VendorSummary) -> Self {
        let VendorSummary {
            vendor,
            product_count,
        } = summary;
        let id = i64::from(vendor.id);
        Self {
            id,
            name: vendor.name.into_inner(),
            slug: vendor.slug.into_inner(),
            location: vendor.location,
            status: vendor.status.as_str().to_string(),
            product_count,
            edit_path: format!("/admin/vendors/{id}"),
        }
    }
}

/// Public storefront page for one vendor.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorPageView {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub products: Vec<ProductView>,
}

/// Values needed to refill the admin vendor edit form.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorEditView {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub contact_email: String,
    pub location: String,
    pub default_commission: String,
    pub status_options: Vec<SelectOption>,
}

impl From<Vendor> for VendorEditView {
    fn from(vendor: Vendor) -> Self {
        let current = vendor.status;
        Self {
            id: vendor.id.into(),
            name: vendor.name.into_inner(),
            slug: vendor.slug.into_inner(),
            description: vendor.description.unwrap_or_default(),
            contact_email: vendor.contact_email.unwrap_or_default(),
            location: vendor.location.unwrap_or_default(),
            default_commission: vendor
                .default_commission
                .map(|c| format!("{:.2}", c.value()))
                .unwrap_or_default(),
            status_options: VendorStatus::ALL
                .iter()
                .map(|status| SelectOption::new(status.as_str(), *status == current))
                .collect(),
        }
    }
}
