use crate::{
    application::{error::ApplicationResult, form::FormFields},
    domain::{
        slug::Slug,
        vendor::{Commission, NewVendor, VendorId, VendorName, VendorStatus, VendorUpdate},
    },
};
use chrono::{DateTime, Utc};

/// Validated vendor attributes shared by the create and edit forms.
#[derive(Debug, Clone)]
pub struct VendorFields {
    pub name: VendorName,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub location: Option<String>,
    pub default_commission: Option<Commission>,
    pub status: VendorStatus,
}

impl VendorFields {
    pub fn parse(form: &FormFields) -> ApplicationResult<Self> {
        let name = VendorName::new(form.text("name").unwrap_or_default())?;
        let status = form
            .text("status")
            .map(str::parse::<VendorStatus>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            name,
            description: form.owned("description"),
            contact_email: form.owned("contactEmail"),
            location: form.owned("location"),
            default_commission: Commission::parse_lenient(form.text("defaultCommission")),
            status,
        })
    }

    pub fn into_new_vendor(self, slug: Slug, now: DateTime<Utc>) -> NewVendor {
        NewVendor {
            name: self.name,
            slug,
            description: self.description,
            contact_email: self.contact_email,
            location: self.location,
            default_commission: self.default_commission,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_update(self, id: VendorId, now: DateTime<Utc>) -> VendorUpdate {
        VendorUpdate {
            id,
            name: self.name,
            description: self.description,
            contact_email: self.contact_email,
            location: self.location,
            default_commission: self.default_commission,
            status: self.status,
            updated_at: now,
        }
    }
}
