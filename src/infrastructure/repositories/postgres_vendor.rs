// src/infrastructure/repositories/postgres_vendor.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::vendor::{
    Commission, NewVendor, Vendor, VendorId, VendorName, VendorReadRepository, VendorSummary,
    VendorUpdate, VendorWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const VENDOR_COLUMNS: &str = "id, name, slug, description, contact_email, location, \
     default_commission, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresVendorWriteRepository {
    pool: PgPool,
}

impl PostgresVendorWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresVendorReadRepository {
    pool: PgPool,
}

impl PostgresVendorReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VendorRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    contact_email: Option<String>,
    location: Option<String>,
    default_commission: Option<f64>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct VendorSummaryRow {
    #[sqlx(flatten)]
    vendor: VendorRow,
    product_count: i64,
}

impl TryFrom<VendorRow> for Vendor {
    type Error = DomainError;

    fn try_from(row: VendorRow) -> Result<Self, Self::Error> {
        Ok(Vendor {
            id: VendorId::new(row.id)?,
            name: VendorName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            contact_email: row.contact_email,
            location: row.location,
            default_commission: row.default_commission.map(Commission::new).transpose()?,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<VendorSummaryRow> for VendorSummary {
    type Error = DomainError;

    fn try_from(row: VendorSummaryRow) -> Result<Self, Self::Error> {
        Ok(VendorSummary {
            vendor: Vendor::try_from(row.vendor)?,
            product_count: row.product_count,
        })
    }
}

impl PostgresVendorWriteRepository {
    /// Shared by `insert` and `upsert`; `on_conflict` is appended verbatim.
    async fn insert_row(&self, vendor: NewVendor, on_conflict: &str) -> DomainResult<Vendor> {
        let NewVendor {
            name,
            slug,
            description,
            contact_email,
            location,
            default_commission,
            status,
            created_at,
            updated_at,
        } = vendor;

        let sql = format!(
            "INSERT INTO vendors (name, slug, description, contact_email, location, default_commission, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9){on_conflict}
             RETURNING {VENDOR_COLUMNS}"
        );

        let row = sqlx::query_as::<_, VendorRow>(&sql)
            .bind(name.as_str())
            .bind(slug.as_str())
            .bind(description)
            .bind(contact_email)
            .bind(location)
            .bind(default_commission.map(Commission::value))
            .bind(status.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Vendor::try_from(row)
    }
}

#[async_trait]
impl VendorWriteRepository for PostgresVendorWriteRepository {
    async fn insert(&self, vendor: NewVendor) -> DomainResult<Vendor> {
        self.insert_row(vendor, "").await
    }

    async fn update(&self, update: VendorUpdate) -> DomainResult<Vendor> {
        let VendorUpdate {
            id,
            name,
            description,
            contact_email,
            location,
            default_commission,
            status,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE vendors
             SET name = $2, description = $3, contact_email = $4, location = $5,
                 default_commission = $6, status = $7, updated_at = $8
             WHERE id = $1
             RETURNING {VENDOR_COLUMNS}"
        );

        let row = sqlx::query_as::<_, VendorRow>(&sql)
            .bind(i64::from(id))
            .bind(name.as_str())
            .bind(description)
            .bind(contact_email)
            .bind(location)
            .bind(default_commission.map(Commission::value))
            .bind(status.as_str())
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("vendor not found".into()))?;

        Vendor::try_from(row)
    }

    async fn upsert(&self, vendor: NewVendor) -> DomainResult<Vendor> {
        // The no-op assignment makes RETURNING yield the existing row.
        self.insert_row(vendor, " ON CONFLICT (slug) DO UPDATE SET slug = EXCLUDED.slug")
            .await
    }
}

#[async_trait]
impl VendorReadRepository for PostgresVendorReadRepository {
    async fn find_by_id(&self, id: VendorId) -> DomainResult<Option<Vendor>> {
        let sql = format!("SELECT {VENDOR_COLUMNS} FROM vendors WHERE id = $1");
        let row = sqlx::query_as::<_, VendorRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Vendor::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Vendor>> {
        let sql = format!("SELECT {VENDOR_COLUMNS} FROM vendors WHERE slug = $1");
        let row = sqlx::query_as::<_, VendorRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Vendor::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Vendor>> {
        let sql =
            format!("SELECT {VENDOR_COLUMNS} FROM vendors ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, VendorRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Vendor::try_from).collect()
    }

    async fn list_summaries(&self) -> DomainResult<Vec<VendorSummary>> {
        let rows = sqlx::query_as::<_, VendorSummaryRow>(
            "SELECT v.id, v.name, v.slug, v.description, v.contact_email, v.location,
                    v.default_commission, v.status, v.created_at, v.updated_at,
                    COUNT(p.id) AS product_count
             FROM vendors v
             LEFT JOIN products p ON p.vendor_id = v.id
             GROUP BY v.id
             ORDER BY v.created_at DESC, v.id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(VendorSummary::try_from).collect()
    }
}
