// src/infrastructure/repositories/postgres_product.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::money::PriceCents;
use crate::domain::product::{
    AgeYears, NewProduct, Product, ProductId, ProductReadRepository, ProductTitle, ProductUpdate,
    ProductWriteRepository,
};
use crate::domain::slug::Slug;
use crate::domain::vendor::VendorId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const PRODUCT_COLUMNS: &str = "id, vendor_id, title, slug, subtitle, price_cents, \
     sale_price_cents, short_description, long_description, product_type, status, age_min, \
     age_max, sku, thumbnail_url, featured, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresProductWriteRepository {
    pool: PgPool,
}

impl PostgresProductWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresProductReadRepository {
    pool: PgPool,
}

impl PostgresProductReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    vendor_id: i64,
    title: String,
    slug: String,
    subtitle: Option<String>,
    price_cents: i64,
    sale_price_cents: Option<i64>,
    short_description: Option<String>,
    long_description: Option<String>,
    product_type: String,
    status: String,
    age_min: Option<i32>,
    age_max: Option<i32>,
    sku: Option<String>,
    thumbnail_url: Option<String>,
    featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id)?,
            vendor_id: VendorId::new(row.vendor_id)?,
            title: ProductTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            subtitle: row.subtitle,
            price: PriceCents::new(row.price_cents)?,
            sale_price: row.sale_price_cents.map(PriceCents::new).transpose()?,
            short_description: row.short_description,
            long_description: row.long_description,
            product_type: row.product_type.parse()?,
            status: row.status.parse()?,
            age_min: row.age_min.map(AgeYears::new).transpose()?,
            age_max: row.age_max.map(AgeYears::new).transpose()?,
            sku: row.sku,
            thumbnail_url: row.thumbnail_url,
            featured: row.featured,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl PostgresProductWriteRepository {
    async fn insert_row(&self, product: NewProduct, on_conflict: &str) -> DomainResult<Product> {
        let NewProduct {
            vendor_id,
            title,
            slug,
            subtitle,
            price,
            sale_price,
            short_description,
            long_description,
            product_type,
            status,
            age_min,
            age_max,
            sku,
            thumbnail_url,
            featured,
            created_at,
            updated_at,
        } = product;

        let sql = format!(
            "INSERT INTO products (vendor_id, title, slug, subtitle, price_cents, sale_price_cents,
                 short_description, long_description, product_type, status, age_min, age_max,
                 sku, thumbnail_url, featured, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17){on_conflict}
             RETURNING {PRODUCT_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(vendor_id))
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(subtitle)
            .bind(price.value())
            .bind(sale_price.map(PriceCents::value))
            .bind(short_description)
            .bind(long_description)
            .bind(product_type.as_str())
            .bind(status.as_str())
            .bind(age_min.map(AgeYears::value))
            .bind(age_max.map(AgeYears::value))
            .bind(sku)
            .bind(thumbnail_url)
            .bind(featured)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Product::try_from(row)
    }
}

#[async_trait]
impl ProductWriteRepository for PostgresProductWriteRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        self.insert_row(product, "").await
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let ProductUpdate {
            id,
            title,
            subtitle,
            price,
            sale_price,
            short_description,
            long_description,
            product_type,
            status,
            age_min,
            age_max,
            sku,
            thumbnail_url,
            featured,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE products
             SET title = $2, subtitle = $3, price_cents = $4, sale_price_cents = $5,
                 short_description = $6, long_description = $7, product_type = $8,
                 status = $9, age_min = $10, age_max = $11, sku = $12, thumbnail_url = $13,
                 featured = $14, updated_at = $15
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(id))
            .bind(title.as_str())
            .bind(subtitle)
            .bind(price.value())
            .bind(sale_price.map(PriceCents::value))
            .bind(short_description)
            .bind(long_description)
            .bind(product_type.as_str())
            .bind(status.as_str())
            .bind(age_min.map(AgeYears::value))
            .bind(age_max.map(AgeYears::value))
            .bind(sku)
            .bind(thumbnail_url)
            .bind(featured)
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;

        Product::try_from(row)
    }

    async fn upsert(&self, product: NewProduct) -> DomainResult<Product> {
        self.insert_row(product, " ON CONFLICT (slug) DO UPDATE SET slug = EXCLUDED.slug")
            .await
    }
}

#[async_trait]
impl ProductReadRepository for PostgresProductReadRepository {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Product::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(Product::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Product>> {
        let sql =
            format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Product::try_from).collect()
    }

    async fn list_by_vendor(&self, vendor_id: VendorId) -> DomainResult<Vec<Product>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE vendor_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(vendor_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Product::try_from).collect()
    }
}
