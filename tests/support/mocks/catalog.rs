// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use bazaar_core::domain::{
    errors::{DomainError, DomainResult},
    product::{
        NewProduct, Product, ProductId, ProductReadRepository, ProductUpdate,
        ProductWriteRepository,
    },
    slug::Slug,
    vendor::{
        NewVendor, Vendor, VendorId, VendorReadRepository, VendorSummary, VendorUpdate,
        VendorWriteRepository,
    },
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU32, Ordering},
};

#[derive(Default)]
struct CatalogState {
    vendors: Vec<Vendor>,
    products: Vec<Product>,
    next_vendor_id: i64,
    next_product_id: i64,
    vendor_writes: usize,
    product_writes: usize,
}

/// インメモリのカタログストア
///
/// 4 つのリポジトリトレイトをすべて実装し、クローン間で状態を共有する。
/// スラグの一意制約と vendor_id の外部キーは Postgres と同じように扱う。
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<CatalogState>>,
}

fn newest_first<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> (chrono::DateTime<chrono::Utc>, i64),
{
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 書き込みカウンタを増やさずにベンダーを直接登録する
    pub fn put_vendor(&self, vendor: NewVendor) -> Vendor {
        let mut state = self.state.lock().unwrap();
        Self::store_vendor(&mut state, vendor)
    }

    /// 書き込みカウンタを増やさずに商品を直接登録する
    pub fn put_product(&self, product: NewProduct) -> Product {
        let mut state = self.state.lock().unwrap();
        Self::store_product(&mut state, product)
    }

    pub fn vendors(&self) -> Vec<Vendor> {
        self.state.lock().unwrap().vendors.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }

    pub fn vendor_by_slug(&self, slug: &str) -> Option<Vendor> {
        self.vendors().into_iter().find(|v| v.slug.as_str() == slug)
    }

    pub fn product_by_slug(&self, slug: &str) -> Option<Product> {
        self.products().into_iter().find(|p| p.slug.as_str() == slug)
    }

    pub fn vendor_writes(&self) -> usize {
        self.state.lock().unwrap().vendor_writes
    }

    pub fn product_writes(&self) -> usize {
        self.state.lock().unwrap().product_writes
    }

    fn store_vendor(state: &mut CatalogState, vendor: NewVendor) -> Vendor {
        state.next_vendor_id += 1;
        let stored = Vendor {
            id: VendorId(state.next_vendor_id),
            name: vendor.name,
            slug: vendor.slug,
            description: vendor.description,
            contact_email: vendor.contact_email,
            location: vendor.location,
            default_commission: vendor.default_commission,
            status: vendor.status,
            created_at: vendor.created_at,
            updated_at: vendor.updated_at,
        };
        state.vendors.push(stored.clone());
        stored
    }

    fn store_product(state: &mut CatalogState, product: NewProduct) -> Product {
        state.next_product_id += 1;
        let stored = Product {
            id: ProductId(state.next_product_id),
            vendor_id: product.vendor_id,
            title: product.title,
            slug: product.slug,
            subtitle: product.subtitle,
            price: product.price,
            sale_price: product.sale_price,
            short_description: product.short_description,
            long_description: product.long_description,
            product_type: product.product_type,
            status: product.status,
            age_min: product.age_min,
            age_max: product.age_max,
            sku: product.sku,
            thumbnail_url: product.thumbnail_url,
            featured: product.featured,
            created_at: product.created_at,
            updated_at: product.updated_at,
        };
        state.products.push(stored.clone());
        stored
    }
}

#[async_trait]
impl VendorWriteRepository for InMemoryCatalog {
    async fn insert(&self, vendor: NewVendor) -> DomainResult<Vendor> {
        let mut state = self.state.lock().unwrap();
        if state.vendors.iter().any(|v| v.slug == vendor.slug) {
            return Err(DomainError::Conflict("vendor slug already exists".into()));
        }
        state.vendor_writes += 1;
        Ok(Self::store_vendor(&mut state, vendor))
    }

    async fn update(&self, update: VendorUpdate) -> DomainResult<Vendor> {
        let mut state = self.state.lock().unwrap();
        let vendor = state
            .vendors
            .iter_mut()
            .find(|v| v.id == update.id)
            .ok_or_else(|| DomainError::NotFound("vendor not found".into()))?;
        vendor.apply(&update);
        let updated = vendor.clone();
        state.vendor_writes += 1;
        Ok(updated)
    }

    async fn upsert(&self, vendor: NewVendor) -> DomainResult<Vendor> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.vendors.iter().find(|v| v.slug == vendor.slug) {
            return Ok(existing.clone());
        }
        state.vendor_writes += 1;
        Ok(Self::store_vendor(&mut state, vendor))
    }
}

#[async_trait]
impl VendorReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: VendorId) -> DomainResult<Option<Vendor>> {
        let state = self.state.lock().unwrap();
        Ok(state.vendors.iter().find(|v| v.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Vendor>> {
        let state = self.state.lock().unwrap();
        Ok(state.vendors.iter().find(|v| &v.slug == slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Vendor>> {
        let mut vendors = self.vendors();
        newest_first(&mut vendors, |v| (v.created_at, v.id.0));
        Ok(vendors)
    }

    async fn list_summaries(&self) -> DomainResult<Vec<VendorSummary>> {
        let state = self.state.lock().unwrap();
        let mut summaries: Vec<VendorSummary> = state
            .vendors
            .iter()
            .map(|vendor| VendorSummary {
                vendor: vendor.clone(),
                product_count: state
                    .products
                    .iter()
                    .filter(|p| p.vendor_id == vendor.id)
                    .count() as i64,
            })
            .collect();
        newest_first(&mut summaries, |s| (s.vendor.created_at, s.vendor.id.0));
        Ok(summaries)
    }
}

#[async_trait]
impl ProductWriteRepository for InMemoryCatalog {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        if !state.vendors.iter().any(|v| v.id == product.vendor_id) {
            return Err(DomainError::NotFound("vendor not found".into()));
        }
        if state.products.iter().any(|p| p.slug == product.slug) {
            return Err(DomainError::Conflict("product slug already exists".into()));
        }
        state.product_writes += 1;
        Ok(Self::store_product(&mut state, product))
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;
        product.apply(&update);
        let updated = product.clone();
        state.product_writes += 1;
        Ok(updated)
    }

    async fn upsert(&self, product: NewProduct) -> DomainResult<Product> {
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.products.iter().find(|p| p.slug == product.slug) {
            return Ok(existing.clone());
        }
        state.product_writes += 1;
        Ok(Self::store_product(&mut state, product))
    }
}

#[async_trait]
impl ProductReadRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let state = self.state.lock().unwrap();
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let state = self.state.lock().unwrap();
        Ok(state.products.iter().find(|p| &p.slug == slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Product>> {
        let mut products = self.products();
        newest_first(&mut products, |p| (p.created_at, p.id.0));
        Ok(products)
    }

    async fn list_by_vendor(&self, vendor_id: VendorId) -> DomainResult<Vec<Product>> {
        let mut products: Vec<Product> = self
            .products()
            .into_iter()
            .filter(|p| p.vendor_id == vendor_id)
            .collect();
        newest_first(&mut products, |p| (p.created_at, p.id.0));
        Ok(products)
    }
}

/// 競合する書き込みを模擬する商品ライター
///
/// 先頭 `failures` 回の insert を別リクエストにスラグを取られたものとして
/// `Conflict` で失敗させ、以降は内側のストアに委譲する。
pub struct ConflictingProductWrite {
    inner: InMemoryCatalog,
    failures: u32,
    attempts: AtomicU32,
}

impl ConflictingProductWrite {
    pub fn new(inner: InMemoryCatalog, failures: u32) -> Self {
        Self {
            inner,
            failures,
            attempts: AtomicU32::new(0),
        }
    }

    pub fn always(inner: InMemoryCatalog) -> Self {
        Self::new(inner, u32::MAX)
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductWriteRepository for ConflictingProductWrite {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(DomainError::Conflict("product slug already exists".into()));
        }
        ProductWriteRepository::insert(&self.inner, product).await
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        ProductWriteRepository::update(&self.inner, update).await
    }

    async fn upsert(&self, product: NewProduct) -> DomainResult<Product> {
        ProductWriteRepository::upsert(&self.inner, product).await
    }
}
