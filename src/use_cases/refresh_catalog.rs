use crate::domain::gateways::{GatewayError, ProductCatalog};
use crate::infrastructure::catalog_cache::CatalogCache;

/// Pulls the remote product catalog into the shared cache.
///
/// Read-only with respect to the register; a refresh never touches an
/// in-flight cart.
#[derive(Clone)]
pub struct RefreshCatalogUseCase<C: ProductCatalog> {
	catalog: C,
	cache:   CatalogCache,
}

impl<C: ProductCatalog> RefreshCatalogUseCase<C> {
	pub fn new(catalog: C, cache: CatalogCache) -> Self {
		Self { catalog, cache }
	}

	pub async fn execute(&self) -> Result<usize, GatewayError> {
		let products = self.catalog.fetch_products().await?;
		let count = products.len();
		self.cache.replace(products).await;
		Ok(count)
	}
}
