use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::product::Product;

/// Read-mostly in-memory snapshot of the remote product catalog.
///
/// Replaced wholesale by the refresh worker; readers see either the
/// previous snapshot or the new one, never a partial mix.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
	products: Arc<RwLock<Vec<Product>>>,
}

impl CatalogCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn replace(&self, products: Vec<Product>) {
		*self.products.write().await = products;
	}

	pub async fn all(&self) -> Vec<Product> {
		self.products.read().await.clone()
	}

	pub async fn find(&self, id: i64) -> Option<Product> {
		self.products
			.read()
			.await
			.iter()
			.find(|product| product.id == id)
			.cloned()
	}

	pub async fn search(&self, query: &str) -> Vec<Product> {
		self.products
			.read()
			.await
			.iter()
			.filter(|product| product.matches(query))
			.cloned()
			.collect()
	}
}
