use async_trait::async_trait;
use reqwest::Client;

use crate::domain::gateways::{GatewayError, ProductCatalog};
use crate::domain::product::Product;

#[derive(Debug, Clone)]
pub struct HttpProductCatalog {
	client:   Client,
	base_url: String,
}

impl HttpProductCatalog {
	pub fn new(client: Client, base_url: String) -> Self {
		Self { client, base_url }
	}

	fn products_url(&self) -> String {
		format!("{}/products", self.base_url.trim_end_matches('/'))
	}
}

#[async_trait]
impl ProductCatalog for HttpProductCatalog {
	async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError> {
		let response = self
			.client
			.get(self.products_url())
			.send()
			.await
			.map_err(|e| GatewayError::Unavailable {
				message: e.to_string(),
			})?;

		let status = response.status();
		if !status.is_success() {
			return Err(GatewayError::Rejected {
				message: format!("catalog returned status {status}"),
			});
		}

		response
			.json::<Vec<Product>>()
			.await
			.map_err(|e| GatewayError::Rejected {
				message: format!("catalog payload could not be decoded: {e}"),
			})
	}
}
