use async_trait::async_trait;
use derive_more::derive::{Display, Error};
use uuid::Uuid;

use crate::domain::product::Product;
use crate::domain::register::SaleSubmission;

/// Failure of a remote collaborator call.
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum GatewayError {
	/// The service answered and refused the request.
	#[display("{message}")]
	Rejected { message: String },
	/// The service could not be reached or failed to answer.
	#[display("{message}")]
	Unavailable { message: String },
}

#[async_trait]
pub trait ProductCatalog: Send + Sync + 'static {
	async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError>;
}

#[async_trait]
pub trait SalesService: Send + Sync + 'static {
	async fn submit_sale(
		&self,
		sale: &SaleSubmission,
	) -> Result<(), GatewayError>;

	async fn reverse_sale(&self, reference: Uuid) -> Result<(), GatewayError>;
}
