use log::info;
use uuid::Uuid;

use crate::domain::gateways::{GatewayError, SalesService};

/// Asks the Sales Service to cancel a recorded sale and restore its
/// stock. The register only reports the outcome; it does not rebuild
/// the cart from the reversed sale.
#[derive(Clone)]
pub struct ReverseSaleUseCase<S: SalesService> {
	sales_service: S,
}

impl<S: SalesService> ReverseSaleUseCase<S> {
	pub fn new(sales_service: S) -> Self {
		Self { sales_service }
	}

	pub async fn execute(&self, reference: Uuid) -> Result<(), GatewayError> {
		self.sales_service.reverse_sale(reference).await?;
		info!("Sale {reference} reversed");
		Ok(())
	}
}
