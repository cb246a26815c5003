use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use restock_register::domain::gateways::{
	GatewayError, ProductCatalog, SalesService,
};
use restock_register::domain::product::Product;
use restock_register::domain::register::SaleSubmission;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn dec(value: &str) -> Decimal {
	value.parse().expect("valid decimal literal")
}

pub fn milk() -> Product {
	Product {
		id:    1,
		name:  "Milk".to_string(),
		price: dec("1.00"),
		stock: 12,
		code:  Some("MLK-1L".to_string()),
	}
}

pub fn bread() -> Product {
	Product {
		id:    2,
		name:  "Bread".to_string(),
		price: dec("2.50"),
		stock: 4,
		code:  None,
	}
}

#[derive(Default)]
struct StubSalesState {
	fail_next:   Option<GatewayError>,
	submissions: Vec<SaleSubmission>,
	reversals:   Vec<Uuid>,
}

/// In-memory Sales Service double. Records every call it receives;
/// `fail_with` makes the next call fail once.
#[derive(Clone, Default)]
pub struct StubSalesService {
	inner: Arc<Mutex<StubSalesState>>,
}

impl StubSalesService {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn fail_with(&self, error: GatewayError) {
		self.inner.lock().unwrap().fail_next = Some(error);
	}

	pub fn submissions(&self) -> Vec<SaleSubmission> {
		self.inner.lock().unwrap().submissions.clone()
	}

	pub fn reversals(&self) -> Vec<Uuid> {
		self.inner.lock().unwrap().reversals.clone()
	}
}

#[async_trait]
impl SalesService for StubSalesService {
	async fn submit_sale(
		&self,
		sale: &SaleSubmission,
	) -> Result<(), GatewayError> {
		let mut state = self.inner.lock().unwrap();
		state.submissions.push(sale.clone());

		match state.fail_next.take() {
			Some(error) => Err(error),
			None => Ok(()),
		}
	}

	async fn reverse_sale(&self, reference: Uuid) -> Result<(), GatewayError> {
		let mut state = self.inner.lock().unwrap();

		if let Some(error) = state.fail_next.take() {
			return Err(error);
		}

		state.reversals.push(reference);
		Ok(())
	}
}

#[derive(Default)]
struct StubCatalogState {
	products: Vec<Product>,
	failing:  bool,
}

/// In-memory Product Catalog double with a switchable failure mode.
#[derive(Clone, Default)]
pub struct StubProductCatalog {
	inner: Arc<Mutex<StubCatalogState>>,
}

impl StubProductCatalog {
	pub fn with_products(products: Vec<Product>) -> Self {
		let stub = Self::default();
		stub.set_products(products);
		stub
	}

	pub fn set_products(&self, products: Vec<Product>) {
		self.inner.lock().unwrap().products = products;
	}

	pub fn set_failing(&self, failing: bool) {
		self.inner.lock().unwrap().failing = failing;
	}
}

#[async_trait]
impl ProductCatalog for StubProductCatalog {
	async fn fetch_products(&self) -> Result<Vec<Product>, GatewayError> {
		let state = self.inner.lock().unwrap();

		if state.failing {
			return Err(GatewayError::Unavailable {
				message: "catalog offline".to_string(),
			});
		}

		Ok(state.products.clone())
	}
}
