use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry as served by the Product Catalog Service.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Product {
	pub id:    i64,
	pub name:  String,
	pub price: Decimal,
	pub stock: i64,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub code:  Option<String>,
}

impl Product {
	/// Case-insensitive match against the product name or code.
	pub fn matches(&self, query: &str) -> bool {
		let query = query.to_lowercase();
		self.name.to_lowercase().contains(&query) ||
			self
				.code
				.as_deref()
				.is_some_and(|code| code.to_lowercase().contains(&query))
	}
}
