use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money::round_cents;
use crate::domain::product::Product;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CartLine {
	pub product_id: i64,
	pub name:       String,
	pub unit_price: Decimal,
	pub quantity:   u32,
}

impl CartLine {
	pub fn line_total(&self) -> Decimal {
		self.unit_price * Decimal::from(self.quantity)
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Totals {
	pub subtotal: Decimal,
	pub tax:      Decimal,
	pub total:    Decimal,
}

/// The operator's in-progress selection for one sale.
///
/// Lines keep insertion order. Adding a product that is already in the
/// cart increments its line instead of appending a duplicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
	lines: Vec<CartLine>,
}

impl Cart {
	pub fn new() -> Self {
		Self { lines: Vec::new() }
	}

	pub fn lines(&self) -> &[CartLine] {
		&self.lines
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	pub fn add_item(&mut self, product: &Product) {
		if let Some(line) = self
			.lines
			.iter_mut()
			.find(|line| line.product_id == product.id)
		{
			line.quantity += 1;
			return;
		}

		self.lines.push(CartLine {
			product_id: product.id,
			name:       product.name.clone(),
			unit_price: product.price,
			quantity:   1,
		});
	}

	/// Quantities below 1 clamp to 1; removing a line is a separate
	/// operation. Unknown product ids are ignored.
	pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
		if let Some(line) = self
			.lines
			.iter_mut()
			.find(|line| line.product_id == product_id)
		{
			line.quantity = quantity.clamp(1, i64::from(u32::MAX)) as u32;
		}
	}

	pub fn remove_item(&mut self, product_id: i64) {
		self.lines.retain(|line| line.product_id != product_id);
	}

	/// Pure over the current lines; calling it twice without a mutation
	/// in between yields identical results.
	pub fn totals(&self, tax_rate: Decimal) -> Totals {
		let subtotal: Decimal =
			self.lines.iter().map(CartLine::line_total).sum();
		let tax = round_cents(subtotal * tax_rate);

		Totals {
			subtotal,
			tax,
			total: subtotal + tax,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dec(value: &str) -> Decimal {
		value.parse().expect("valid decimal literal")
	}

	fn product(id: i64, name: &str, price: &str) -> Product {
		Product {
			id,
			name: name.to_string(),
			price: dec(price),
			stock: 10,
			code: None,
		}
	}

	#[test]
	fn test_add_item_increments_existing_line() {
		let milk = product(1, "Milk", "1.00");
		let bread = product(2, "Bread", "2.50");
		let mut cart = Cart::new();

		cart.add_item(&milk);
		cart.add_item(&bread);
		cart.add_item(&milk);
		cart.add_item(&milk);

		assert_eq!(cart.lines().len(), 2);
		assert_eq!(cart.lines()[0].product_id, 1);
		assert_eq!(cart.lines()[0].quantity, 3);
		assert_eq!(cart.lines()[1].product_id, 2);
		assert_eq!(cart.lines()[1].quantity, 1);
	}

	#[test]
	fn test_set_quantity_clamps_to_one() {
		let mut cart = Cart::new();
		cart.add_item(&product(1, "Milk", "1.00"));

		cart.set_quantity(1, 0);
		assert_eq!(cart.lines()[0].quantity, 1);

		cart.set_quantity(1, -4);
		assert_eq!(cart.lines()[0].quantity, 1);

		cart.set_quantity(1, 7);
		assert_eq!(cart.lines()[0].quantity, 7);
	}

	#[test]
	fn test_set_quantity_unknown_product_is_a_no_op() {
		let mut cart = Cart::new();
		cart.add_item(&product(1, "Milk", "1.00"));

		cart.set_quantity(99, 5);

		assert_eq!(cart.lines().len(), 1);
		assert_eq!(cart.lines()[0].quantity, 1);
	}

	#[test]
	fn test_remove_item() {
		let mut cart = Cart::new();
		cart.add_item(&product(1, "Milk", "1.00"));
		cart.add_item(&product(2, "Bread", "2.50"));

		cart.remove_item(1);
		assert_eq!(cart.lines().len(), 1);
		assert_eq!(cart.lines()[0].product_id, 2);

		cart.remove_item(99);
		assert_eq!(cart.lines().len(), 1);
	}

	#[test]
	fn test_totals_are_pure_and_exact() {
		let mut cart = Cart::new();
		cart.add_item(&product(1, "Milk", "1.00"));
		cart.set_quantity(1, 2);

		let first = cart.totals(dec("0.15"));
		let second = cart.totals(dec("0.15"));

		assert_eq!(first, second);
		assert_eq!(first.subtotal, dec("2.00"));
		assert_eq!(first.tax, dec("0.30"));
		assert_eq!(first.total, dec("2.30"));
	}

	#[test]
	fn test_totals_of_empty_cart_are_zero() {
		let totals = Cart::new().totals(dec("0.15"));

		assert_eq!(totals.subtotal, Decimal::ZERO);
		assert_eq!(totals.tax, Decimal::ZERO);
		assert_eq!(totals.total, Decimal::ZERO);
	}
}
