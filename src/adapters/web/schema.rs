use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::cart::{CartLine, Totals};
use crate::domain::money::{Currency, PaymentMethod};
use crate::domain::register::{Register, RegisterState};
use crate::domain::transaction::Transaction;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AddItemRequest {
	#[serde(rename = "productId")]
	pub product_id: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SetQuantityRequest {
	pub quantity: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckoutRequest {
	#[serde(rename = "amountTendered")]
	pub amount_tendered: Decimal,
	pub currency:        Currency,
	pub method:          PaymentMethod,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProductsQuery {
	pub q: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CartLineSchema {
	#[serde(rename = "productId")]
	pub product_id: i64,
	pub name:       String,
	#[serde(rename = "unitPrice")]
	pub unit_price: Decimal,
	pub quantity:   u32,
	#[serde(rename = "lineTotal")]
	pub line_total: Decimal,
}

impl From<&CartLine> for CartLineSchema {
	fn from(line: &CartLine) -> Self {
		Self {
			product_id: line.product_id,
			name:       line.name.clone(),
			unit_price: line.unit_price,
			quantity:   line.quantity,
			line_total: line.line_total(),
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct TotalsSchema {
	pub subtotal: Decimal,
	pub tax:      Decimal,
	pub total:    Decimal,
}

impl From<Totals> for TotalsSchema {
	fn from(totals: Totals) -> Self {
		Self {
			subtotal: totals.subtotal,
			tax:      totals.tax,
			total:    totals.total,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReceiptResponse {
	pub number:          String,
	pub reference:       Uuid,
	pub operator:        String,
	pub lines:           Vec<CartLineSchema>,
	pub totals:          TotalsSchema,
	#[serde(rename = "amountTendered")]
	pub amount_tendered: Decimal,
	pub change:          Decimal,
	pub currency:        Currency,
	pub method:          PaymentMethod,
	#[serde(rename = "createdAt", with = "time::serde::rfc3339")]
	pub created_at:      OffsetDateTime,
}

impl From<&Transaction> for ReceiptResponse {
	fn from(transaction: &Transaction) -> Self {
		Self {
			number:          transaction.number.clone(),
			reference:       transaction.reference,
			operator:        transaction.operator.clone(),
			lines:           transaction
				.lines
				.iter()
				.map(CartLineSchema::from)
				.collect(),
			totals:          transaction.totals.into(),
			amount_tendered: transaction.amount_tendered,
			change:          transaction.change,
			currency:        transaction.currency,
			method:          transaction.method,
			created_at:      transaction.created_at,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CartResponse {
	pub state:      RegisterState,
	pub operator:   String,
	pub lines:      Vec<CartLineSchema>,
	pub totals:     TotalsSchema,
	#[serde(
		rename = "lastError",
		skip_serializing_if = "Option::is_none",
		default
	)]
	pub last_error: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub receipt:    Option<ReceiptResponse>,
}

impl CartResponse {
	pub fn of(register: &Register) -> Self {
		Self {
			state:      register.state(),
			operator:   register.operator().to_string(),
			lines:      register
				.cart()
				.lines()
				.iter()
				.map(CartLineSchema::from)
				.collect(),
			totals:     register.totals().into(),
			last_error: register.last_error().map(str::to_string),
			receipt:    register.receipt().map(ReceiptResponse::from),
		}
	}
}
