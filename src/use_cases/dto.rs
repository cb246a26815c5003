use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money::{Currency, PaymentMethod};

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct CheckoutCommand {
	pub amount_tendered: Decimal,
	pub currency:        Currency,
	pub method:          PaymentMethod,
}
