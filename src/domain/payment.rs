use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money::{Currency, PaymentMethod};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Payment {
	pub amount_tendered: Decimal,
	pub currency:        Currency,
	pub method:          PaymentMethod,
}

/// Outcome of weighing tendered payment against the amount due.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentAssessment {
	Sufficient { change: Decimal },
	Insufficient { shortfall: Decimal },
}

impl PaymentAssessment {
	pub fn is_sufficient(&self) -> bool {
		matches!(self, PaymentAssessment::Sufficient { .. })
	}
}

pub fn assess_payment(
	amount_tendered: Decimal,
	total: Decimal,
) -> PaymentAssessment {
	let change = amount_tendered - total;

	if change < Decimal::ZERO {
		PaymentAssessment::Insufficient { shortfall: -change }
	} else {
		PaymentAssessment::Sufficient { change }
	}
}
