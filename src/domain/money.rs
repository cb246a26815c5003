use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currencies accepted at the register.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
	#[serde(rename = "USD")]
	Usd,
	#[serde(rename = "ZAR")]
	Zar,
	#[serde(rename = "ZiG")]
	Zig,
}

impl Currency {
	pub fn code(&self) -> &'static str {
		match self {
			Currency::Usd => "USD",
			Currency::Zar => "ZAR",
			Currency::Zig => "ZiG",
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
	Cash,
	Card,
	MobileMoney,
}

/// Rounds a monetary amount to whole cents.
pub fn round_cents(amount: Decimal) -> Decimal {
	amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
