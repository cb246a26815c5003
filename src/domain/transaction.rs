use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::cart::{CartLine, Totals};
use crate::domain::money::{Currency, PaymentMethod};

/// A finalized sale as shown on the receipt.
///
/// Immutable once created; the Sales Service owns the authoritative
/// record, this is the register's read-only snapshot of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
	pub number:          String,
	pub reference:       Uuid,
	pub lines:           Vec<CartLine>,
	pub totals:          Totals,
	pub amount_tendered: Decimal,
	pub change:          Decimal,
	pub currency:        Currency,
	pub method:          PaymentMethod,
	pub operator:        String,
	pub created_at:      OffsetDateTime,
}

/// Issues `TXN-YYYYMMDD-NNNNN` receipt numbers.
///
/// The suffix is a session-monotonic counter, so numbers are unique
/// and ordered for the lifetime of the register session.
#[derive(Debug, Clone, Default)]
pub struct TransactionNumbers {
	issued: u64,
}

impl TransactionNumbers {
	pub fn next(&mut self, now: OffsetDateTime) -> String {
		self.issued += 1;

		format!(
			"TXN-{:04}{:02}{:02}-{:05}",
			now.year(),
			u8::from(now.month()),
			now.day(),
			self.issued
		)
	}
}
