use std::sync::{Arc, Mutex, PoisonError};

use derive_more::derive::{Display, Error};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::cart::{Cart, CartLine, Totals};
use crate::domain::payment::{Payment, PaymentAssessment, assess_payment};
use crate::domain::product::Product;
use crate::domain::transaction::{Transaction, TransactionNumbers};

/// Display name used when no operator session was configured.
pub const DEFAULT_OPERATOR_NAME: &str = "Cashier";

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum RegisterState {
	Empty,
	Populated,
	Submitting,
	ReceiptReady,
}

#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum RegisterError {
	#[display("cart is empty")]
	EmptyCart,
	#[display("amount tendered is short by {shortfall}")]
	InsufficientPayment { shortfall: Decimal },
	#[display("a submission is already in flight")]
	SubmissionInFlight,
	#[display("the previous receipt has not been acknowledged")]
	ReceiptPending,
}

/// Snapshot handed to the Sales Service for one checkout attempt.
///
/// The reference doubles as the idempotency token: it stays stable
/// across retries of an unchanged cart and is regenerated as soon as
/// the cart mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleSubmission {
	pub reference:    Uuid,
	pub lines:        Vec<CartLine>,
	pub totals:       Totals,
	pub payment:      Payment,
	pub change:       Decimal,
	pub requested_at: OffsetDateTime,
}

/// One operator's register, reused across many checkout cycles.
///
/// The state is derived: `Submitting` while a checkout is in flight,
/// `ReceiptReady` while an unacknowledged receipt exists, otherwise
/// `Empty`/`Populated` from the cart contents.
#[derive(Debug)]
pub struct Register {
	operator:       String,
	tax_rate:       Decimal,
	cart:           Cart,
	sale_reference: Option<Uuid>,
	submitting:     bool,
	receipt:        Option<Transaction>,
	last_error:     Option<String>,
	numbers:        TransactionNumbers,
}

impl Register {
	pub fn new(operator: Option<String>, tax_rate: Decimal) -> Self {
		Self {
			operator: operator
				.unwrap_or_else(|| DEFAULT_OPERATOR_NAME.to_string()),
			tax_rate,
			cart: Cart::new(),
			sale_reference: None,
			submitting: false,
			receipt: None,
			last_error: None,
			numbers: TransactionNumbers::default(),
		}
	}

	pub fn operator(&self) -> &str {
		&self.operator
	}

	pub fn cart(&self) -> &Cart {
		&self.cart
	}

	pub fn totals(&self) -> Totals {
		self.cart.totals(self.tax_rate)
	}

	pub fn receipt(&self) -> Option<&Transaction> {
		self.receipt.as_ref()
	}

	pub fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	pub fn state(&self) -> RegisterState {
		if self.submitting {
			RegisterState::Submitting
		} else if self.receipt.is_some() {
			RegisterState::ReceiptReady
		} else if self.cart.is_empty() {
			RegisterState::Empty
		} else {
			RegisterState::Populated
		}
	}

	fn ensure_mutable(&self) -> Result<(), RegisterError> {
		if self.submitting {
			return Err(RegisterError::SubmissionInFlight);
		}
		if self.receipt.is_some() {
			return Err(RegisterError::ReceiptPending);
		}
		Ok(())
	}

	// Any cart mutation invalidates the pending sale reference; the
	// next checkout is a different sale.
	pub fn add_item(&mut self, product: &Product) -> Result<(), RegisterError> {
		self.ensure_mutable()?;
		self.cart.add_item(product);
		self.sale_reference = None;
		Ok(())
	}

	pub fn set_quantity(
		&mut self,
		product_id: i64,
		quantity: i64,
	) -> Result<(), RegisterError> {
		self.ensure_mutable()?;
		self.cart.set_quantity(product_id, quantity);
		self.sale_reference = None;
		Ok(())
	}

	pub fn remove_item(&mut self, product_id: i64) -> Result<(), RegisterError> {
		self.ensure_mutable()?;
		self.cart.remove_item(product_id);
		self.sale_reference = None;
		Ok(())
	}

	/// Validates the checkout preconditions and, if they hold, marks
	/// the register as submitting and returns the sale snapshot to
	/// send. The cart itself stays untouched until
	/// [`Register::complete_checkout`].
	pub fn begin_checkout(
		&mut self,
		payment: Payment,
		now: OffsetDateTime,
	) -> Result<SaleSubmission, RegisterError> {
		self.ensure_mutable()?;

		if self.cart.is_empty() {
			return Err(RegisterError::EmptyCart);
		}

		let totals = self.totals();
		let assessment = assess_payment(payment.amount_tendered, totals.total);
		let change = match assessment {
			PaymentAssessment::Insufficient { shortfall } => {
				return Err(RegisterError::InsufficientPayment { shortfall });
			}
			PaymentAssessment::Sufficient { change } => change,
		};

		let reference = *self.sale_reference.get_or_insert_with(Uuid::new_v4);
		self.submitting = true;
		self.last_error = None;

		Ok(SaleSubmission {
			reference,
			lines: self.cart.lines().to_vec(),
			totals,
			payment,
			change,
			requested_at: now,
		})
	}

	/// Finalizes a successful submission: issues the receipt, clears
	/// the cart, and transitions to `ReceiptReady`.
	pub fn complete_checkout(&mut self, sale: SaleSubmission) -> Transaction {
		let transaction = Transaction {
			number:          self.numbers.next(sale.requested_at),
			reference:       sale.reference,
			lines:           sale.lines,
			totals:          sale.totals,
			amount_tendered: sale.payment.amount_tendered,
			change:          sale.change,
			currency:        sale.payment.currency,
			method:          sale.payment.method,
			operator:        self.operator.clone(),
			created_at:      sale.requested_at,
		};

		self.cart = Cart::new();
		self.sale_reference = None;
		self.submitting = false;
		self.last_error = None;
		self.receipt = Some(transaction.clone());

		transaction
	}

	/// Records a failed submission: the cart and its sale reference
	/// are left exactly as they were, so a retry re-sends the same
	/// sale.
	pub fn fail_checkout(&mut self, message: String) {
		self.submitting = false;
		self.last_error = Some(message);
	}

	pub fn acknowledge_receipt(&mut self) -> Option<Transaction> {
		self.receipt.take()
	}
}

/// Shared handle to the register.
///
/// The lock is held only for state transitions, never across a remote
/// call; the `Submitting` state is what serializes checkouts.
#[derive(Debug, Clone)]
pub struct RegisterSession {
	inner: Arc<Mutex<Register>>,
}

impl RegisterSession {
	pub fn new(register: Register) -> Self {
		Self {
			inner: Arc::new(Mutex::new(register)),
		}
	}

	pub fn with<R>(&self, f: impl FnOnce(&mut Register) -> R) -> R {
		let mut register =
			self.inner.lock().unwrap_or_else(PoisonError::into_inner);
		f(&mut register)
	}
}
