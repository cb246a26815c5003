use derive_more::derive::{Display, Error};
use log::{error, info};
use time::OffsetDateTime;

use crate::domain::gateways::{GatewayError, SalesService};
use crate::domain::payment::Payment;
use crate::domain::register::{RegisterError, RegisterSession};
use crate::domain::transaction::Transaction;
use crate::use_cases::dto::CheckoutCommand;

#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum CheckoutError {
	#[display("{_0}")]
	Register(RegisterError),
	#[display("{_0}")]
	Sales(GatewayError),
}

/// Finalizes the active cart into a recorded sale.
///
/// The register lock is released before the remote call; the
/// `Submitting` state keeps a second checkout out until this one has
/// settled.
#[derive(Clone)]
pub struct CheckoutUseCase<S: SalesService> {
	sales_service: S,
}

impl<S: SalesService> CheckoutUseCase<S> {
	pub fn new(sales_service: S) -> Self {
		Self { sales_service }
	}

	pub async fn execute(
		&self,
		session: &RegisterSession,
		command: CheckoutCommand,
	) -> Result<Transaction, CheckoutError> {
		let payment = Payment {
			amount_tendered: command.amount_tendered,
			currency:        command.currency,
			method:          command.method,
		};

		let sale = session
			.with(|register| {
				register.begin_checkout(payment, OffsetDateTime::now_utc())
			})
			.map_err(CheckoutError::Register)?;

		info!(
			"Submitting sale {} ({} line(s), total {})",
			sale.reference,
			sale.lines.len(),
			sale.totals.total
		);

		match self.sales_service.submit_sale(&sale).await {
			Ok(()) => {
				let transaction =
					session.with(|register| register.complete_checkout(sale));
				info!(
					"Sale {} recorded as {}",
					transaction.reference, transaction.number
				);
				Ok(transaction)
			}
			Err(e) => {
				error!("Sale submission failed: {e}");
				session
					.with(|register| register.fail_checkout(e.to_string()));
				Err(CheckoutError::Sales(e))
			}
		}
	}
}
