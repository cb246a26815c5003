use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use circuitbreaker_rs::{BreakerError, CircuitBreaker, DefaultPolicy};
use log::error;
use reqwest::Client;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::gateways::{GatewayError, SalesService};
use crate::domain::register::SaleSubmission;

const BREAKER_FAILURE_THRESHOLD: f64 = 0.5;
const BREAKER_COOLDOWN_SECS: u64 = 30;

#[derive(Debug)]
pub struct SaleRecordingError(pub String);

impl fmt::Display for SaleRecordingError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Service error: {}", self.0)
	}
}

impl Error for SaleRecordingError {}

impl From<Box<dyn Error + Send + Sync + 'static>> for SaleRecordingError {
	fn from(err: Box<dyn Error + Send + Sync + 'static>) -> Self {
		SaleRecordingError(err.to_string())
	}
}

#[derive(Debug, Serialize)]
struct SaleItemPayload {
	id:       i64,
	quantity: u32,
	price:    f64,
}

#[derive(Debug, Serialize)]
struct SalePayload {
	reference: Uuid,
	cart:      Vec<SaleItemPayload>,
}

#[derive(Debug, Deserialize)]
struct SalesErrorBody {
	error: Option<String>,
}

/// Reqwest-backed Sales Service gateway.
///
/// Submission goes through a circuit breaker: once the service has
/// failed often enough, further checkouts fail fast instead of hanging
/// the register. The breaker never retries on its own.
#[derive(Clone)]
pub struct HttpSalesService {
	client:          Client,
	base_url:        String,
	circuit_breaker: Arc<CircuitBreaker<DefaultPolicy, SaleRecordingError>>,
}

impl HttpSalesService {
	pub fn new(client: Client, base_url: String) -> Self {
		let circuit_breaker =
			CircuitBreaker::<DefaultPolicy, SaleRecordingError>::builder()
				.failure_threshold(BREAKER_FAILURE_THRESHOLD)
				.cooldown(Duration::from_secs(BREAKER_COOLDOWN_SECS))
				.build();

		Self {
			client,
			base_url,
			circuit_breaker: Arc::new(circuit_breaker),
		}
	}

	fn sales_url(&self) -> String {
		format!("{}/sales", self.base_url.trim_end_matches('/'))
	}

	fn sale_url(&self, reference: Uuid) -> String {
		format!("{}/{reference}", self.sales_url())
	}
}

fn payload_for(sale: &SaleSubmission) -> SalePayload {
	SalePayload {
		reference: sale.reference,
		cart:      sale
			.lines
			.iter()
			.map(|line| SaleItemPayload {
				id:       line.product_id,
				quantity: line.quantity,
				price:    line.unit_price.to_f64().unwrap_or_default(),
			})
			.collect(),
	}
}

async fn rejection_message(response: reqwest::Response) -> String {
	let status = response.status();

	match response.json::<SalesErrorBody>().await {
		Ok(SalesErrorBody {
			error: Some(message),
		}) => message,
		_ => format!("sales service returned status {status}"),
	}
}

#[async_trait]
impl SalesService for HttpSalesService {
	async fn submit_sale(
		&self,
		sale: &SaleSubmission,
	) -> Result<(), GatewayError> {
		let url = self.sales_url();
		let payload = payload_for(sale);

		let result: Result<
			Result<(), GatewayError>,
			BreakerError<SaleRecordingError>,
		> = self
			.circuit_breaker
			.call_async(|| async {
				let response = self
					.client
					.post(&url)
					.json(&payload)
					.send()
					.await
					.map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)?;

				let status = response.status();
				if status.is_success() {
					return Ok(Ok(()));
				}

				if status.is_client_error() {
					return Ok(Err(GatewayError::Rejected {
						message: rejection_message(response).await,
					}));
				}

				Err(SaleRecordingError(format!(
					"sales service returned status {status}"
				)))
			})
			.await;

		match result {
			Ok(outcome) => outcome,
			Err(BreakerError::Open) => {
				error!("Sales service circuit is open; failing fast");
				Err(GatewayError::Unavailable {
					message: "sales service is temporarily unavailable"
						.to_string(),
				})
			}
			Err(BreakerError::Operation(e)) => Err(GatewayError::Unavailable {
				message: e.to_string(),
			}),
			Err(e) => Err(GatewayError::Unavailable {
				message: e.to_string(),
			}),
		}
	}

	async fn reverse_sale(&self, reference: Uuid) -> Result<(), GatewayError> {
		let response = self
			.client
			.delete(self.sale_url(reference))
			.send()
			.await
			.map_err(|e| GatewayError::Unavailable {
				message: e.to_string(),
			})?;

		let status = response.status();
		if status.is_success() {
			return Ok(());
		}

		if status.is_client_error() {
			return Err(GatewayError::Rejected {
				message: rejection_message(response).await,
			});
		}

		Err(GatewayError::Unavailable {
			message: format!("sales service returned status {status}"),
		})
	}
}
