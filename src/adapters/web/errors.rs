use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

use crate::domain::gateways::GatewayError;
use crate::domain::register::RegisterError;
use crate::use_cases::checkout::CheckoutError;

#[derive(Serialize)]
struct ErrorResponse {
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Cart is empty.")]
	EmptyCartError,
	#[display("Amount tendered is less than the total due.")]
	InsufficientPaymentError,
	#[display("Another submission is already in progress.")]
	SubmissionInFlightError,
	#[display("The previous receipt has not been acknowledged.")]
	ReceiptPendingError,
	#[display("Product is not in the catalog.")]
	UnknownProductError,
	#[display("Sale reference is not a valid identifier.")]
	BadReferenceError,
	#[display("The sales service rejected the request: {message}")]
	SaleRejectedError { message: String },
	#[display("The sales service is unavailable.")]
	SalesUnavailableError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::EmptyCartError => "Bad Request".to_string(),
			ApiError::InsufficientPaymentError => {
				"Unprocessable Entity".to_string()
			}
			ApiError::SubmissionInFlightError => "Conflict".to_string(),
			ApiError::ReceiptPendingError => "Conflict".to_string(),
			ApiError::UnknownProductError => "Not Found".to_string(),
			ApiError::BadReferenceError => "Bad Request".to_string(),
			ApiError::SaleRejectedError { .. } => {
				"Unprocessable Entity".to_string()
			}
			ApiError::SalesUnavailableError => "Bad Gateway".to_string(),
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				status_code: self.status_code().as_u16(),
				error:       self.to_string(),
				message:     self.name(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::EmptyCartError => StatusCode::BAD_REQUEST,
			ApiError::InsufficientPaymentError => {
				StatusCode::UNPROCESSABLE_ENTITY
			}
			ApiError::SubmissionInFlightError => StatusCode::CONFLICT,
			ApiError::ReceiptPendingError => StatusCode::CONFLICT,
			ApiError::UnknownProductError => StatusCode::NOT_FOUND,
			ApiError::BadReferenceError => StatusCode::BAD_REQUEST,
			ApiError::SaleRejectedError { .. } => {
				StatusCode::UNPROCESSABLE_ENTITY
			}
			ApiError::SalesUnavailableError => StatusCode::BAD_GATEWAY,
		}
	}
}

impl From<RegisterError> for ApiError {
	fn from(err: RegisterError) -> Self {
		match err {
			RegisterError::EmptyCart => ApiError::EmptyCartError,
			RegisterError::InsufficientPayment { .. } => {
				ApiError::InsufficientPaymentError
			}
			RegisterError::SubmissionInFlight => {
				ApiError::SubmissionInFlightError
			}
			RegisterError::ReceiptPending => ApiError::ReceiptPendingError,
		}
	}
}

impl From<GatewayError> for ApiError {
	fn from(err: GatewayError) -> Self {
		match err {
			GatewayError::Rejected { message } => {
				ApiError::SaleRejectedError { message }
			}
			GatewayError::Unavailable { .. } => ApiError::SalesUnavailableError,
		}
	}
}

impl From<CheckoutError> for ApiError {
	fn from(err: CheckoutError) -> Self {
		match err {
			CheckoutError::Register(e) => e.into(),
			CheckoutError::Sales(e) => e.into(),
		}
	}
}
