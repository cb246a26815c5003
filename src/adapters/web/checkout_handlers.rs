use actix_web::{HttpResponse, Responder, delete, post, web};
use uuid::Uuid;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{CheckoutRequest, ReceiptResponse};
use crate::domain::register::RegisterSession;
use crate::infrastructure::gateways::http_sales_service::HttpSalesService;
use crate::use_cases::checkout::CheckoutUseCase;
use crate::use_cases::dto::CheckoutCommand;
use crate::use_cases::reverse_sale::ReverseSaleUseCase;

#[post("/register/checkout")]
pub async fn checkout(
	payload: web::Json<CheckoutRequest>,
	session: web::Data<RegisterSession>,
	checkout_use_case: web::Data<CheckoutUseCase<HttpSalesService>>,
) -> Result<HttpResponse, ApiError> {
	let command = CheckoutCommand {
		amount_tendered: payload.amount_tendered,
		currency:        payload.currency,
		method:          payload.method,
	};

	let transaction = checkout_use_case.execute(&session, command).await?;

	Ok(HttpResponse::Created().json(ReceiptResponse::from(&transaction)))
}

#[post("/register/receipt/acknowledge")]
pub async fn acknowledge_receipt(
	session: web::Data<RegisterSession>,
) -> impl Responder {
	session.with(|register| register.acknowledge_receipt());
	HttpResponse::NoContent().finish()
}

#[delete("/register/sales/{reference}")]
pub async fn reverse_sale(
	path: web::Path<String>,
	reverse_sale_use_case: web::Data<ReverseSaleUseCase<HttpSalesService>>,
) -> Result<HttpResponse, ApiError> {
	let reference = Uuid::parse_str(&path.into_inner())
		.map_err(|_| ApiError::BadReferenceError)?;

	reverse_sale_use_case.execute(reference).await?;

	Ok(HttpResponse::NoContent().finish())
}
