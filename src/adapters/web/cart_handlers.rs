use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{
	AddItemRequest, CartResponse, SetQuantityRequest,
};
use crate::domain::register::RegisterSession;
use crate::infrastructure::catalog_cache::CatalogCache;

#[get("/register/cart")]
pub async fn get_cart(session: web::Data<RegisterSession>) -> impl Responder {
	let view = session.with(|register| CartResponse::of(register));
	HttpResponse::Ok().json(view)
}

#[post("/register/cart/items")]
pub async fn add_cart_item(
	payload: web::Json<AddItemRequest>,
	session: web::Data<RegisterSession>,
	catalog: web::Data<CatalogCache>,
) -> Result<HttpResponse, ApiError> {
	let product = catalog
		.find(payload.product_id)
		.await
		.ok_or(ApiError::UnknownProductError)?;

	// Stock is advisory here; the Sales Service has the final word.
	if product.stock <= 0 {
		warn!("Adding '{}' with no stock on hand", product.name);
	}

	let view = session.with(|register| {
		register.add_item(&product)?;
		Ok::<_, ApiError>(CartResponse::of(register))
	})?;

	info!("Added '{}' to the cart", product.name);
	Ok(HttpResponse::Ok().json(view))
}

#[put("/register/cart/items/{product_id}")]
pub async fn set_cart_item_quantity(
	path: web::Path<i64>,
	payload: web::Json<SetQuantityRequest>,
	session: web::Data<RegisterSession>,
) -> Result<HttpResponse, ApiError> {
	let product_id = path.into_inner();

	let view = session.with(|register| {
		register.set_quantity(product_id, payload.quantity)?;
		Ok::<_, ApiError>(CartResponse::of(register))
	})?;

	Ok(HttpResponse::Ok().json(view))
}

#[delete("/register/cart/items/{product_id}")]
pub async fn remove_cart_item(
	path: web::Path<i64>,
	session: web::Data<RegisterSession>,
) -> Result<HttpResponse, ApiError> {
	let product_id = path.into_inner();

	let view = session.with(|register| {
		register.remove_item(product_id)?;
		Ok::<_, ApiError>(CartResponse::of(register))
	})?;

	Ok(HttpResponse::Ok().json(view))
}
