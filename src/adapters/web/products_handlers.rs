use actix_web::{HttpResponse, Responder, get, web};

use crate::adapters::web::schema::ProductsQuery;
use crate::infrastructure::catalog_cache::CatalogCache;

#[get("/products")]
pub async fn list_products(
	query: web::Query<ProductsQuery>,
	catalog: web::Data<CatalogCache>,
) -> impl Responder {
	let products = match query.q.as_deref() {
		Some(q) if !q.is_empty() => catalog.search(q).await,
		_ => catalog.all().await,
	};

	HttpResponse::Ok().json(products)
}
