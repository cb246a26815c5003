pub mod adapters;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;

use crate::adapters::web::cart_handlers::{
	add_cart_item, get_cart, remove_cart_item, set_cart_item_quantity,
};
use crate::adapters::web::checkout_handlers::{
	acknowledge_receipt, checkout, reverse_sale,
};
use crate::adapters::web::products_handlers::list_products;
use crate::config::Config;
use crate::domain::register::{Register, RegisterSession};
use crate::infrastructure::catalog_cache::CatalogCache;
use crate::infrastructure::gateways::http_product_catalog::HttpProductCatalog;
use crate::infrastructure::gateways::http_sales_service::HttpSalesService;
use crate::infrastructure::workers::catalog_refresh_worker::catalog_refresh_worker;
use crate::use_cases::checkout::CheckoutUseCase;
use crate::use_cases::refresh_catalog::RefreshCatalogUseCase;
use crate::use_cases::reverse_sale::ReverseSaleUseCase;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let http_client = Client::new();

	let catalog_cache = CatalogCache::new();
	let product_catalog =
		HttpProductCatalog::new(http_client.clone(), config.catalog_url.clone());
	let sales_service =
		HttpSalesService::new(http_client.clone(), config.sales_url.clone());

	let session = RegisterSession::new(Register::new(
		config.operator_name.clone(),
		config.tax_rate,
	));

	info!("Starting catalog refresh worker...");
	tokio::spawn(catalog_refresh_worker(
		RefreshCatalogUseCase::new(product_catalog, catalog_cache.clone()),
		Duration::from_secs(config.catalog_refresh_secs),
	));

	let session_data = web::Data::new(session);
	let catalog_data = web::Data::new(catalog_cache);
	let checkout_data =
		web::Data::new(CheckoutUseCase::new(sales_service.clone()));
	let reverse_data = web::Data::new(ReverseSaleUseCase::new(sales_service));

	info!("Starting register on {}...", config.server_bind);
	HttpServer::new(move || {
		App::new()
			.app_data(session_data.clone())
			.app_data(catalog_data.clone())
			.app_data(checkout_data.clone())
			.app_data(reverse_data.clone())
			.service(list_products)
			.service(get_cart)
			.service(add_cart_item)
			.service(set_cart_item_quantity)
			.service(remove_cart_item)
			.service(checkout)
			.service(acknowledge_receipt)
			.service(reverse_sale)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(config.server_bind.as_str())?
	.run()
	.await
}
