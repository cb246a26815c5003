use std::sync::Arc;

use restock_register::config::Config;
use restock_register::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config =
		Arc::new(Config::load().expect("Failed to load configuration"));
	run(config).await
}
