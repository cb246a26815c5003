use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub catalog_url: String,
	pub sales_url: String,
	pub server_bind: String,
	pub server_keepalive: u64,
	pub catalog_refresh_secs: u64,
	pub tax_rate: Decimal,
	pub operator_name: Option<String>,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix("POS"))
			.build()?;

		config_builder.try_deserialize()
	}
}
