pub mod catalog_cache;
pub mod gateways;
pub mod workers;
