use std::time::Duration;

use log::{error, info};
use tokio::time::sleep;

use crate::domain::gateways::ProductCatalog;
use crate::use_cases::refresh_catalog::RefreshCatalogUseCase;

/// Polls the Product Catalog Service on a fixed interval.
///
/// Poll failures are logged and the loop carries on; the register
/// keeps serving the last good snapshot until the next poll succeeds.
pub async fn catalog_refresh_worker<C>(
	refresh_catalog_use_case: RefreshCatalogUseCase<C>,
	interval: Duration,
) where
	C: ProductCatalog + Clone + Send + Sync + 'static,
{
	loop {
		match refresh_catalog_use_case.execute().await {
			Ok(count) => info!("Catalog refreshed: {count} product(s)"),
			Err(e) => error!("Catalog refresh failed: {e}"),
		}

		sleep(interval).await;
	}
}
