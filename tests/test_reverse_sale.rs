use restock_register::domain::gateways::GatewayError;
use restock_register::use_cases::reverse_sale::ReverseSaleUseCase;
use uuid::Uuid;

mod support;

use crate::support::stub_gateways::StubSalesService;

#[tokio::test]
async fn test_reversal_is_forwarded_to_the_sales_service() {
	let sales = StubSalesService::new();
	let reverse = ReverseSaleUseCase::new(sales.clone());
	let reference = Uuid::new_v4();

	reverse.execute(reference).await.unwrap();

	assert_eq!(sales.reversals(), vec![reference]);
}

#[tokio::test]
async fn test_reversal_failure_is_reported() {
	let sales = StubSalesService::new();
	let reverse = ReverseSaleUseCase::new(sales.clone());
	sales.fail_with(GatewayError::Rejected {
		message: "Sale not found".to_string(),
	});

	let result = reverse.execute(Uuid::new_v4()).await;

	assert_eq!(
		result.unwrap_err(),
		GatewayError::Rejected {
			message: "Sale not found".to_string(),
		}
	);
	assert!(sales.reversals().is_empty());
}
