pub mod sales_stub;
pub mod stub_gateways;
