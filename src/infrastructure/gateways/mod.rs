pub mod http_product_catalog;
pub mod http_sales_service;
