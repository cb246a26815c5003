pub mod cart_handlers;
pub mod checkout_handlers;
pub mod errors;
pub mod products_handlers;
pub mod schema;
