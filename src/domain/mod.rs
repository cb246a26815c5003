pub mod cart;
pub mod gateways;
pub mod money;
pub mod payment;
pub mod product;
pub mod register;
pub mod transaction;
