// shop-domain library entry point
pub mod address;
pub mod customer;
pub mod error;
pub mod product;
pub use address::Address;
pub use customer::Customer;
pub use error::DomainError;
pub use product::Product;
