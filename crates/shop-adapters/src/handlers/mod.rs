//! Handlers concretos de la tienda (efectos como registros de log).

mod customer;
mod product;

pub use customer::{FirstMessageOnCustomerCreatedHandler, MessageOnAddressChangedHandler,
                   SecondMessageOnCustomerCreatedHandler};
pub use product::SendEmailOnProductCreatedHandler;
