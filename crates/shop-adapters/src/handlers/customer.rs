use log::info;

use shop_core::{CoreEventError, EventHandler};

use crate::events::{ShopEvent, ShopEventBody};

/// Primer mensaje al crear un cliente. Existe junto al segundo handler para
/// ejercitar el fan-out ordenado sobre un mismo kind.
pub struct FirstMessageOnCustomerCreatedHandler;

impl EventHandler<ShopEvent> for FirstMessageOnCustomerCreatedHandler {
    fn handle(&self, event: &ShopEvent) -> Result<(), CoreEventError> {
        if let ShopEventBody::CustomerCreated { customer_id, name } = &event.body {
            info!("first message: customer '{}' created (id {})", name, customer_id);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "first-message-on-customer-created"
    }
}

/// Segundo mensaje al crear un cliente.
pub struct SecondMessageOnCustomerCreatedHandler;

impl EventHandler<ShopEvent> for SecondMessageOnCustomerCreatedHandler {
    fn handle(&self, event: &ShopEvent) -> Result<(), CoreEventError> {
        if let ShopEventBody::CustomerCreated { customer_id, name } = &event.body {
            info!("second message: customer '{}' created (id {})", name, customer_id);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "second-message-on-customer-created"
    }
}

/// Mensaje cuando un cliente cambia de dirección.
pub struct MessageOnAddressChangedHandler;

impl EventHandler<ShopEvent> for MessageOnAddressChangedHandler {
    fn handle(&self, event: &ShopEvent) -> Result<(), CoreEventError> {
        if let ShopEventBody::CustomerAddressChanged { customer_id, name, address } = &event.body {
            info!("customer {} ({}) moved to: {}", name, customer_id, address);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "message-on-address-changed"
    }
}
