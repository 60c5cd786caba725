use log::info;

use shop_core::{CoreEventError, EventHandler};

use crate::events::{ShopEvent, ShopEventBody};

/// Stub de envío de email al crear un producto. El efecto real queda fuera
/// de alcance; aquí sólo se emite el registro correspondiente.
pub struct SendEmailOnProductCreatedHandler;

impl EventHandler<ShopEvent> for SendEmailOnProductCreatedHandler {
    fn handle(&self, event: &ShopEvent) -> Result<(), CoreEventError> {
        if let ShopEventBody::ProductCreated { name, description, price } = &event.body {
            info!("sending email: product '{}' created ({}) at price {}", name, description, price);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "send-email-on-product-created"
    }
}
