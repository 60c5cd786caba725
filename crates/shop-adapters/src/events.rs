//! Eventos concretos de la tienda y su tag de registro.
//!
//! Rol en el sistema:
//! - `ShopEventKind` es el enum cerrado que la aplicación usa como clave del
//!   `EventDispatcher`; reemplaza el matching por string libre del diseño
//!   original por un tag tipado.
//! - `ShopEventBody` define el payload observable de cada tipo de evento.
//! - `ShopEvent` agrega identidad (`event_id`) y metadato temporal (`ts`),
//!   que no participa del ruteo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shop_core::DomainEvent;
use shop_domain::{Address, Customer, Product};

/// Tag cerrado de los tipos de evento soportados por la tienda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopEventKind {
    CustomerCreated,
    CustomerAddressChanged,
    ProductCreated,
}

/// Payload por tipo de evento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShopEventBody {
    /// Alta de un cliente en el sistema.
    CustomerCreated { customer_id: String, name: String },
    /// Un cliente cambió su dirección; lleva la dirección nueva completa.
    CustomerAddressChanged {
        customer_id: String,
        name: String,
        address: Address,
    },
    /// Alta de un producto en el catálogo. La descripción la aporta el
    /// productor del evento (no es un campo de la entidad).
    ProductCreated {
        name: String,
        description: String,
        price: f64,
    },
}

impl ShopEventBody {
    pub fn kind(&self) -> ShopEventKind {
        match self {
            ShopEventBody::CustomerCreated { .. } => ShopEventKind::CustomerCreated,
            ShopEventBody::CustomerAddressChanged { .. } => ShopEventKind::CustomerAddressChanged,
            ShopEventBody::ProductCreated { .. } => ShopEventKind::ProductCreated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopEvent {
    pub event_id: Uuid,
    pub ts: DateTime<Utc>, // metadato (no participa del ruteo)
    pub body: ShopEventBody,
}

impl ShopEvent {
    fn from_body(body: ShopEventBody) -> Self {
        Self { event_id: Uuid::new_v4(),
               ts: Utc::now(),
               body }
    }

    pub fn customer_created(customer: &Customer) -> Self {
        Self::from_body(ShopEventBody::CustomerCreated { customer_id: customer.id().to_string(),
                                                         name: customer.name().to_string() })
    }

    /// El caller pasa la dirección recién aplicada junto con el cliente; así
    /// el constructor no depende de que la entidad ya esté mutada.
    pub fn customer_address_changed(customer: &Customer, address: &Address) -> Self {
        Self::from_body(ShopEventBody::CustomerAddressChanged { customer_id: customer.id().to_string(),
                                                                name: customer.name().to_string(),
                                                                address: address.clone() })
    }

    pub fn product_created(product: &Product, description: &str) -> Self {
        Self::from_body(ShopEventBody::ProductCreated { name: product.name().to_string(),
                                                        description: description.to_string(),
                                                        price: product.price() })
    }
}

impl DomainEvent for ShopEvent {
    type Kind = ShopEventKind;

    fn kind(&self) -> ShopEventKind {
        self.body.kind()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.ts
    }
}
