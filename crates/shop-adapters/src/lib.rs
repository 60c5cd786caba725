//! shop-adapters: Capa de adaptación Dominio ↔ Core.
//!
//! Este crate provee:
//! - `ShopEvent`: el tipo concreto de evento de la tienda, con un tag cerrado
//!   `ShopEventKind` que sirve de clave del registry (el core sólo conoce el
//!   contrato `DomainEvent`).
//! - Handlers concretos de efectos: stub de envío de email al crear un
//!   producto y mensajes de consola (vía `log`) para altas y cambios de
//!   dirección de clientes.

pub mod events;
pub mod handlers;

pub use events::{ShopEvent, ShopEventBody, ShopEventKind};
