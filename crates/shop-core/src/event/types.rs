//! Contratos que el dispatcher exige a sus colaboradores.
//!
//! Rol en el sistema:
//! - `DomainEvent` es cualquier valor con un identificador de kind estable y
//!   un instante de emisión. El kind es un tag tipado (enum cerrado del lado
//!   del dominio) en lugar de un string libre, de modo que el registry no
//!   depende de matching sin tipo.
//! - `EventHandler` es una única acción invocable con el evento. El
//!   dispatcher guarda referencias compartidas a los handlers; nunca los
//!   construye ni los clona.

use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::CoreEventError;

/// Evento de dominio notificable por el dispatcher.
pub trait DomainEvent {
    /// Tag que identifica el tipo del evento dentro del registry.
    type Kind: Copy + Eq + Hash + Debug;

    fn kind(&self) -> Self::Kind;

    /// Instante en que el productor emitió el evento.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Acción única que reacciona a un evento.
pub trait EventHandler<E: DomainEvent> {
    /// Ejecuta el efecto del handler. Un error aquí aborta el fan-out
    /// restante del `notify` en curso.
    fn handle(&self, event: &E) -> Result<(), CoreEventError>;

    /// Nombre estable para diagnóstico y logging.
    fn name(&self) -> &str;
}
