//! Contratos de evento/handler y el `EventDispatcher`.

mod dispatcher;
mod types;

pub use dispatcher::EventDispatcher;
pub use types::{DomainEvent, EventHandler};
