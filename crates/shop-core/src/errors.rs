//! Errores específicos del core de eventos (simples por ahora).
//!
//! "Kind desconocido" y "handler no registrado" no son errores: esos caminos
//! degradan a no-op en el dispatcher.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreEventError {
    #[error("handler '{handler}' failed: {reason}")] HandlerFailed { handler: String, reason: String },
    #[error("internal: {0}")] Internal(String),
}
