//! Registro en proceso de handlers por kind y fan-out síncrono.
//!
//! Semántica observable:
//! - El orden de inserción dentro de un kind es significativo y se preserva.
//! - Un mismo handler puede ocupar varios slots (mismo kind o distintos).
//! - `unregister` de un kind/handler desconocido es un no-op deliberado.
//! - `unregister` nunca borra la entrada del kind (queda como secuencia
//!   vacía); sólo `unregister_all` limpia el mapa completo.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, trace, warn};

use super::types::{DomainEvent, EventHandler};
use crate::errors::CoreEventError;

/// Registro de handlers por kind con notificación síncrona en orden de
/// registro.
///
/// El dispatcher es estado puro de proceso: se crea vacío, se muta sólo vía
/// `register`/`unregister`/`unregister_all` y corre cada notificación en el
/// hilo del caller. No define locking propio; un host multi-hilo debe
/// sincronizar externamente.
pub struct EventDispatcher<E: DomainEvent> {
    handlers: HashMap<E::Kind, Vec<Arc<dyn EventHandler<E>>>>,
}

impl<E: DomainEvent> EventDispatcher<E> {
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Agrega `handler` al final de la secuencia de `kind`, creando la
    /// secuencia si el kind aún no existe. Sin deduplicación: registrar dos
    /// veces produce dos invocaciones por notify.
    pub fn register(&mut self, kind: E::Kind, handler: Arc<dyn EventHandler<E>>) {
        debug!("register handler '{}' for {:?}", handler.name(), kind);
        self.handlers.entry(kind).or_insert_with(Vec::new).push(handler);
    }

    /// Remueve la primera ocurrencia de `handler` (por identidad de puntero)
    /// de la secuencia de `kind`. Kind ausente o handler no encontrado son
    /// no-ops deliberados; la entrada del kind se conserva aunque quede
    /// vacía.
    pub fn unregister(&mut self, kind: E::Kind, handler: &Arc<dyn EventHandler<E>>) {
        if let Some(seq) = self.handlers.get_mut(&kind) {
            if let Some(pos) = seq.iter().position(|h| Arc::ptr_eq(h, handler)) {
                seq.remove(pos);
                debug!("unregister handler '{}' from {:?}", handler.name(), kind);
            }
        }
    }

    /// Limpia el mapa completo: todo kind previamente registrado pasa a
    /// reportar "ausente" (no "secuencia vacía").
    pub fn unregister_all(&mut self) {
        debug!("unregister all handlers");
        self.handlers.clear();
    }

    /// Invoca cada handler registrado bajo el kind del evento, en orden de
    /// registro, sincrónicamente y en el hilo del caller. Kind ausente o sin
    /// handlers es un no-op exitoso.
    ///
    /// Política de fallo: propagate-and-abort. El primer handler que falla
    /// corta el fan-out restante y el error sube al caller como
    /// `CoreEventError::HandlerFailed`.
    pub fn notify(&self, event: &E) -> Result<(), CoreEventError> {
        let kind = event.kind();
        match self.handlers.get(&kind) {
            Some(seq) => {
                trace!("notify {:?} to {} handler(s)", kind, seq.len());
                for handler in seq {
                    if let Err(e) = handler.handle(event) {
                        warn!("handler '{}' failed for {:?}: {}", handler.name(), kind, e);
                        return Err(CoreEventError::HandlerFailed { handler: handler.name().to_string(),
                                                                   reason: e.to_string() });
                    }
                }
                Ok(())
            }
            None => {
                trace!("notify {:?}: no handlers registered", kind);
                Ok(())
            }
        }
    }

    /// Vista de sólo lectura del mapeo vivo (mismas identidades `Arc`, sin
    /// copia defensiva).
    pub fn handlers(&self) -> &HashMap<E::Kind, Vec<Arc<dyn EventHandler<E>>>> {
        &self.handlers
    }

    /// Secuencia registrada bajo `kind`. Distingue kind ausente (`None`) de
    /// kind presente con secuencia vacía (`Some(&[])`).
    pub fn handlers_for(&self, kind: E::Kind) -> Option<&[Arc<dyn EventHandler<E>>]> {
        self.handlers.get(&kind).map(|seq| seq.as_slice())
    }
}

impl<E: DomainEvent> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DomainEvent> fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, seq) in &self.handlers {
            map.entry(kind, &seq.len());
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum SignalKind {
        Started,
        Stopped,
    }

    struct Signal {
        kind: SignalKind,
        ts: DateTime<Utc>,
    }

    impl Signal {
        fn new(kind: SignalKind) -> Self {
            Self { kind, ts: Utc::now() }
        }
    }

    impl DomainEvent for Signal {
        type Kind = SignalKind;
        fn kind(&self) -> SignalKind {
            self.kind
        }
        fn occurred_at(&self) -> DateTime<Utc> {
            self.ts
        }
    }

    struct Recorder {
        name: String,
        seen: Mutex<Vec<SignalKind>>,
    }

    impl Recorder {
        fn new(name: &str) -> Self {
            Self { name: name.to_string(), seen: Mutex::new(Vec::new()) }
        }
        fn seen(&self) -> Vec<SignalKind> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl EventHandler<Signal> for Recorder {
        fn handle(&self, event: &Signal) -> Result<(), CoreEventError> {
            self.seen.lock().unwrap().push(event.kind());
            Ok(())
        }
        fn name(&self) -> &str {
            &self.name
        }
    }

    struct Failing;

    impl EventHandler<Signal> for Failing {
        fn handle(&self, _event: &Signal) -> Result<(), CoreEventError> {
            Err(CoreEventError::Internal("boom".to_string()))
        }
        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn register_appends_at_the_end() {
        let mut dispatcher: EventDispatcher<Signal> = EventDispatcher::new();
        let first: Arc<dyn EventHandler<Signal>> = Arc::new(Recorder::new("first"));
        let second: Arc<dyn EventHandler<Signal>> = Arc::new(Recorder::new("second"));

        dispatcher.register(SignalKind::Started, first.clone());
        dispatcher.register(SignalKind::Started, second.clone());

        let seq = dispatcher.handlers_for(SignalKind::Started).unwrap();
        assert_eq!(seq.len(), 2);
        assert!(Arc::ptr_eq(&seq[0], &first));
        assert!(Arc::ptr_eq(&seq[1], &second));
    }

    #[test]
    fn same_handler_may_occupy_several_slots() {
        let mut dispatcher: EventDispatcher<Signal> = EventDispatcher::new();
        let recorder = Arc::new(Recorder::new("dup"));

        dispatcher.register(SignalKind::Started, recorder.clone());
        dispatcher.register(SignalKind::Started, recorder.clone());
        dispatcher.notify(&Signal::new(SignalKind::Started)).unwrap();

        // dos slots, dos invocaciones
        assert_eq!(recorder.seen().len(), 2);
    }

    #[test]
    fn unregister_removes_first_occurrence_and_keeps_key() {
        let mut dispatcher: EventDispatcher<Signal> = EventDispatcher::new();
        let recorder: Arc<dyn EventHandler<Signal>> = Arc::new(Recorder::new("only"));

        dispatcher.register(SignalKind::Started, recorder.clone());
        dispatcher.unregister(SignalKind::Started, &recorder);

        // la clave sigue presente, con secuencia vacía
        let seq = dispatcher.handlers_for(SignalKind::Started);
        assert!(seq.is_some());
        assert_eq!(seq.map(|s| s.len()), Some(0));
    }

    #[test]
    fn unregister_unknown_kind_or_handler_is_noop() {
        let mut dispatcher: EventDispatcher<Signal> = EventDispatcher::new();
        let registered: Arc<dyn EventHandler<Signal>> = Arc::new(Recorder::new("registered"));
        let stranger: Arc<dyn EventHandler<Signal>> = Arc::new(Recorder::new("stranger"));

        // kind nunca registrado
        dispatcher.unregister(SignalKind::Stopped, &stranger);
        assert!(dispatcher.handlers_for(SignalKind::Stopped).is_none());

        // handler no presente bajo un kind existente
        dispatcher.register(SignalKind::Started, registered.clone());
        dispatcher.unregister(SignalKind::Started, &stranger);
        assert_eq!(dispatcher.handlers_for(SignalKind::Started).map(|s| s.len()), Some(1));
    }

    #[test]
    fn unregister_all_drops_every_key() {
        let mut dispatcher: EventDispatcher<Signal> = EventDispatcher::new();
        dispatcher.register(SignalKind::Started, Arc::new(Recorder::new("a")));
        dispatcher.register(SignalKind::Stopped, Arc::new(Recorder::new("b")));

        dispatcher.unregister_all();

        assert!(dispatcher.handlers_for(SignalKind::Started).is_none());
        assert!(dispatcher.handlers_for(SignalKind::Stopped).is_none());
        assert!(dispatcher.handlers().is_empty());
    }

    #[test]
    fn notify_without_handlers_is_ok() {
        let dispatcher: EventDispatcher<Signal> = EventDispatcher::new();
        assert!(dispatcher.notify(&Signal::new(SignalKind::Started)).is_ok());
    }

    #[test]
    fn notify_only_reaches_the_event_kind() {
        let mut dispatcher: EventDispatcher<Signal> = EventDispatcher::new();
        let started = Arc::new(Recorder::new("started"));
        let stopped = Arc::new(Recorder::new("stopped"));

        dispatcher.register(SignalKind::Started, started.clone());
        dispatcher.register(SignalKind::Stopped, stopped.clone());
        dispatcher.notify(&Signal::new(SignalKind::Started)).unwrap();

        assert_eq!(started.seen(), vec![SignalKind::Started]);
        assert!(stopped.seen().is_empty());
    }

    #[test]
    fn failing_handler_aborts_remaining_fanout() {
        let mut dispatcher: EventDispatcher<Signal> = EventDispatcher::new();
        let before = Arc::new(Recorder::new("before"));
        let after = Arc::new(Recorder::new("after"));

        dispatcher.register(SignalKind::Started, before.clone());
        dispatcher.register(SignalKind::Started, Arc::new(Failing));
        dispatcher.register(SignalKind::Started, after.clone());

        let err = dispatcher.notify(&Signal::new(SignalKind::Started)).unwrap_err();
        assert_eq!(err,
                   CoreEventError::HandlerFailed { handler: "failing".to_string(),
                                                   reason: "internal: boom".to_string() });
        assert_eq!(before.seen().len(), 1);
        assert!(after.seen().is_empty());
    }
}
