//! Validaciones end-to-end del registro de eventos de la tienda.
//!
//! Cada `run_*_validation` ejercita una parte del contrato del dispatcher
//! con los tipos reales de dominio y adapters, e imprime su progreso.

use std::sync::{Arc, Mutex};

use shop_adapters::handlers::{FirstMessageOnCustomerCreatedHandler, MessageOnAddressChangedHandler,
                              SecondMessageOnCustomerCreatedHandler, SendEmailOnProductCreatedHandler};
use shop_adapters::{ShopEvent, ShopEventKind};
use shop_core::{CoreEventError, EventDispatcher, EventHandler};
use shop_domain::{Address, Customer, Product};
use tracing_subscriber::EnvFilter;

/// Handler local que anota su etiqueta en una bitácora compartida, para
/// validar orden de invocación sin depender de los handlers de adapters.
struct Probe {
    label: &'static str,
    journal: Arc<Mutex<Vec<&'static str>>>,
}

impl Probe {
    fn new(label: &'static str, journal: Arc<Mutex<Vec<&'static str>>>) -> Arc<Self> {
        Arc::new(Self { label, journal })
    }
}

impl EventHandler<ShopEvent> for Probe {
    fn handle(&self, _event: &ShopEvent) -> Result<(), CoreEventError> {
        self.journal.lock().unwrap().push(self.label);
        Ok(())
    }
    fn name(&self) -> &str {
        self.label
    }
}

/// Handler local que siempre falla, para validar la política
/// propagate-and-abort del notify.
struct AlwaysFails;

impl EventHandler<ShopEvent> for AlwaysFails {
    fn handle(&self, _event: &ShopEvent) -> Result<(), CoreEventError> {
        Err(CoreEventError::Internal("simulated failure".to_string()))
    }
    fn name(&self) -> &str {
        "always-fails"
    }
}

/// Validación: register/unregister conservan la clave; unregister_all la
/// elimina.
fn run_registry_validation() -> Result<(), String> {
    let mut dispatcher: EventDispatcher<ShopEvent> = EventDispatcher::new();
    let handler: Arc<dyn EventHandler<ShopEvent>> = Arc::new(SendEmailOnProductCreatedHandler);

    dispatcher.register(ShopEventKind::ProductCreated, handler.clone());
    if dispatcher.handlers_for(ShopEventKind::ProductCreated).map(|s| s.len()) != Some(1) {
        return Err("register should append one handler".to_string());
    }

    dispatcher.unregister(ShopEventKind::ProductCreated, &handler);
    if dispatcher.handlers_for(ShopEventKind::ProductCreated).map(|s| s.len()) != Some(0) {
        return Err("unregister should keep the kind with an empty sequence".to_string());
    }

    // unregister tolerante: kind y handler desconocidos no fallan
    dispatcher.unregister(ShopEventKind::CustomerCreated, &handler);
    dispatcher.unregister(ShopEventKind::ProductCreated, &handler);

    dispatcher.unregister_all();
    if dispatcher.handlers_for(ShopEventKind::ProductCreated).is_some() {
        return Err("unregister_all should drop the kind entirely".to_string());
    }
    println!("[OK] registry: append, tolerant remove, key retention, reset");
    Ok(())
}

/// Validación: fan-out en orden de registro sobre un mismo kind.
fn run_ordered_fanout_validation() -> Result<(), String> {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let mut dispatcher: EventDispatcher<ShopEvent> = EventDispatcher::new();
    dispatcher.register(ShopEventKind::CustomerCreated, Probe::new("first", journal.clone()));
    dispatcher.register(ShopEventKind::CustomerCreated, Probe::new("second", journal.clone()));

    let customer = Customer::new("123", "Sérgio Santiago").map_err(|e| e.to_string())?;
    dispatcher.notify(&ShopEvent::customer_created(&customer)).map_err(|e| e.to_string())?;

    let entries = journal.lock().unwrap().clone();
    if entries != vec!["first", "second"] {
        return Err(format!("unexpected fan-out order: {entries:?}"));
    }
    println!("[OK] fan-out: both handlers, registration order");
    Ok(())
}

/// Validación: un handler que falla corta el fan-out restante.
fn run_failure_abort_validation() -> Result<(), String> {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let mut dispatcher: EventDispatcher<ShopEvent> = EventDispatcher::new();
    dispatcher.register(ShopEventKind::ProductCreated, Probe::new("before", journal.clone()));
    dispatcher.register(ShopEventKind::ProductCreated, Arc::new(AlwaysFails));
    dispatcher.register(ShopEventKind::ProductCreated, Probe::new("after", journal.clone()));

    let product = Product::new("p1", "Product 1", 10.0).map_err(|e| e.to_string())?;
    let result = dispatcher.notify(&ShopEvent::product_created(&product, "Product 1 description"));
    if result.is_ok() {
        return Err("notify should propagate the handler failure".to_string());
    }

    let entries = journal.lock().unwrap().clone();
    if entries != vec!["before"] {
        return Err(format!("fan-out should stop at the failing handler, saw {entries:?}"));
    }
    println!("[OK] failure: propagate-and-abort ({})", result.unwrap_err());
    Ok(())
}

/// Validación: recorrido completo con los handlers reales de adapters.
fn run_showcase_validation() -> Result<(), String> {
    let mut dispatcher: EventDispatcher<ShopEvent> = EventDispatcher::new();
    dispatcher.register(ShopEventKind::ProductCreated, Arc::new(SendEmailOnProductCreatedHandler));
    dispatcher.register(ShopEventKind::CustomerCreated, Arc::new(FirstMessageOnCustomerCreatedHandler));
    dispatcher.register(ShopEventKind::CustomerCreated, Arc::new(SecondMessageOnCustomerCreatedHandler));
    dispatcher.register(ShopEventKind::CustomerAddressChanged, Arc::new(MessageOnAddressChangedHandler));

    let product = Product::new("p1", "Product 1", 10.0).map_err(|e| e.to_string())?;
    dispatcher.notify(&ShopEvent::product_created(&product, "Product 1 description"))
              .map_err(|e| e.to_string())?;

    let mut customer = Customer::new("123", "Sérgio Santiago").map_err(|e| e.to_string())?;
    dispatcher.notify(&ShopEvent::customer_created(&customer)).map_err(|e| e.to_string())?;

    let address = Address::new("Rua 1", 123, "12345-678", "São Paulo").map_err(|e| e.to_string())?;
    customer.change_address(address.clone());
    dispatcher.notify(&ShopEvent::customer_address_changed(&customer, &address))
              .map_err(|e| e.to_string())?;

    println!("[OK] showcase: product, customer and address events delivered");
    Ok(())
}

fn main() {
    // Cargar .env si existe (nivel de log, etc.)
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut failed = false;
    println!("--- Iniciando validación de registry ---");
    if let Err(e) = run_registry_validation() {
        eprintln!("[registry] Error: {e}");
        failed = true;
    }
    println!("--- Iniciando validación de fan-out ordenado ---");
    if let Err(e) = run_ordered_fanout_validation() {
        eprintln!("[fan-out] Error: {e}");
        failed = true;
    }
    println!("--- Iniciando validación de aborto por fallo ---");
    if let Err(e) = run_failure_abort_validation() {
        eprintln!("[failure] Error: {e}");
        failed = true;
    }
    println!("--- Iniciando validación showcase ---");
    if let Err(e) = run_showcase_validation() {
        eprintln!("[showcase] Error: {e}");
        failed = true;
    }
    if failed {
        std::process::exit(1);
    }
    println!("Validación completa: OK");
}
