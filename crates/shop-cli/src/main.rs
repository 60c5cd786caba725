use std::sync::Arc;

use shop_adapters::handlers::{FirstMessageOnCustomerCreatedHandler, MessageOnAddressChangedHandler,
                              SecondMessageOnCustomerCreatedHandler, SendEmailOnProductCreatedHandler};
use shop_adapters::{ShopEvent, ShopEventKind};
use shop_core::EventDispatcher;
use shop_domain::{Address, Customer, Product};
use tracing_subscriber::EnvFilter;

fn main() {
    // Cargar .env si existe (nivel de log, etc.)
    let _ = dotenvy::dotenv();
    // El subscriber fmt también reenvía los registros del facade `log`
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // CLI mínima: `shop-cli demo`
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 && args[1] == "demo" {
        if let Err(e) = run_demo() {
            eprintln!("[shop demo] error: {e}");
            std::process::exit(5);
        }
    } else {
        println!("shop-cli: use 'demo' subcommand");
        std::process::exit(2);
    }
}

/// Recorrido completo del flujo de eventos de la tienda: alta de producto,
/// alta de cliente con dos handlers y cambio de dirección.
fn run_demo() -> Result<(), String> {
    let mut dispatcher: EventDispatcher<ShopEvent> = EventDispatcher::new();
    dispatcher.register(ShopEventKind::ProductCreated, Arc::new(SendEmailOnProductCreatedHandler));
    dispatcher.register(ShopEventKind::CustomerCreated, Arc::new(FirstMessageOnCustomerCreatedHandler));
    dispatcher.register(ShopEventKind::CustomerCreated, Arc::new(SecondMessageOnCustomerCreatedHandler));
    dispatcher.register(ShopEventKind::CustomerAddressChanged, Arc::new(MessageOnAddressChangedHandler));
    println!("registered handlers: {} kinds", dispatcher.handlers().len());

    let product = Product::new("p1", "Product 1", 10.0).map_err(|e| e.to_string())?;
    dispatcher.notify(&ShopEvent::product_created(&product, "Product 1 description"))
              .map_err(|e| e.to_string())?;
    println!("notified: {product}");

    let mut customer = Customer::new("123", "Sérgio Santiago").map_err(|e| e.to_string())?;
    dispatcher.notify(&ShopEvent::customer_created(&customer)).map_err(|e| e.to_string())?;
    println!("notified: {customer}");

    let address = Address::new("Rua 1", 123, "12345-678", "São Paulo").map_err(|e| e.to_string())?;
    customer.change_address(address.clone());
    customer.activate().map_err(|e| e.to_string())?;
    dispatcher.notify(&ShopEvent::customer_address_changed(&customer, &address))
              .map_err(|e| e.to_string())?;
    println!("notified address change: {address}");

    Ok(())
}
