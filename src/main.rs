//! Order Desk - Binary Entry Point
//!
//! Seeds a desk with a few products, walks through the order lifecycle
//! via the JSON handlers, and prints each response.

use order_desk::api::{self, ApiResponse};
use order_desk::config::DeskConfig;
use order_desk::logging::setup_tracing;
use order_desk::types::price::format_price;
use order_desk::OrderDesk;
use tracing::info;

fn show(label: &str, response: &ApiResponse) {
    println!("{label} -> {}", response.status);
    match serde_json::to_string_pretty(&response.body) {
        Ok(text) => println!("{text}"),
        Err(err) => println!("  (unprintable body: {err})"),
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DeskConfig::from_env()?;
    setup_tracing(config.log_filter());

    println!("===========================================");
    println!("  Order Desk - Catalog BST + Order Ledger");
    println!("===========================================");
    println!();

    let mut desk = OrderDesk::with_config(&config);
    info!(
        catalog_capacity = config.catalog_capacity(),
        ledger_capacity = config.ledger_capacity(),
        "Desk ready"
    );

    // Products arrive out of id order; listing comes back sorted
    let products = [
        r#"{"product_id": 101, "name": "Laptop HP", "price": 599.99, "stock": 15}"#,
        r#"{"product_id": 50, "name": "Monitor 24in", "price": 149.5, "stock": 8}"#,
        r#"{"product_id": 30, "name": "USB Keyboard", "price": 19.9, "stock": 1}"#,
    ];
    for body in products {
        show("POST /products", &api::create_product(&mut desk, body));
    }
    show("GET /products", &api::list_products(&desk));

    let order = r#"{"order_id": 1001, "customer": "Juan Perez", "items": [
        {"product_id": 50, "quantity": 2},
        {"product_id": 30, "quantity": 1}
    ]}"#;
    show("POST /orders", &api::create_order(&mut desk, order));

    let short = r#"{"order_id": 1002, "customer": "Ana", "items": [
        {"product_id": 101, "quantity": 1},
        {"product_id": 30, "quantity": 2}
    ]}"#;
    show("POST /orders (short stock)", &api::create_order(&mut desk, short));

    show(
        "PUT /orders/1001",
        &api::update_order(&mut desk, 1001, r#"{"customer": "Juan P."}"#),
    );
    show("GET /orders", &api::list_orders(&desk));
    show("GET /", &api::summary(&desk));

    for order in desk.list_orders() {
        println!(
            "Order {} for {}: {} line(s), total {}",
            order.id,
            order.customer,
            order.item_count(),
            format_price(order.total)
        );
    }
    println!("State root: {}", desk.state_root_hex());
    println!();

    show("DELETE /orders/1001", &api::delete_order(&mut desk, 1001));
    show("GET /orders/1001", &api::get_order(&desk, 1001));

    Ok(())
}
