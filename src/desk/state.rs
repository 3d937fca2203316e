//! State root computation.
//!
//! The root is a SHA-256 digest over a canonical byte encoding of the desk:
//!
//! ```text
//! u64 product count
//! for each product (ascending id): id, name, unit_price, stock_quantity
//! u64 order count
//! for each order (list order): id, customer, created_at, item count,
//!                              items (product_id, quantity, unit_price, subtotal),
//!                              total
//! ```
//!
//! Integers are little-endian. Strings are length-prefixed UTF-8. Decimals
//! are normalized before encoding, so `10.0` and `10.00` hash the same.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use crate::catalog::ProductCatalog;
use crate::ledger::OrderLedger;
use crate::types::{LineItem, Order, Product};

pub(crate) fn compute_state_root(catalog: &ProductCatalog, ledger: &OrderLedger) -> [u8; 32] {
    let mut hasher = Sha256::new();

    put_u64(&mut hasher, catalog.len() as u64);
    for product in catalog {
        put_product(&mut hasher, product);
    }

    put_u64(&mut hasher, ledger.len() as u64);
    for order in ledger {
        put_order(&mut hasher, order);
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

fn put_product(hasher: &mut Sha256, product: &Product) {
    put_u64(hasher, product.id);
    put_str(hasher, &product.name);
    put_decimal(hasher, product.unit_price);
    hasher.update(product.stock_quantity.to_le_bytes());
}

fn put_order(hasher: &mut Sha256, order: &Order) {
    put_u64(hasher, order.id);
    put_str(hasher, &order.customer);
    hasher.update(order.created_at.timestamp().to_le_bytes());
    hasher.update(order.created_at.timestamp_subsec_nanos().to_le_bytes());
    put_u64(hasher, order.items.len() as u64);
    for item in &order.items {
        put_item(hasher, item);
    }
    put_decimal(hasher, order.total);
}

fn put_item(hasher: &mut Sha256, item: &LineItem) {
    put_u64(hasher, item.product_id);
    hasher.update(item.quantity.to_le_bytes());
    put_decimal(hasher, item.unit_price);
    put_decimal(hasher, item.subtotal);
}

#[inline]
fn put_u64(hasher: &mut Sha256, value: u64) {
    hasher.update(value.to_le_bytes());
}

fn put_str(hasher: &mut Sha256, value: &str) {
    put_u64(hasher, value.len() as u64);
    hasher.update(value.as_bytes());
}

fn put_decimal(hasher: &mut Sha256, value: Decimal) {
    hasher.update(value.normalize().serialize());
}
