//! Request and response payloads for the JSON boundary.
//!
//! Field names match the wire format; decimals travel as JSON numbers and
//! timestamps as ISO-8601 strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::desk::DeskSummary;
use crate::types::{ItemRequest, LineItem, Order, OrderId, Product, ProductId};

// ============================================================================
// Requests
// ============================================================================

/// Body of a create-product request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

/// One requested line inside an order body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreate {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl From<ItemCreate> for ItemRequest {
    fn from(item: ItemCreate) -> Self {
        ItemRequest::new(item.product_id, item.quantity)
    }
}

/// Body of a create-order request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_id: OrderId,
    pub customer: String,
    pub items: Vec<ItemCreate>,
}

impl OrderCreate {
    pub fn requests(&self) -> Vec<ItemRequest> {
        self.items.iter().copied().map(ItemRequest::from).collect()
    }
}

/// Body of an update-order request; both fields optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ItemCreate>>,
}

impl OrderUpdate {
    /// Split into the desk's update arguments
    ///
    /// An empty customer name or an empty item list counts as not supplied.
    pub fn into_parts(self) -> (Option<String>, Option<Vec<ItemRequest>>) {
        let customer = self.customer.filter(|name| !name.is_empty());
        let items = self
            .items
            .filter(|items| !items.is_empty())
            .map(|items| items.into_iter().map(ItemRequest::from).collect());
        (customer, items)
    }
}

// ============================================================================
// Responses
// ============================================================================

/// A product as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.unit_price,
            stock: product.stock_quantity,
        }
    }
}

/// A priced line as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemView {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
            subtotal: item.subtotal,
        }
    }
}

/// An order as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    pub order_id: OrderId,
    pub customer: String,
    /// ISO-8601 / RFC 3339
    pub created_at: String,
    pub total: Decimal,
    pub items: Vec<LineItemView>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            customer: order.customer.clone(),
            created_at: order.created_at.to_rfc3339(),
            total: order.total,
            items: order.items.iter().map(LineItemView::from).collect(),
        }
    }
}

/// Landing payload with container sizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    pub message: String,
    pub products: usize,
    pub orders: usize,
}

impl From<DeskSummary> for SummaryView {
    fn from(summary: DeskSummary) -> Self {
        Self {
            message: "Order desk".to_string(),
            products: summary.products,
            orders: summary.orders,
        }
    }
}

/// Confirmation body for deletes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
}

/// Error body: `{"detail": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
