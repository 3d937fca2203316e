//! Order node for slab-based list storage.
//!
//! `OrderNode` wraps an `Order` with a single forward link. The link is a
//! slab key, so the ledger is a singly linked list laid out in an arena.

use crate::types::{Order, OrderId};

/// Order node stored in the slab.
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The order data
    pub order: Order,

    /// Next (newer) order, slab key
    /// None if this is the tail
    pub next: Option<usize>,
}

impl OrderNode {
    /// Create a new unlinked node
    #[inline]
    pub fn new(order: Order) -> Self {
        Self { order, next: None }
    }

    /// Check if this node is the last in the list
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// Get the order id
    #[inline]
    pub fn order_id(&self) -> OrderId {
        self.order.id
    }
}
