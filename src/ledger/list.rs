//! Order ledger: a singly linked list over a slab.
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) -> order2 -> order3 -> tail (newest)
//! ```
//!
//! - New orders are linked after the tail (the tail handle is kept, so the
//!   link itself is O(1); the duplicate-id check still scans the list)
//! - Lookup and removal scan from the head
//! - Removal relinks the predecessor; removing the head advances `head`
//!
//! List order is always insertion order.

use chrono::{DateTime, Utc};
use slab::Slab;
use tracing::{debug, warn};

use crate::error::{DeskError, Result};
use crate::ledger::OrderNode;
use crate::types::{LineItem, Order, OrderId};

/// Order ledger keyed by order id, kept in insertion order.
///
/// Orders change only through [`update`](Self::update), which keeps the
/// total in step with the items and never touches `id` or `created_at`.
///
/// ```compile_fail
/// use order_desk::ledger::OrderLedger;
///
/// let mut ledger = OrderLedger::new();
/// ledger.append(2, "X", Vec::new()).unwrap();
/// ledger.find_mut(2).unwrap().id = 1;
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    /// Node storage
    nodes: Slab<OrderNode>,

    /// Oldest order (slab key)
    head: Option<usize>,

    /// Newest order (slab key)
    tail: Option<usize>,
}

impl OrderLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
        }
    }

    /// Create a ledger with pre-allocated node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of orders in the ledger
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the ledger is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========================================================================
    // Append
    // ========================================================================

    /// Append an order at the tail, stamped with the current time
    ///
    /// # Example
    ///
    /// ```
    /// use order_desk::ledger::OrderLedger;
    /// use order_desk::types::LineItem;
    /// use rust_decimal::Decimal;
    ///
    /// let mut ledger = OrderLedger::new();
    /// let items = vec![LineItem::new(1, 3, Decimal::new(1000, 2)).unwrap()];
    /// let order = ledger.append(500, "X", items).unwrap();
    ///
    /// assert_eq!(order.total, Decimal::from(30));
    /// assert_eq!(ledger.len(), 1);
    /// ```
    pub fn append(
        &mut self,
        id: OrderId,
        customer: impl Into<String>,
        items: Vec<LineItem>,
    ) -> Result<&Order> {
        self.append_at(id, customer, items, Utc::now())
    }

    /// Append an order with an explicit creation time
    ///
    /// Fails with [`DeskError::DuplicateKey`] if the id is already present;
    /// the ledger is unchanged on any error.
    pub fn append_at(
        &mut self,
        id: OrderId,
        customer: impl Into<String>,
        items: Vec<LineItem>,
        created_at: DateTime<Utc>,
    ) -> Result<&Order> {
        if self.locate(id).is_some() {
            warn!(order_id = id, "Rejected duplicate order");
            return Err(DeskError::DuplicateKey(id));
        }

        let order = Order::new(id, customer, items, created_at)?;
        let key = self.nodes.insert(OrderNode::new(order));

        match self.tail {
            Some(tail_key) => self.nodes[tail_key].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);

        debug!(order_id = id, size = self.len(), "Appended order");
        Ok(&self.nodes[key].order)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Scan from the head for the node holding `id`
    fn locate(&self, id: OrderId) -> Option<usize> {
        let mut cursor = self.head;

        while let Some(key) = cursor {
            let node = &self.nodes[key];
            if node.order_id() == id {
                return Some(key);
            }
            cursor = node.next;
        }

        None
    }

    /// Find an order by id (linear scan)
    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.locate(id).map(|key| &self.nodes[key].order)
    }

    /// Check if an order exists
    #[inline]
    pub fn contains(&self, id: OrderId) -> bool {
        self.locate(id).is_some()
    }

    // ========================================================================
    // Update / Remove
    // ========================================================================

    /// Update an order in place
    ///
    /// `customer` replaces the name when given. `items` replaces the whole
    /// item list and recomputes the total when given. Either may be omitted.
    ///
    /// Returns `Ok(None)` if the order does not exist, and
    /// [`DeskError::TotalOverflow`] (before touching the order) if the new
    /// items cannot be summed.
    pub fn update(
        &mut self,
        id: OrderId,
        customer: Option<String>,
        items: Option<Vec<LineItem>>,
    ) -> Result<Option<&Order>> {
        let Some(key) = self.locate(id) else {
            return Ok(None);
        };

        let total = match &items {
            Some(items) => Some(Order::total_of(items).ok_or(DeskError::TotalOverflow { order_id: id })?),
            None => None,
        };

        let order = &mut self.nodes[key].order;
        if let Some(customer) = customer {
            order.customer = customer;
        }
        if let (Some(items), Some(total)) = (items, total) {
            order.items = items;
            order.total = total;
        }

        debug!(order_id = id, "Updated order");
        Ok(Some(&*order))
    }

    /// Unlink and return an order
    ///
    /// Returns `None` if the id is not present; the list is unchanged.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(key) = cursor {
            let next = self.nodes[key].next;

            if self.nodes[key].order_id() == id {
                match prev {
                    Some(prev_key) => self.nodes[prev_key].next = next,
                    // This was the head
                    None => self.head = next,
                }
                if self.nodes[key].is_tail() {
                    self.tail = prev;
                }

                let order = self.nodes.remove(key).order;
                debug!(order_id = id, size = self.len(), "Removed order");
                return Some(order);
            }

            prev = Some(key);
            cursor = next;
        }

        None
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Iterate over orders from head (oldest) to tail (newest)
    pub fn iter(&self) -> Walk<'_> {
        Walk {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// All orders in insertion order
    pub fn list_all(&self) -> Vec<Order> {
        self.iter().cloned().collect()
    }

    /// Id of the oldest order
    pub fn head_id(&self) -> Option<OrderId> {
        self.head.map(|key| self.nodes[key].order_id())
    }

    /// Id of the newest order
    pub fn tail_id(&self) -> Option<OrderId> {
        self.tail.map(|key| self.nodes[key].order_id())
    }

    /// Remove every order
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }
}

impl<'a> IntoIterator for &'a OrderLedger {
    type Item = &'a Order;
    type IntoIter = Walk<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head-to-tail walk over the ledger.
#[derive(Debug)]
pub struct Walk<'a> {
    nodes: &'a Slab<OrderNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.cursor = node.next;
        Some(&node.order)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
