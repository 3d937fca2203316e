//! Product node for slab-based tree storage.
//!
//! ## Design
//!
//! `ProductNode` wraps a `Product` with the two child links of a binary
//! search tree. Links are slab keys (`usize`), not references, so the tree
//! is a flat arena with no ownership cycles.
//!
//! ## Ordering
//!
//! - `left`: subtree whose ids are all strictly less than this node's id
//! - `right`: subtree whose ids are all strictly greater than this node's id

use crate::types::{Product, ProductId};

/// Product node stored in the slab.
#[derive(Debug, Clone)]
pub struct ProductNode {
    /// The product record
    pub product: Product,

    /// Left child (smaller ids), slab key
    pub left: Option<usize>,

    /// Right child (larger ids), slab key
    pub right: Option<usize>,
}

impl ProductNode {
    /// Create a new detached node
    ///
    /// # Example
    ///
    /// ```
    /// use order_desk::catalog::ProductNode;
    /// use order_desk::types::Product;
    /// use rust_decimal::Decimal;
    ///
    /// let node = ProductNode::new(Product::new(1, "A", Decimal::ONE, 5));
    /// assert_eq!(node.product_id(), 1);
    /// assert!(node.left.is_none() && node.right.is_none());
    /// ```
    #[inline]
    pub fn new(product: Product) -> Self {
        Self {
            product,
            left: None,
            right: None,
        }
    }

    /// Get the product id (the tree key)
    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
