//! Product catalog: an unbalanced binary search tree over a slab.
//!
//! ## Architecture
//!
//! - **Slab**: arena holding every [`ProductNode`]; keys are stable handles
//! - **Root handle**: `Option<usize>` pointing at the first inserted product
//! - **Child handles**: each node links to its left/right subtrees by slab key
//!
//! ## Ordering
//!
//! For every node, all ids in the left subtree are smaller and all ids in
//! the right subtree are larger. Ids are unique. The tree never rebalances,
//! so its shape depends on insertion order; ascending inserts produce a
//! right-leaning chain of depth `n`.
//!
//! Descent and traversal are iterative, so a degenerate tree costs O(n)
//! time but never deep recursion.
//!
//! ## Example
//!
//! ```
//! use order_desk::catalog::ProductCatalog;
//! use rust_decimal::Decimal;
//!
//! let mut catalog = ProductCatalog::with_capacity(16);
//! catalog.insert(50, "Monitor", Decimal::new(19900, 2), 4).unwrap();
//! catalog.insert(30, "Mouse", Decimal::new(1500, 2), 40).unwrap();
//! catalog.insert(70, "Desk", Decimal::new(25000, 2), 2).unwrap();
//!
//! let ids: Vec<u64> = catalog.iter().map(|p| p.id).collect();
//! assert_eq!(ids, vec![30, 50, 70]);
//! ```

use std::cmp::Ordering;

use rust_decimal::Decimal;
use slab::Slab;
use tracing::{debug, warn};

use crate::catalog::ProductNode;
use crate::error::{DeskError, Result};
use crate::types::price;
use crate::types::{Product, ProductId};

/// Product catalog keyed by product id.
///
/// Stored products are reachable only through shared references; prices
/// and stock change through [`reprice`](Self::reprice) and
/// [`restock`](Self::restock), and the id of a stored product never changes.
///
/// ```compile_fail
/// use order_desk::catalog::ProductCatalog;
/// use rust_decimal::Decimal;
///
/// let mut catalog = ProductCatalog::new();
/// catalog.insert(30, "Mouse", Decimal::ONE, 1).unwrap();
/// catalog.lookup_mut(30).unwrap().id = 90;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    /// Node storage
    /// Key: slab index, Value: ProductNode
    nodes: Slab<ProductNode>,

    /// Handle of the root node, None while the catalog is empty
    root: Option<usize>,
}

impl ProductCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
        }
    }

    /// Create a catalog with pre-allocated node capacity
    ///
    /// ```
    /// use order_desk::catalog::ProductCatalog;
    ///
    /// let catalog = ProductCatalog::with_capacity(1_000);
    /// assert!(catalog.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of products in the catalog
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the catalog is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id stored at the root (the first product inserted)
    pub fn root_id(&self) -> Option<ProductId> {
        self.root.map(|key| self.nodes[key].product_id())
    }

    /// Height of the tree in nodes (0 when empty)
    ///
    /// With no balancing this ranges from `log2(n) + 1` to `n`.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|key| (key, 1)).into_iter().collect();

        while let Some((key, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[key];
            if let Some(left) = node.left {
                stack.push((left, level + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, level + 1));
            }
        }

        deepest
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Insert a product
    ///
    /// The id is searched for first; a match fails with
    /// [`DeskError::DuplicateKey`] and leaves the tree untouched. A negative
    /// price fails with [`DeskError::InvalidPrice`].
    ///
    /// # Example
    ///
    /// ```
    /// use order_desk::catalog::ProductCatalog;
    /// use order_desk::error::DeskError;
    /// use rust_decimal::Decimal;
    ///
    /// let mut catalog = ProductCatalog::new();
    /// catalog.insert(1, "A", Decimal::ONE, 10).unwrap();
    ///
    /// let err = catalog.insert(1, "A again", Decimal::ONE, 10).unwrap_err();
    /// assert_eq!(err, DeskError::DuplicateKey(1));
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn insert(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
        stock_quantity: u32,
    ) -> Result<&Product> {
        if self.contains(id) {
            warn!(product_id = id, "Rejected duplicate product");
            return Err(DeskError::DuplicateKey(id));
        }
        if !price::is_valid_price(unit_price) {
            warn!(product_id = id, %unit_price, "Rejected negative price");
            return Err(DeskError::InvalidPrice(unit_price.to_string()));
        }

        let product = Product::new(id, name, unit_price, stock_quantity);
        let key = self.nodes.insert(ProductNode::new(product));

        match self.root {
            None => self.root = Some(key),
            Some(root) => self.attach(root, key, id),
        }

        debug!(product_id = id, size = self.len(), "Inserted product");
        Ok(&self.nodes[key].product)
    }

    /// Walk down from `cursor` and hang `key` in the first empty child slot
    fn attach(&mut self, mut cursor: usize, key: usize, id: ProductId) {
        loop {
            let node = &mut self.nodes[cursor];
            // Equal ids never reach here: insert rejects them up front
            let slot = if id < node.product.id {
                &mut node.left
            } else {
                &mut node.right
            };

            match *slot {
                Some(child) => cursor = child,
                None => {
                    *slot = Some(key);
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Descend from the root to the node holding `id`
    fn locate(&self, id: ProductId) -> Option<usize> {
        let mut cursor = self.root;

        while let Some(key) = cursor {
            let node = &self.nodes[key];
            cursor = match id.cmp(&node.product.id) {
                Ordering::Equal => return Some(key),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }

        None
    }

    /// Look up a product by id
    ///
    /// O(depth); `None` if the id was never inserted.
    pub fn lookup(&self, id: ProductId) -> Option<&Product> {
        self.locate(id).map(|key| &self.nodes[key].product)
    }

    /// Mutable access for field updates that leave the id alone
    fn lookup_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        let key = self.locate(id)?;
        Some(&mut self.nodes[key].product)
    }

    /// Check if a product exists
    #[inline]
    pub fn contains(&self, id: ProductId) -> bool {
        self.locate(id).is_some()
    }

    // ========================================================================
    // Field Mutation
    // ========================================================================

    /// Change a product's unit price
    ///
    /// Orders already in the ledger keep the price they were created with.
    /// Returns `Ok(None)` if the product does not exist.
    pub fn reprice(&mut self, id: ProductId, unit_price: Decimal) -> Result<Option<&Product>> {
        if !price::is_valid_price(unit_price) {
            return Err(DeskError::InvalidPrice(unit_price.to_string()));
        }

        Ok(self.lookup_mut(id).map(|product| {
            product.unit_price = unit_price;
            &*product
        }))
    }

    /// Set a product's stock quantity
    ///
    /// Returns `None` if the product does not exist.
    pub fn restock(&mut self, id: ProductId, stock_quantity: u32) -> Option<&Product> {
        let product = self.lookup_mut(id)?;
        product.stock_quantity = stock_quantity;
        Some(&*product)
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Iterate over products in ascending id order
    pub fn iter(&self) -> InOrder<'_> {
        InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// All products in ascending id order
    pub fn list_all(&self) -> Vec<Product> {
        self.iter().cloned().collect()
    }

    /// Remove every product
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl<'a> IntoIterator for &'a ProductCatalog {
    type Item = &'a Product;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// In-order Iterator
// ============================================================================

/// In-order walk (left subtree, node, right subtree) with an explicit stack.
#[derive(Debug)]
pub struct InOrder<'a> {
    nodes: &'a Slab<ProductNode>,
    /// Ancestors whose left subtree is being visited
    stack: Vec<usize>,
    /// Next subtree to descend into
    cursor: Option<usize>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;

        while let Some(key) = self.cursor {
            self.stack.push(key);
            self.cursor = nodes[key].left;
        }

        let key = self.stack.pop()?;
        let node = &nodes[key];
        self.cursor = node.right;
        Some(&node.product)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
