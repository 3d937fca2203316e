//! Product catalog module.
//!
//! ## Architecture
//!
//! The catalog is a binary search tree keyed by product id, stored in a
//! slab arena:
//!
//! - [`ProductNode`]: a `Product` plus left/right child handles
//! - [`ProductCatalog`]: root handle, insert/lookup, in-order traversal
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(depth) |
//! | Lookup | O(depth) |
//! | List all (ascending) | O(n) |
//!
//! The tree does not rebalance, so depth is between `log2(n)` and `n`
//! depending on insertion order.

pub mod node;
pub mod tree;

pub use node::ProductNode;
pub use tree::{InOrder, ProductCatalog};
