//! Order ledger module.
//!
//! ## Architecture
//!
//! - [`OrderNode`]: an `Order` plus a forward link (slab key)
//! - [`OrderLedger`]: head/tail handles over a slab, append/find/update/remove
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Append | O(n) (duplicate scan), O(1) link |
//! | Find | O(n) |
//! | Update | O(n) |
//! | Remove | O(n) |
//! | List all (insertion order) | O(n) |

pub mod list;
pub mod node;

pub use list::{OrderLedger, Walk};
pub use node::OrderNode;
