//! JSON boundary over the order desk.
//!
//! This module is what an HTTP layer calls: each handler takes a desk plus
//! a raw JSON body, runs one desk operation, and returns an [`ApiResponse`]
//! carrying a status code and a JSON body. Routing and sockets live
//! outside this crate.
//!
//! ## Status Codes
//!
//! | Outcome | Status |
//! |---------|--------|
//! | Success | 200 |
//! | `ProductNotFound`, `OrderNotFound` | 404 |
//! | `DuplicateKey` | 409 |
//! | `InsufficientStock`, `InvalidQuantity`, `InvalidPrice`, overflow | 400 |
//! | Body is not valid JSON for the payload | 422 |
//! | Response could not be encoded | 500 |
//!
//! ## Example
//!
//! ```
//! use order_desk::api;
//! use order_desk::desk::OrderDesk;
//!
//! let mut desk = OrderDesk::new();
//! let created = api::create_product(
//!     &mut desk,
//!     r#"{"product_id": 1, "name": "A", "price": 10.0, "stock": 5}"#,
//! );
//! assert_eq!(created.status, 200);
//!
//! let missing = api::get_product(&desk, 2);
//! assert_eq!(missing.status, 404);
//! ```

pub mod dto;
pub mod handlers;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::DeskError;

pub use dto::{
    Deleted, ErrorBody, ItemCreate, LineItemView, OrderCreate, OrderUpdate, OrderView, ProductCreate,
    ProductView, SummaryView,
};
pub use handlers::{
    create_order, create_product, delete_order, get_order, get_product, list_orders, list_products,
    summary, update_order,
};

/// Failures at the boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// The desk rejected the operation
    #[error(transparent)]
    Desk(#[from] DeskError),

    /// The request body did not parse
    #[error("malformed request body: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The response could not be encoded
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status for this failure
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Desk(err) => status_code(err),
            ApiError::Malformed(_) => 422,
            ApiError::Encode(_) => 500,
        }
    }
}

/// Map a desk error to its HTTP status code
pub fn status_code(err: &DeskError) -> u16 {
    match err {
        DeskError::ProductNotFound(_) | DeskError::OrderNotFound(_) => 404,
        DeskError::DuplicateKey(_) => 409,
        DeskError::InsufficientStock { .. }
        | DeskError::InvalidQuantity { .. }
        | DeskError::InvalidPrice(_)
        | DeskError::SubtotalOverflow { .. }
        | DeskError::TotalOverflow { .. } => 400,
    }
}

/// Status code plus JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// 200 with `payload` as the body
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self { status: 200, body },
            Err(err) => Self::from_error(&ApiError::Encode(err)),
        }
    }

    /// Error status with a `{"detail": ...}` body
    pub fn from_error(err: &ApiError) -> Self {
        let detail = match err {
            ApiError::Desk(inner) => inner.to_string(),
            other => other.to_string(),
        };
        let body = serde_json::to_value(ErrorBody { detail }).unwrap_or_default();
        Self {
            status: err.status(),
            body,
        }
    }

    /// True for 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl<T: Serialize> From<Result<T, ApiError>> for ApiResponse {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(payload) => ApiResponse::ok(&payload),
            Err(err) => ApiResponse::from_error(&err),
        }
    }
}
