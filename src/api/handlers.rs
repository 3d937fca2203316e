//! One handler per endpoint.
//!
//! | Handler | Endpoint |
//! |---------|----------|
//! | [`summary`] | `GET /` |
//! | [`create_product`] | `POST /products` |
//! | [`get_product`] | `GET /products/{id}` |
//! | [`list_products`] | `GET /products` |
//! | [`create_order`] | `POST /orders` |
//! | [`get_order`] | `GET /orders/{id}` |
//! | [`update_order`] | `PUT /orders/{id}` |
//! | [`delete_order`] | `DELETE /orders/{id}` |
//! | [`list_orders`] | `GET /orders` |

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::dto::{
    Deleted, OrderCreate, OrderUpdate, OrderView, ProductCreate, ProductView, SummaryView,
};
use crate::api::{ApiError, ApiResponse};
use crate::desk::OrderDesk;
use crate::error::DeskError;
use crate::types::{OrderId, ProductId};

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| {
        debug!(%err, "Malformed request body");
        ApiError::Malformed(err)
    })
}

/// `GET /`: product and order counts; always 200
pub fn summary(desk: &OrderDesk) -> ApiResponse {
    ApiResponse::ok(&SummaryView::from(desk.summary()))
}

// ============================================================================
// Products
// ============================================================================

/// `POST /products`: 200, 409 on a duplicate id, 400 on a negative price, 422 on a bad body
pub fn create_product(desk: &mut OrderDesk, body: &str) -> ApiResponse {
    let result = parse::<ProductCreate>(body).and_then(|req| {
        let product = desk.add_product(req.product_id, req.name, req.price, req.stock)?;
        Ok(ProductView::from(product))
    });
    result.into()
}

/// `GET /products/{id}`: 200 or 404
pub fn get_product(desk: &OrderDesk, id: ProductId) -> ApiResponse {
    let result = desk
        .get_product(id)
        .map(ProductView::from)
        .ok_or(ApiError::Desk(DeskError::ProductNotFound(id)));
    result.into()
}

/// `GET /products`: 200 with products in ascending id order
pub fn list_products(desk: &OrderDesk) -> ApiResponse {
    let products: Vec<ProductView> = desk.catalog().iter().map(ProductView::from).collect();
    ApiResponse::ok(&products)
}

// ============================================================================
// Orders
// ============================================================================

/// `POST /orders`: 200, 404 on an unknown product, 400 on quantity or stock, 409 on a duplicate id, 422 on a bad body
pub fn create_order(desk: &mut OrderDesk, body: &str) -> ApiResponse {
    let result = parse::<OrderCreate>(body).and_then(|req| {
        let requests = req.requests();
        let order = desk.create_order(req.order_id, req.customer, &requests)?;
        Ok(OrderView::from(order))
    });
    result.into()
}

/// `GET /orders/{id}`: 200 or 404
pub fn get_order(desk: &OrderDesk, id: OrderId) -> ApiResponse {
    let result = desk
        .get_order(id)
        .map(OrderView::from)
        .ok_or(ApiError::Desk(DeskError::OrderNotFound(id)));
    result.into()
}

/// `PUT /orders/{id}`: 200, 404 on an unknown order or product, 400 on quantity, 422 on a bad body
pub fn update_order(desk: &mut OrderDesk, id: OrderId, body: &str) -> ApiResponse {
    let result = parse::<OrderUpdate>(body).and_then(|req| {
        let (customer, requests) = req.into_parts();
        let order = desk.update_order(id, customer, requests.as_deref())?;
        Ok(OrderView::from(order))
    });
    result.into()
}

/// `DELETE /orders/{id}`: 200 with a confirmation message, or 404
pub fn delete_order(desk: &mut OrderDesk, id: OrderId) -> ApiResponse {
    let result = desk
        .delete_order(id)
        .map(|_| Deleted {
            message: format!("Order {id} deleted"),
        })
        .ok_or(ApiError::Desk(DeskError::OrderNotFound(id)));
    result.into()
}

/// `GET /orders`: 200 with orders in creation order
pub fn list_orders(desk: &OrderDesk) -> ApiResponse {
    let orders: Vec<OrderView> = desk.ledger().iter().map(OrderView::from).collect();
    ApiResponse::ok(&orders)
}
