//! Order API
//!
//! Ships the composed [`OrderRequest`] to the backend. Validation happens in
//! the engine before this is called; anything failing here is transport.

use shared::models::{CreatedOrder, OrderRequest};
use tracing::{debug, error};

use crate::{ClientResult, HttpClient};

/// Submit an order to `POST /api/orders`
pub async fn create_order(
    client: &HttpClient,
    request: &OrderRequest,
) -> ClientResult<CreatedOrder> {
    debug!(
        lines = request.items.len(),
        guest_count = request.guest_count,
        total = request.total,
        "Submitting order"
    );

    match client.post::<CreatedOrder, _>("/api/orders", request).await {
        Ok(order) => {
            debug!(order_id = %order.id, order_number = %order.order_number, "Order created");
            Ok(order)
        }
        Err(err) => {
            error!(error = %err, "Order submission failed");
            Err(err)
        }
    }
}
