//! Order submission builder
//!
//! Validates the composed order and produces the `POST /api/orders` payload.
//! All failures here are local validation errors raised before any network
//! call; transport belongs to the client crate.

use shared::models::{CustomerInfo, OrderLinePayload, OrderRequest};
use shared::ValidationError;
use tracing::debug;

use crate::cart::Cart;
use crate::error::ComposeResult;
use crate::money::to_f64;
use crate::table_select::{SelectionMode, TableChoice, TableSelector};

/// Build the order-creation request from cart, customer, and table selection
///
/// Fails when the customer name is empty, the guest count is below 1, the
/// cart is empty, or merge mode is active with capacity unmet.
pub fn build_order_request(
    customer: CustomerInfo,
    guest_count: i32,
    cart: &Cart,
    selector: &TableSelector,
) -> ComposeResult<OrderRequest> {
    if customer.name.trim().is_empty() {
        return Err(ValidationError::EmptyCustomerName.into());
    }
    if guest_count < 1 {
        return Err(ValidationError::InvalidGuestCount(guest_count).into());
    }
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart.into());
    }

    let choice = selector.resolve();
    if selector.mode() == SelectionMode::Merge
        && !matches!(choice, TableChoice::None)
        && !selector.capacity_met(guest_count)
    {
        return Err(ValidationError::CapacityNotMet {
            selected: selector.aggregate_capacity(),
            required: guest_count,
        }
        .into());
    }

    let items: Vec<OrderLinePayload> = cart
        .lines()
        .iter()
        .map(|line| OrderLinePayload {
            item_id: line.item_id.clone(),
            variation_id: line.variation.id.clone(),
            addon_ids: line.addons.iter().map(|a| a.id.clone()).collect(),
            quantity: line.quantity,
            unit_price: to_f64(line.unit_price),
            line_total: to_f64(line.line_total()),
        })
        .collect();

    let (table_id, merged_table_ids) = match choice {
        TableChoice::None => (None, None),
        TableChoice::Single(id) => (Some(id), None),
        TableChoice::Merged(ids) => (None, Some(ids)),
    };

    let request = OrderRequest {
        customer,
        guest_count,
        items,
        table_id,
        merged_table_ids,
        total: to_f64(cart.total()),
    };

    debug!(
        lines = request.items.len(),
        guest_count,
        total = request.total,
        "Order request built"
    );

    Ok(request)
}
