use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::OrderSummary;

/// Flat shipping fee applied to every cart.
pub const SHIPPING_FEE: i64 = 50;

/// VAT charged on the subtotal, rounded to the nearest unit.
pub const VAT_RATE: f64 = 0.20;

/// The slice of an incoming cart item the calculator cares about. Extra
/// fields on the wire are ignored.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
pub struct CartLine {
    pub price: i64,
    pub quantity: i64,
}

/// Pure totals computation. Deterministic, no persistence; an empty cart
/// yields a zero subtotal rather than an error.
pub fn compute_totals(items: &[CartLine]) -> OrderSummary {
    let subtotal: i64 = items.iter().map(|item| item.price * item.quantity).sum();
    let vat = (subtotal as f64 * VAT_RATE).round() as i64;
    let grand_total = subtotal + SHIPPING_FEE + vat;

    OrderSummary {
        subtotal,
        shipping: SHIPPING_FEE,
        vat,
        grand_total,
    }
}
