use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{CustomerInfo, OrderLine, OrderSummary, PaymentMethod};
use crate::totals::{CartLine, compute_totals};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Incoming order payload. Every field is optional at the schema level so a
/// missing one is reported as a violation instead of a deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_info: Option<CustomerInfoPayload>,
    pub cart_items: Option<Vec<CartItemPayload>>,
    pub order_summary: Option<OrderSummary>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInfoPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub payment_method: String,
    pub e_money_number: String,
    #[serde(rename = "eMoneyPIN")]
    pub e_money_pin: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemPayload {
    pub product_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
    #[serde(default)]
    pub image: String,
}

/// A fully validated and normalized order, ready to persist.
#[derive(Debug)]
pub struct NewOrder {
    pub customer_info: CustomerInfo,
    pub cart_items: Vec<OrderLine>,
    pub order_summary: OrderSummary,
}

/// Run every check and report all violations together; nothing is written
/// when any of them fails.
pub fn validate_order(payload: &CreateOrderRequest) -> Result<NewOrder, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let customer_info = match &payload.customer_info {
        Some(info) => validate_customer_info(info, &mut violations),
        None => {
            violations.push(violation("customerInfo", "Customer info is required"));
            None
        }
    };

    let cart_items = match payload.cart_items.as_deref() {
        Some(items) if !items.is_empty() => validate_cart_items(items, &mut violations),
        _ => {
            violations.push(violation("cartItems", "Cart must have at least one item"));
            None
        }
    };

    let order_summary = match (&payload.order_summary, &cart_items) {
        (None, _) => {
            violations.push(violation("orderSummary", "Order summary is required"));
            None
        }
        (Some(summary), Some(lines)) => {
            // Totals are never trusted from the client; a submitted summary
            // must match the server-side recomputation.
            let priced: Vec<CartLine> = lines
                .iter()
                .map(|line| CartLine {
                    price: line.price,
                    quantity: line.quantity,
                })
                .collect();
            let computed = compute_totals(&priced);
            if *summary != computed {
                violations.push(violation(
                    "orderSummary",
                    "Order summary does not match totals computed from cart items",
                ));
                None
            } else {
                Some(computed)
            }
        }
        // Cart invalid, so there is nothing to recompute against.
        (Some(_), None) => None,
    };

    match (customer_info, cart_items, order_summary) {
        (Some(customer_info), Some(cart_items), Some(order_summary))
            if violations.is_empty() =>
        {
            Ok(NewOrder {
                customer_info,
                cart_items,
                order_summary,
            })
        }
        _ => Err(violations),
    }
}

fn validate_customer_info(
    info: &CustomerInfoPayload,
    violations: &mut Vec<FieldViolation>,
) -> Option<CustomerInfo> {
    let before = violations.len();

    require(violations, "customerInfo.name", &info.name, "Name is required");
    if !is_well_formed_email(&info.email) {
        violations.push(violation("customerInfo.email", "Valid email is required"));
    }
    require(
        violations,
        "customerInfo.phone",
        &info.phone,
        "Phone number is required",
    );
    require(
        violations,
        "customerInfo.address",
        &info.address,
        "Address is required",
    );
    require(
        violations,
        "customerInfo.zipCode",
        &info.zip_code,
        "ZIP code is required",
    );
    require(violations, "customerInfo.city", &info.city, "City is required");
    require(
        violations,
        "customerInfo.country",
        &info.country,
        "Country is required",
    );

    let payment_method = match info.payment_method.as_str() {
        "e-Money" => Some(PaymentMethod::EMoney),
        "Cash on Delivery" => Some(PaymentMethod::CashOnDelivery),
        _ => {
            violations.push(violation(
                "customerInfo.paymentMethod",
                "Invalid payment method",
            ));
            None
        }
    };

    if violations.len() > before {
        return None;
    }

    Some(CustomerInfo {
        name: info.name.clone(),
        email: info.email.clone(),
        phone: info.phone.clone(),
        address: info.address.clone(),
        zip_code: info.zip_code.clone(),
        city: info.city.clone(),
        country: info.country.clone(),
        payment_method: payment_method?,
        e_money_number: info.e_money_number.clone(),
        e_money_pin: info.e_money_pin.clone(),
    })
}

fn validate_cart_items(
    items: &[CartItemPayload],
    violations: &mut Vec<FieldViolation>,
) -> Option<Vec<OrderLine>> {
    let before = violations.len();
    let mut lines = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        // Accept a storage id when the client supplies one, mint one otherwise.
        let product_id = match &item.product_id {
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    violations.push(violation(
                        &format!("cartItems[{index}].productId"),
                        "Invalid product ID",
                    ));
                    None
                }
            },
            None => Some(Uuid::new_v4()),
        };

        if item.name.trim().is_empty() {
            violations.push(violation(
                &format!("cartItems[{index}].name"),
                "Item name is required",
            ));
        }
        if item.image.trim().is_empty() {
            violations.push(violation(
                &format!("cartItems[{index}].image"),
                "Item image is required",
            ));
        }

        let price = match item.price {
            Some(price) if price > 0 => Some(price),
            Some(_) => {
                violations.push(violation(
                    &format!("cartItems[{index}].price"),
                    "Item price must be a positive number",
                ));
                None
            }
            None => {
                violations.push(violation(
                    &format!("cartItems[{index}].price"),
                    "Item price is required",
                ));
                None
            }
        };

        let quantity = match item.quantity {
            Some(quantity) if quantity > 0 => Some(quantity),
            Some(_) => {
                violations.push(violation(
                    &format!("cartItems[{index}].quantity"),
                    "Item quantity must be a positive integer",
                ));
                None
            }
            None => {
                violations.push(violation(
                    &format!("cartItems[{index}].quantity"),
                    "Item quantity is required",
                ));
                None
            }
        };

        if let (Some(product_id), Some(price), Some(quantity)) = (product_id, price, quantity) {
            lines.push(OrderLine {
                product_id,
                name: item.name.clone(),
                price,
                quantity,
                image: item.image.clone(),
            });
        }
    }

    if violations.len() > before {
        None
    } else {
        Some(lines)
    }
}

fn require(violations: &mut Vec<FieldViolation>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        violations.push(violation(field, message));
    }
}

fn violation(field: &str, message: &str) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

// Structural check only: one '@', non-empty local part, dotted domain.
fn is_well_formed_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
