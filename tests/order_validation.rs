use audiophile_api::models::PaymentMethod;
use audiophile_api::validation::{CreateOrderRequest, FieldViolation, validate_order};
use serde_json::{Value, json};
use uuid::Uuid;

fn order_payload() -> Value {
    json!({
        "customerInfo": {
            "name": "Alexei Ward",
            "email": "alexei@mail.com",
            "phone": "+1 202-555-0136",
            "address": "1137 Williams Avenue",
            "zipCode": "10101",
            "city": "New York",
            "country": "United States",
            "paymentMethod": "e-Money",
            "eMoneyNumber": "238521993",
            "eMoneyPIN": "6891"
        },
        "cartItems": [
            {
                "name": "XX99 Mark II Headphones",
                "price": 2999,
                "quantity": 1,
                "image": "/assets/product-xx99-mark-two-headphones/desktop/image-product.jpg"
            }
        ],
        "orderSummary": {
            "subtotal": 2999,
            "shipping": 50,
            "vat": 600,
            "grandTotal": 3649
        }
    })
}

fn parse(value: Value) -> CreateOrderRequest {
    serde_json::from_value(value).expect("payload deserializes")
}

fn has_field(violations: &[FieldViolation], field: &str) -> bool {
    violations.iter().any(|violation| violation.field == field)
}

#[test]
fn valid_payload_is_normalized() {
    let order = validate_order(&parse(order_payload())).expect("valid order");

    assert_eq!(order.customer_info.payment_method, PaymentMethod::EMoney);
    assert_eq!(order.customer_info.e_money_number, "238521993");
    assert_eq!(order.cart_items.len(), 1);
    assert_eq!(order.order_summary.grand_total, 3649);
}

#[test]
fn missing_product_id_is_synthesized() {
    let first = validate_order(&parse(order_payload())).expect("valid order");
    let second = validate_order(&parse(order_payload())).expect("valid order");
    assert_ne!(first.cart_items[0].product_id, second.cart_items[0].product_id);
}

#[test]
fn supplied_product_id_is_kept() {
    let id = Uuid::new_v4();
    let mut payload = order_payload();
    payload["cartItems"][0]["productId"] = json!(id.to_string());

    let order = validate_order(&parse(payload)).expect("valid order");
    assert_eq!(order.cart_items[0].product_id, id);
}

#[test]
fn malformed_product_id_is_rejected() {
    let mut payload = order_payload();
    payload["cartItems"][0]["productId"] = json!("not-a-uuid");

    let violations = validate_order(&parse(payload)).expect_err("rejected");
    assert!(has_field(&violations, "cartItems[0].productId"));
}

#[test]
fn empty_cart_is_rejected() {
    let mut payload = order_payload();
    payload["cartItems"] = json!([]);

    let violations = validate_order(&parse(payload)).expect_err("rejected");
    assert!(has_field(&violations, "cartItems"));
}

#[test]
fn unknown_payment_method_is_rejected() {
    let mut payload = order_payload();
    payload["customerInfo"]["paymentMethod"] = json!("Bitcoin");

    let violations = validate_order(&parse(payload)).expect_err("rejected");
    assert!(has_field(&violations, "customerInfo.paymentMethod"));
}

#[test]
fn cash_on_delivery_needs_no_e_money_fields() {
    let mut payload = order_payload();
    payload["customerInfo"]["paymentMethod"] = json!("Cash on Delivery");
    payload["customerInfo"]
        .as_object_mut()
        .expect("customer info object")
        .remove("eMoneyNumber");
    payload["customerInfo"]
        .as_object_mut()
        .expect("customer info object")
        .remove("eMoneyPIN");

    let order = validate_order(&parse(payload)).expect("valid order");
    assert_eq!(
        order.customer_info.payment_method,
        PaymentMethod::CashOnDelivery
    );
    assert_eq!(order.customer_info.e_money_number, "");
    assert_eq!(order.customer_info.e_money_pin, "");
}

#[test]
fn bad_email_is_rejected() {
    let mut payload = order_payload();
    payload["customerInfo"]["email"] = json!("not-an-email");

    let violations = validate_order(&parse(payload)).expect_err("rejected");
    assert!(has_field(&violations, "customerInfo.email"));
}

#[test]
fn all_customer_violations_are_reported_together() {
    let mut payload = order_payload();
    payload["customerInfo"] = json!({});

    let violations = validate_order(&parse(payload)).expect_err("rejected");
    for field in [
        "customerInfo.name",
        "customerInfo.email",
        "customerInfo.phone",
        "customerInfo.address",
        "customerInfo.zipCode",
        "customerInfo.city",
        "customerInfo.country",
        "customerInfo.paymentMethod",
    ] {
        assert!(has_field(&violations, field), "missing violation for {field}");
    }
}

#[test]
fn empty_body_reports_every_section() {
    let violations = validate_order(&parse(json!({}))).expect_err("rejected");
    assert!(has_field(&violations, "customerInfo"));
    assert!(has_field(&violations, "cartItems"));
    assert!(has_field(&violations, "orderSummary"));
}

#[test]
fn item_with_zero_quantity_is_rejected() {
    let mut payload = order_payload();
    payload["cartItems"][0]["quantity"] = json!(0);

    let violations = validate_order(&parse(payload)).expect_err("rejected");
    assert!(has_field(&violations, "cartItems[0].quantity"));
}

#[test]
fn client_summary_must_match_recomputed_totals() {
    let mut payload = order_payload();
    payload["orderSummary"]["grandTotal"] = json!(1);

    let violations = validate_order(&parse(payload)).expect_err("rejected");
    assert!(has_field(&violations, "orderSummary"));
}
