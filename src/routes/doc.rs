use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{Category, CustomerInfo, Order, OrderLine, OrderSummary, PaymentMethod, Product},
    response::{ApiResponse, Meta},
    routes::{cart, health, orders, products},
    totals::CartLine,
    validation::{CartItemPayload, CreateOrderRequest, CustomerInfoPayload, FieldViolation},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::list_by_category,
        cart::validate_cart,
        orders::create_order,
        orders::get_order,
    ),
    components(
        schemas(
            Category,
            Product,
            PaymentMethod,
            CustomerInfo,
            OrderLine,
            OrderSummary,
            Order,
            CartLine,
            FieldViolation,
            CreateOrderRequest,
            CustomerInfoPayload,
            CartItemPayload,
            cart::ValidateCartRequest,
            cart::CartValidation,
            products::ProductList,
            Meta,
            ApiResponse<Product>,
            ApiResponse<products::ProductList>,
            ApiResponse<Order>,
            ApiResponse<cart::CartValidation>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Read-only catalog endpoints"),
        (name = "Cart", description = "Cart total computation"),
        (name = "Orders", description = "Order creation and lookup"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
