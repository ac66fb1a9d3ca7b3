use axum::{Json, Router, extract::rejection::JsonRejection, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    db::DbPool,
    error::{AppError, AppResult},
    models::OrderSummary,
    response::{ApiResponse, Meta},
    totals::{CartLine, compute_totals},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateCartRequest {
    pub cart: Vec<CartLine>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartValidation {
    pub valid: bool,
    pub totals: OrderSummary,
}

pub fn router() -> Router<DbPool> {
    Router::new().route("/validate", post(validate_cart))
}

#[utoipa::path(
    post,
    path = "/api/cart/validate",
    request_body = ValidateCartRequest,
    responses(
        (status = 200, description = "Cart totals", body = ApiResponse<CartValidation>),
        (status = 400, description = "Body is not a cart of priced items"),
    ),
    tag = "Cart"
)]
pub async fn validate_cart(
    payload: Result<Json<ValidateCartRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<CartValidation>>> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("Invalid cart data".to_string()))?;

    let data = CartValidation {
        valid: true,
        totals: compute_totals(&payload.cart),
    };

    Ok(Json(ApiResponse::success(
        "Cart validated",
        data,
        Some(Meta::empty()),
    )))
}
