use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use chrono::Utc;
use sqlx::types::Json as Jsonb;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::{AppError, AppResult},
    models::Order,
    response::{ApiResponse, Meta},
    validation::{CreateOrderRequest, validate_order},
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", post(create_order))
        .route("/{id}", get(get_order))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<Order>),
        (status = 400, description = "Validation failed; every violated field is listed"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(pool): State<DbPool>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let Json(payload) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let new_order = validate_order(&payload).map_err(AppError::Validation)?;

    // The unique constraint on order_id makes a token collision fail the
    // write instead of overwriting an existing order.
    let order = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (id, order_id, customer_info, cart_items, order_summary)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(build_order_token())
    .bind(Jsonb(&new_order.customer_info))
    .bind(Jsonb(&new_order.cart_items))
    .bind(Jsonb(&new_order.order_summary))
    .fetch_one(&pool)
    .await?;

    tracing::info!(order_id = %order.order_id, "order created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Order created",
            order,
            Some(Meta::empty()),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = String, Path, description = "Order storage ID")
    ),
    responses(
        (status = 200, description = "Get order", body = ApiResponse<Order>),
        (status = 400, description = "Malformed order ID"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(pool): State<DbPool>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    // A malformed key is reported before touching storage.
    let id = Uuid::parse_str(&id).map_err(|_| AppError::InvalidId(id))?;

    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?;
    let order = match order {
        Some(order) => order,
        None => return Err(AppError::NotFound),
    };

    Ok(Json(ApiResponse::success("Order", order, Some(Meta::empty()))))
}

// Human-facing token, distinct from the storage key.
fn build_order_token() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("ORD-{}-{}", millis, &suffix[..9])
}
