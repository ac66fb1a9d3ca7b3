use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::{AppError, AppResult},
    models::{Category, Product},
    response::{ApiResponse, Meta},
};

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_products))
        .route("/category/{category}", get(list_by_category))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List the full catalog", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(pool): State<DbPool>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at")
        .fetch_all(&pool)
        .await?;

    let meta = Meta::total(items.len() as i64);
    let data = ProductList { items };
    Ok(Json(ApiResponse::success("Products", data, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 400, description = "Malformed product ID"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    Path(id): Path<String>,
    State(pool): State<DbPool>,
) -> AppResult<Json<ApiResponse<Product>>> {
    // A malformed key is reported before touching storage.
    let id = Uuid::parse_str(&id).map_err(|_| AppError::InvalidId(id))?;

    let result = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await?;
    let result = match result {
        Some(product) => product,
        None => return Err(AppError::NotFound),
    };
    Ok(Json(ApiResponse::success("Product", result, None)))
}

#[utoipa::path(
    get,
    path = "/api/products/category/{category}",
    params(
        ("category" = String, Path, description = "One of headphones, speakers, earphones (any casing)")
    ),
    responses(
        (status = 200, description = "List products in a category", body = ApiResponse<ProductList>),
        (status = 400, description = "Unknown category"),
    ),
    tag = "Products"
)]
pub async fn list_by_category(
    Path(category): Path<String>,
    State(pool): State<DbPool>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let category: Category = category
        .parse()
        .map_err(|_| AppError::InvalidCategory(category))?;

    let items = sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE category = $1 ORDER BY created_at",
    )
    .bind(category)
    .fetch_all(&pool)
    .await?;

    let meta = Meta::total(items.len() as i64);
    let data = ProductList { items };
    Ok(Json(ApiResponse::success("Products", data, Some(meta))))
}
