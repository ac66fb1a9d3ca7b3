use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Fixed catalog taxonomy. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Category {
    Headphones,
    Speakers,
    Earphones,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Headphones => "headphones",
            Category::Speakers => "speakers",
            Category::Earphones => "earphones",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    // Path input is matched case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "headphones" => Ok(Category::Headphones),
            "speakers" => Ok(Category::Speakers),
            "earphones" => Ok(Category::Earphones),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub price: i64,
    pub image: String,
    /// Unconstrained catalog copy: description, feature text, gallery refs.
    #[schema(value_type = Object)]
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentMethod {
    #[serde(rename = "e-Money")]
    EMoney,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub payment_method: PaymentMethod,
    pub e_money_number: String,
    #[serde(rename = "eMoneyPIN")]
    pub e_money_pin: String,
}

/// A purchased line embedded in an order. Ephemeral outside of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: Uuid,
    pub name: String,
    pub price: i64,
    pub quantity: i64,
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: i64,
    pub shipping: i64,
    pub vat: i64,
    pub grand_total: i64,
}

/// Immutable once written; `order_id` is the human-facing token, `id` the
/// storage key. The nested documents live in JSONB columns.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub order_id: String,
    #[sqlx(json)]
    pub customer_info: CustomerInfo,
    #[sqlx(json)]
    pub cart_items: Vec<OrderLine>,
    #[sqlx(json)]
    pub order_summary: OrderSummary,
    pub created_at: DateTime<Utc>,
}
