use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of the `stocks` table.
///
/// `Stock::default()` is the empty record returned for ids with no row.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, ToSchema)]
pub struct Stock {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub company: String,
}

/// Body of create and update requests. Missing fields decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewStock {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub company: String,
}

#[cfg(test)]
impl NewStock {
    pub fn into_stock(self, id: i64) -> Stock {
        Stock {
            id,
            name: self.name,
            price: self.price,
            company: self.company,
        }
    }
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct StockResponse {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl StockResponse {
    pub fn new(id: i64, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}
