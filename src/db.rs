use std::time::Duration;

use axum::async_trait;
use futures_util::TryStreamExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::{
    config::Config,
    error::StoreError,
    models::{NewStock, Stock},
};

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.database_url)
        .await
}

/// Data access for the `stocks` table. One statement per call.
///
/// Write operations log storage failures and report them as id `0` or zero
/// affected rows instead of returning an error.
#[async_trait]
pub trait StockStore: Send + Sync {
    async fn insert_stock(&self, stock: &NewStock) -> i64;

    /// Returns `Stock::default()` when no row has this id.
    async fn get_stock(&self, id: i64) -> Result<Stock, StoreError>;

    async fn get_all_stock(&self) -> Result<Vec<Stock>, StoreError>;

    async fn update_stock(&self, id: i64, stock: &NewStock) -> u64;

    async fn delete_stock(&self, id: i64) -> u64;
}

pub struct PgStockStore {
    pool: PgPool,
}

impl PgStockStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn insert_stock(&self, stock: &NewStock) -> i64 {
        let inserted: Result<i64, sqlx::Error> = sqlx::query_scalar(
            "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&stock.name)
        .bind(stock.price)
        .bind(&stock.company)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(id) => {
                info!(id, "stock created");
                id
            }
            Err(err) => {
                error!(error = %err, "failed to insert stock");
                0
            }
        }
    }

    async fn get_stock(&self, id: i64) -> Result<Stock, StoreError> {
        let stock = sqlx::query_as::<_, Stock>(
            "SELECT id, name, price, company FROM stocks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            error!(id, error = %err, "failed to fetch stock");
            err
        })?;

        match stock {
            Some(stock) => {
                info!(id, "stock fetched");
                Ok(stock)
            }
            None => {
                warn!(id, "no stock with this id");
                Ok(Stock::default())
            }
        }
    }

    async fn get_all_stock(&self) -> Result<Vec<Stock>, StoreError> {
        let mut rows = sqlx::query_as::<_, Stock>("SELECT id, name, price, company FROM stocks")
            .fetch(&self.pool);

        let mut stocks = Vec::new();
        loop {
            match rows.try_next().await {
                Ok(Some(stock)) => stocks.push(stock),
                Ok(None) => break,
                Err(
                    err @ (sqlx::Error::ColumnDecode { .. }
                    | sqlx::Error::ColumnNotFound(_)
                    | sqlx::Error::Decode(_)),
                ) => {
                    error!(decoded = stocks.len(), error = %err, "failed to decode stock row");
                    return Err(StoreError::PartialScan {
                        rows: stocks,
                        source: err,
                    });
                }
                Err(err) => {
                    error!(error = %err, "failed to fetch stocks");
                    return Err(err.into());
                }
            }
        }

        info!(count = stocks.len(), "stocks fetched");
        Ok(stocks)
    }

    async fn update_stock(&self, id: i64, stock: &NewStock) -> u64 {
        let updated = sqlx::query("UPDATE stocks SET name = $2, price = $3, company = $4 WHERE id = $1")
            .bind(id)
            .bind(&stock.name)
            .bind(stock.price)
            .bind(&stock.company)
            .execute(&self.pool)
            .await;

        match updated {
            Ok(result) => {
                info!(id, rows = result.rows_affected(), "stock updated");
                result.rows_affected()
            }
            Err(err) => {
                error!(id, error = %err, "failed to update stock");
                0
            }
        }
    }

    async fn delete_stock(&self, id: i64) -> u64 {
        let deleted = sqlx::query("DELETE FROM stocks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;

        match deleted {
            Ok(result) => {
                info!(id, rows = result.rows_affected(), "stock deleted");
                result.rows_affected()
            }
            Err(err) => {
                error!(id, error = %err, "failed to delete stock");
                0
            }
        }
    }
}
