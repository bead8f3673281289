use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::{
    error::AppError,
    models::{NewStock, Stock, StockResponse},
    state::AppState,
};

fn stock_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::InvalidId(rejection.body_text()))
}

/// Decodes the body as JSON whatever the request's content type says.
fn stock_body(body: &[u8]) -> Result<NewStock, AppError> {
    serde_json::from_slice(body).map_err(|err| AppError::InvalidBody(err.to_string()))
}

#[utoipa::path(
    post,
    path = "/api/stock",
    tag = "stock",
    request_body = NewStock,
    responses(
        (status = 200, description = "Stock created", body = StockResponse),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn create_stock(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StockResponse>, AppError> {
    let stock = stock_body(&body)?;
    let id = state.store.insert_stock(&stock).await;

    Ok(Json(StockResponse::new(id, "created")))
}

#[utoipa::path(
    get,
    path = "/api/stock/{id}",
    tag = "stock",
    params(("id" = i64, Path, description = "Stock id")),
    responses(
        (status = 200, description = "The stock, or an empty record if the id is unknown", body = Stock),
        (status = 400, description = "Malformed id or storage failure")
    )
)]
pub async fn get_stock(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Stock>, AppError> {
    let id = stock_id(path)?;
    let stock = state.store.get_stock(id).await?;

    Ok(Json(stock))
}

#[utoipa::path(
    get,
    path = "/api/stock",
    tag = "stock",
    responses(
        (status = 200, description = "All stocks", body = [Stock]),
        (status = 400, description = "Storage failure")
    )
)]
pub async fn get_all_stock(State(state): State<AppState>) -> Result<Json<Vec<Stock>>, AppError> {
    let stocks = state.store.get_all_stock().await?;

    Ok(Json(stocks))
}

#[utoipa::path(
    put,
    path = "/api/stock/{id}",
    tag = "stock",
    params(("id" = i64, Path, description = "Stock id")),
    request_body = NewStock,
    responses(
        (status = 200, description = "Update issued", body = StockResponse),
        (status = 400, description = "Malformed id or body")
    )
)]
pub async fn update_stock(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<StockResponse>, AppError> {
    let id = stock_id(path)?;
    let stock = stock_body(&body)?;
    let rows = state.store.update_stock(id, &stock).await;
    tracing::debug!(id, rows, "update handled");

    Ok(Json(StockResponse::new(id, "updated")))
}

#[utoipa::path(
    delete,
    path = "/api/stock/{id}",
    tag = "stock",
    params(("id" = i64, Path, description = "Stock id")),
    responses(
        (status = 200, description = "Delete issued", body = StockResponse),
        (status = 400, description = "Malformed id")
    )
)]
pub async fn delete_stock(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<StockResponse>, AppError> {
    let id = stock_id(path)?;
    let rows = state.store.delete_stock(id).await;
    tracing::debug!(id, rows, "delete handled");

    Ok(Json(StockResponse::new(id, "deleted")))
}
