use axum::Json;
use utoipa::OpenApi;

use crate::handlers::stock;
use crate::models::{NewStock, Stock, StockResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        stock::create_stock,
        stock::get_stock,
        stock::get_all_stock,
        stock::update_stock,
        stock::delete_stock,
    ),
    components(schemas(Stock, NewStock, StockResponse)),
    tags((name = "stock", description = "CRUD over the stocks table"))
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
