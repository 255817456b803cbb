// src/handlers/catalog.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::catalog::{
        CostingBreakdown, CostingInput, LaborRateBreakdown, LaborRateInput, Product,
    },
    services::pricing_service,
};

// =============================================================================
//  ÁREA 1: PRODUTOS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Bolo de pote 250ml")]
    pub name: String,

    // Preço de venda praticado
    #[serde(default)]
    #[schema(example = "25.00")]
    pub price: Decimal,

    #[serde(default)]
    pub raw_material_cost: Decimal,
    #[serde(default)]
    pub labor_cost: Decimal,
    #[serde(default)]
    pub supplies_cost: Decimal,
    #[serde(default)]
    #[schema(example = "5.0")]
    pub fees: Decimal,
    #[serde(default)]
    #[schema(example = "3.0")]
    pub taxes: Decimal,
    #[serde(default)]
    #[schema(example = "20.0")]
    pub profit_margin: Decimal,
}

// POST /api/catalog/products
#[utoipa::path(
    post,
    path = "/api/catalog/products",
    tag = "Catálogo",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state
        .catalog_service
        .create_product(
            &payload.name,
            payload.price,
            payload.raw_material_cost,
            payload.labor_cost,
            payload.supplies_cost,
            payload.fees,
            payload.taxes,
            payload.profit_margin,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// GET /api/catalog/products
#[utoipa::path(
    get,
    path = "/api/catalog/products",
    tag = "Catálogo",
    responses(
        (status = 200, description = "Lista de produtos", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.catalog_service.list_products().await;
    Ok((StatusCode::OK, Json(products)))
}

// GET /api/catalog/products/{id}
#[utoipa::path(
    get,
    path = "/api/catalog/products/{id}",
    tag = "Catálogo",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state.catalog_service.get_product(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

// PUT /api/catalog/products/{id}
#[utoipa::path(
    put,
    path = "/api/catalog/products/{id}",
    tag = "Catálogo",
    params(("id" = Uuid, Path, description = "ID do produto")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Produto atualizado", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state
        .catalog_service
        .update_product(
            id,
            &payload.name,
            payload.price,
            payload.raw_material_cost,
            payload.labor_cost,
            payload.supplies_cost,
            payload.fees,
            payload.taxes,
            payload.profit_margin,
        )
        .await?;

    Ok((StatusCode::OK, Json(product)))
}

// DELETE /api/catalog/products/{id}
#[utoipa::path(
    delete,
    path = "/api/catalog/products/{id}",
    tag = "Catálogo",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 2: PRECIFICAÇÃO
// =============================================================================

// POST /api/catalog/costing
// Prévia pura da precificação: o formulário chama a cada alteração de
// campo e exibe o que voltar. Nada é gravado.
#[utoipa::path(
    post,
    path = "/api/catalog/costing",
    tag = "Catálogo",
    request_body = CostingInput,
    responses(
        (status = 200, description = "Custos, preço sugerido e lucro real", body = CostingBreakdown)
    )
)]
pub async fn costing_preview(
    State(_app_state): State<AppState>,
    Json(input): Json<CostingInput>,
) -> Result<impl IntoResponse, AppError> {
    let breakdown = pricing_service::compute_costing(&input);
    Ok((StatusCode::OK, Json(breakdown)))
}

// POST /api/catalog/costing/labor-rate
#[utoipa::path(
    post,
    path = "/api/catalog/costing/labor-rate",
    tag = "Catálogo",
    request_body = LaborRateInput,
    responses(
        (status = 200, description = "Custo por minuto e custo de mão de obra", body = LaborRateBreakdown),
        (status = 400, description = "Horas semanais inválidas")
    )
)]
pub async fn labor_rate(
    State(_app_state): State<AppState>,
    Json(input): Json<LaborRateInput>,
) -> Result<impl IntoResponse, AppError> {
    let breakdown = pricing_service::compute_labor_rate(&input)?;
    Ok((StatusCode::OK, Json(breakdown)))
}
