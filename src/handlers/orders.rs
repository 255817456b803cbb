// src/handlers/orders.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::orders::{OrderStatus, PaymentStatus, SalesOrder},
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub lead_id: Uuid,
}

// POST /api/orders
// Gera o pedido a partir da proposta mais recente do lead e, com o pedido
// já criado, marca o lead como aprovado no funil.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Pedidos",
    request_body = CreateOrderPayload,
    responses(
        (status = 201, description = "Pedido criado a partir da proposta mais recente", body = SalesOrder),
        (status = 404, description = "Lead sem proposta ou inexistente"),
        (status = 409, description = "O lead já possui um pedido")
    )
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state
        .order_service
        .create_from_lead(payload.lead_id)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Pedidos",
    responses(
        (status = 200, description = "Todos os pedidos", body = Vec<SalesOrder>)
    )
)]
pub async fn list_orders(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = app_state.order_service.list_orders().await;
    Ok((StatusCode::OK, Json(orders)))
}

// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Pedidos",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    responses(
        (status = 200, description = "Pedido encontrado", body = SalesOrder),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state.order_service.get_order(id).await?;
    Ok((StatusCode::OK, Json(order)))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusPayload {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
}

// PUT /api/orders/{id}/status
#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = "Pedidos",
    params(("id" = Uuid, Path, description = "ID do pedido")),
    request_body = UpdateOrderStatusPayload,
    responses(
        (status = 200, description = "Status atualizado", body = SalesOrder),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn update_order_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state
        .order_service
        .update_status(id, payload.status, payload.payment_status)
        .await?;
    Ok((StatusCode::OK, Json(order)))
}
