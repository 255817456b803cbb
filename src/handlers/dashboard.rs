// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::{DashboardSummary, StatusRevenueEntry},
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Receita, a receber e lucro", body = DashboardSummary)
    )
)]
pub async fn get_summary(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.dashboard_service.get_summary().await;
    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/dashboard/sales-by-status
#[utoipa::path(
    get,
    path = "/api/dashboard/sales-by-status",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Totais de pedidos agrupados por status (apenas não zerados)", body = Vec<StatusRevenueEntry>)
    )
)]
pub async fn get_sales_by_status(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entries = app_state.dashboard_service.get_sales_by_status().await;
    Ok((StatusCode::OK, Json(entries)))
}
