// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::orders::OrderStatus;

// 1. Resumo (Os Cards do Topo)
#[derive(Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub revenue: Decimal,    // Pedidos entregues E pagos
    pub receivable: Decimal, // Entregues mas ainda não pagos
    pub profit: Decimal,     // Margem real dos itens entregues e pagos
}

// 2. Gráfico de Vendas por Status
// Só entram status com total diferente de zero.
#[derive(Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusRevenueEntry {
    pub status: OrderStatus,
    pub total: Decimal,
}
