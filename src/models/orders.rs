// src/models/orders.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Pendente,
    Processando,
    Enviado,
    Entregue,
}

impl OrderStatus {
    // Ordem fixa usada pelo gráfico de vendas por status
    pub const ALL: [OrderStatus; 4] = [
        Self::Pendente,
        Self::Processando,
        Self::Enviado,
        Self::Entregue,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    Pendente,
    Pago,
}

// --- Pedido ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: Uuid,
    pub product_name: String,
    #[schema(example = "25.00")]
    pub price: Decimal,
    #[schema(example = 2)]
    pub quantity: u32,
}

// Gerado uma única vez a partir do lead ganho. Depois de criado, só
// status e paymentStatus mudam; itens e total são histórico imutável.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub items: Vec<OrderItem>,
    #[schema(example = "110.00")]
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
