// src/models/proposal.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::settings::ShippingMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Draft,
    Sent,
}

// Linha da proposta. Nome e preço são COPIADOS do catálogo no momento da
// seleção: alterar o produto depois não mexe em propostas já existentes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProposalItem {
    pub product_id: Uuid,
    #[schema(example = "Bolo de pote 250ml")]
    pub product_name: String,
    #[schema(example = 2)]
    pub quantity: u32,
    #[schema(example = "25.00")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: Uuid,
    pub lead_id: Uuid,
    pub items: Vec<ProposalItem>,
    // Percentual de 0 a 100 aplicado sobre o subtotal
    #[schema(example = "10.0")]
    pub discount: Decimal,
    pub shipping: Decimal,
    pub shipping_method: ShippingMethod,
    pub status: ProposalStatus,
    // Sempre derivado de itens + desconto + frete; nunca editado direto
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Seleção de item vinda do formulário: só o produto e a quantidade. O
// restante (nome, preço) é resolvido contra o catálogo naquele momento.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProposalItemInput {
    pub product_id: Uuid,
    #[validate(range(min = 1, message = "invalid_number"))]
    #[schema(example = 2)]
    pub quantity: u32,
}

// Parciais do cálculo, devolvidos junto para o formulário exibir
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProposalTotals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
}
