// src/models/settings.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Frete ---

// Faixa de distância com custo fixo. As faixas podem se sobrepor: a
// resolução varre na ordem configurada e fica com a PRIMEIRA que contém a
// distância (ambas as pontas inclusivas).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingTier {
    #[schema(example = "0")]
    pub min_distance: Decimal,
    #[schema(example = "10")]
    pub max_distance: Decimal,
    #[schema(example = "15.00")]
    pub cost: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingSettings {
    #[schema(example = "01310100")]
    pub origin_zip: Option<String>,
    #[serde(default)]
    pub tiers: Vec<ShippingTier>,
}

// Métodos de entrega oferecidos na proposta. "Entrega" usa a faixa
// calculada; os outros dois são sentinelas fixos de custo zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Entrega,
    Retirada,
    ACombinar,
}

impl ShippingMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Entrega => "Entrega",
            Self::Retirada => "Retirada no local",
            Self::ACombinar => "Frete a combinar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub method: ShippingMethod,
    pub label: String,
    pub cost: Decimal,
}

// --- Funil ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunnelSettings {
    // Dias parado em "Criar Pedido" até o lead aparecer para reativação
    #[schema(example = 30)]
    pub reactivation_period_days: i64,
}

impl Default for FunnelSettings {
    fn default() -> Self {
        Self {
            reactivation_period_days: 30,
        }
    }
}
