// src/models/catalog.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Produto do catálogo ---
// Carrega o preço praticado e a planilha de custos usada pela precificação.
// Percentuais (fees, taxes, profitMargin) são números de 0 a 100.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    #[schema(example = "Bolo de pote 250ml")]
    pub name: String,
    // Preço de venda definido pelo operador (pode divergir do sugerido)
    #[schema(example = "25.00")]
    pub price: Decimal,
    pub raw_material_cost: Decimal,
    pub labor_cost: Decimal,
    pub supplies_cost: Decimal,
    #[schema(example = "5.0")]
    pub fees: Decimal,
    #[schema(example = "3.0")]
    pub taxes: Decimal,
    #[schema(example = "20.0")]
    pub profit_margin: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Entrada da precificação ---
// Todos os campos assumem 0 quando ausentes: o formulário recalcula a cada
// tecla e começa vazio.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostingInput {
    #[serde(default)]
    pub raw_material_cost: Decimal,
    #[serde(default)]
    pub labor_cost: Decimal,
    #[serde(default)]
    pub supplies_cost: Decimal,
    #[serde(default)]
    pub fees: Decimal,
    #[serde(default)]
    pub taxes: Decimal,
    #[serde(default)]
    pub profit_margin: Decimal,
    // Preço praticado; usado só para apurar o lucro real
    #[serde(default)]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostingBreakdown {
    pub base_cost: Decimal,
    pub fees_value: Decimal,
    pub taxes_value: Decimal,
    pub total_cost: Decimal,
    pub suggested_price: Decimal,
    // Negativo quando o preço praticado não cobre o custo
    pub actual_profit: Decimal,
}

// --- Cálculo auxiliar de mão de obra ---
// Deriva o custo por minuto a partir do salário mensal e converte os
// minutos de produção em custo de mão de obra.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaborRateInput {
    #[serde(default)]
    pub monthly_salary: Decimal,
    #[serde(default)]
    pub monthly_fixed_costs: Decimal,
    #[serde(default)]
    pub weekly_hours: Decimal,
    #[serde(default)]
    pub production_minutes: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaborRateBreakdown {
    pub cost_per_minute: Decimal,
    pub labor_cost: Decimal,
}
