// src/handlers/settings.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::{field_error, AppError},
    config::AppState,
    models::settings::{FunnelSettings, ShippingSettings, ShippingTier},
};

// =============================================================================
//  ÁREA 1: FRETE
// =============================================================================

// GET /api/settings/shipping
#[utoipa::path(
    get,
    path = "/api/settings/shipping",
    tag = "Configurações",
    responses(
        (status = 200, description = "Configuração de frete vigente", body = ShippingSettings)
    )
)]
pub async fn get_shipping_settings(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let settings = app_state.settings_repo.get_shipping().await;
    Ok((StatusCode::OK, Json(settings)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveShippingSettingsPayload {
    #[validate(length(equal = 8, message = "invalid_cep"))]
    #[schema(example = "01310100")]
    pub origin_zip: Option<String>,

    // A ordem das faixas é significativa: a resolução pega a primeira que
    // contiver a distância.
    #[serde(default)]
    pub tiers: Vec<ShippingTier>,
}

// PUT /api/settings/shipping
#[utoipa::path(
    put,
    path = "/api/settings/shipping",
    tag = "Configurações",
    request_body = SaveShippingSettingsPayload,
    responses(
        (status = 200, description = "Configuração de frete salva", body = ShippingSettings),
        (status = 400, description = "Faixa com intervalo ou custo inválido")
    )
)]
pub async fn save_shipping_settings(
    State(app_state): State<AppState>,
    Json(payload): Json<SaveShippingSettingsPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    validate_tiers(&payload.tiers)?;

    let settings = app_state
        .settings_repo
        .save_shipping(ShippingSettings {
            origin_zip: payload.origin_zip,
            tiers: payload.tiers,
        })
        .await;

    Ok((StatusCode::OK, Json(settings)))
}

fn validate_tiers(tiers: &[ShippingTier]) -> Result<(), AppError> {
    for tier in tiers {
        if tier.min_distance < Decimal::ZERO || tier.max_distance < tier.min_distance {
            return Err(field_error("tiers", "invalid_range"));
        }
        if tier.cost < Decimal::ZERO {
            return Err(field_error("tiers", "invalid_number"));
        }
    }
    Ok(())
}

// =============================================================================
//  ÁREA 2: FUNIL
// =============================================================================

// GET /api/settings/funnel
#[utoipa::path(
    get,
    path = "/api/settings/funnel",
    tag = "Configurações",
    responses(
        (status = 200, description = "Configuração do funil vigente", body = FunnelSettings)
    )
)]
pub async fn get_funnel_settings(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let settings = app_state.settings_repo.get_funnel().await;
    Ok((StatusCode::OK, Json(settings)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveFunnelSettingsPayload {
    #[validate(range(min = 1, message = "invalid_number"))]
    #[schema(example = 30)]
    pub reactivation_period_days: i64,
}

// PUT /api/settings/funnel
// A checagem de reativação é derivada: salvar um novo período muda o
// resultado das próximas consultas, sem tocar nos leads.
#[utoipa::path(
    put,
    path = "/api/settings/funnel",
    tag = "Configurações",
    request_body = SaveFunnelSettingsPayload,
    responses(
        (status = 200, description = "Configuração do funil salva", body = FunnelSettings),
        (status = 400, description = "Período inválido")
    )
)]
pub async fn save_funnel_settings(
    State(app_state): State<AppState>,
    Json(payload): Json<SaveFunnelSettingsPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let settings = app_state
        .settings_repo
        .save_funnel(FunnelSettings {
            reactivation_period_days: payload.reactivation_period_days,
        })
        .await;

    Ok((StatusCode::OK, Json(settings)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn tier_with_inverted_range_is_rejected() {
        let tiers = [ShippingTier {
            min_distance: dec(10),
            max_distance: dec(5),
            cost: dec(20),
        }];
        assert!(validate_tiers(&tiers).is_err());
    }

    #[test]
    fn single_point_range_is_valid() {
        let tiers = [ShippingTier {
            min_distance: dec(10),
            max_distance: dec(10),
            cost: dec(20),
        }];
        assert!(validate_tiers(&tiers).is_ok());
    }
}
