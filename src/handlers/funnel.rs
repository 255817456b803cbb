// src/handlers/funnel.rs

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
    models::funnel::{Lead, LeadStatus, TransitionOutcome},
    models::settings::ShippingOption,
    services::shipping_service,
};

// =============================================================================
//  ÁREA 1: CADASTRO DE LEADS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Padaria Dois Irmãos")]
    pub company_name: String,

    #[schema(example = "Seu José")]
    pub contact_name: Option<String>,

    // Valor estimado do negócio
    #[serde(default)]
    #[schema(example = "1500.00")]
    pub value: Decimal,

    // Distância em km até o lead, usada no cálculo de frete
    pub distance: Option<Decimal>,

    #[validate(length(equal = 8, message = "invalid_cep"))]
    #[schema(example = "01310100")]
    pub cep: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

// POST /api/funnel/leads
#[utoipa::path(
    post,
    path = "/api/funnel/leads",
    tag = "Funil",
    request_body = CreateLeadPayload,
    responses(
        (status = 201, description = "Lead criado na primeira etapa do funil", body = Lead),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_lead(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateLeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let lead = app_state
        .funnel_service
        .create_lead(
            &payload.company_name,
            payload.contact_name.as_deref(),
            payload.value,
            payload.distance,
            payload.cep.as_deref(),
            payload.street.as_deref(),
            payload.number.as_deref(),
            payload.neighborhood.as_deref(),
            payload.city.as_deref(),
            payload.state.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(lead)))
}

// GET /api/funnel/leads
#[utoipa::path(
    get,
    path = "/api/funnel/leads",
    tag = "Funil",
    responses(
        (status = 200, description = "Todos os leads, em ordem de criação", body = Vec<Lead>)
    )
)]
pub async fn list_leads(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let leads = app_state.funnel_service.list_leads().await;
    Ok((StatusCode::OK, Json(leads)))
}

// GET /api/funnel/leads/{id}
#[utoipa::path(
    get,
    path = "/api/funnel/leads/{id}",
    tag = "Funil",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Lead encontrado", body = Lead),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn get_lead(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.funnel_service.get_lead(id).await?;
    Ok((StatusCode::OK, Json(lead)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeadPayload {
    #[validate(length(min = 1, message = "required"))]
    pub company_name: String,
    pub contact_name: Option<String>,
    #[serde(default)]
    pub value: Decimal,
    pub distance: Option<Decimal>,
    pub proposal_notes: Option<String>,
    #[validate(length(equal = 8, message = "invalid_cep"))]
    pub cep: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

// PUT /api/funnel/leads/{id}
// Edição de cadastro; o status só muda via transição.
#[utoipa::path(
    put,
    path = "/api/funnel/leads/{id}",
    tag = "Funil",
    params(("id" = Uuid, Path, description = "ID do lead")),
    request_body = UpdateLeadPayload,
    responses(
        (status = 200, description = "Lead atualizado", body = Lead),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn update_lead(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLeadPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let lead = app_state
        .funnel_service
        .update_lead(
            id,
            &payload.company_name,
            payload.contact_name.as_deref(),
            payload.value,
            payload.distance,
            payload.proposal_notes.as_deref(),
            payload.cep.as_deref(),
            payload.street.as_deref(),
            payload.number.as_deref(),
            payload.neighborhood.as_deref(),
            payload.city.as_deref(),
            payload.state.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(lead)))
}

// DELETE /api/funnel/leads/{id}
#[utoipa::path(
    delete,
    path = "/api/funnel/leads/{id}",
    tag = "Funil",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 204, description = "Lead removido"),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn delete_lead(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.funnel_service.delete_lead(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 2: QUADRO (TRANSIÇÕES E REATIVAÇÃO)
// =============================================================================

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionPayload {
    pub target: LeadStatus,
    // Exigidas ao entrar em "Proposta" vindo de outra etapa
    pub proposal_notes: Option<String>,
}

// POST /api/funnel/leads/{id}/transition
// O arrasto do card vira esta mensagem; a resposta diz o que aconteceu
// (aplicada, faltam observações, ou abrir o fluxo de pedido).
#[utoipa::path(
    post,
    path = "/api/funnel/leads/{id}/transition",
    tag = "Funil",
    params(("id" = Uuid, Path, description = "ID do lead")),
    request_body = TransitionPayload,
    responses(
        (status = 200, description = "Resultado da transição", body = TransitionOutcome),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn request_transition(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransitionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = app_state
        .funnel_service
        .request_transition(id, payload.target, payload.proposal_notes.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(outcome)))
}

// GET /api/funnel/reactivation
#[utoipa::path(
    get,
    path = "/api/funnel/reactivation",
    tag = "Funil",
    responses(
        (status = 200, description = "Leads aprovados há mais tempo que o período configurado", body = Vec<Lead>)
    )
)]
pub async fn reactivation_list(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let leads = app_state.funnel_service.reactivation_list().await;
    Ok((StatusCode::OK, Json(leads)))
}

// GET /api/funnel/leads/{id}/shipping-options
// Opções de entrega para a proposta deste lead: a calculada (quando a
// distância cai em alguma faixa) e as fixas de custo zero.
#[utoipa::path(
    get,
    path = "/api/funnel/leads/{id}/shipping-options",
    tag = "Funil",
    params(("id" = Uuid, Path, description = "ID do lead")),
    responses(
        (status = 200, description = "Opções de entrega disponíveis", body = Vec<ShippingOption>),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn shipping_options(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let lead = app_state.funnel_service.get_lead(id).await?;
    let settings = app_state.settings_repo.get_shipping().await;
    let options = shipping_service::shipping_options(lead.distance, &settings);
    Ok((StatusCode::OK, Json(options)))
}
