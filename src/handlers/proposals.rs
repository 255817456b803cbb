// src/handlers/proposals.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::proposal::{Proposal, ProposalItemInput},
    models::settings::ShippingMethod,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposalPayload {
    pub lead_id: Uuid,

    #[validate(length(min = 1, message = "required"), nested)]
    pub items: Vec<ProposalItemInput>,

    // Percentual de 0 a 100
    #[serde(default)]
    #[schema(example = "10.0")]
    pub discount: Decimal,

    pub shipping_method: ShippingMethod,
}

// POST /api/proposals
#[utoipa::path(
    post,
    path = "/api/proposals",
    tag = "Propostas",
    request_body = CreateProposalPayload,
    responses(
        (status = 201, description = "Proposta criada como rascunho, total já calculado", body = Proposal),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Lead ou produto não encontrado"),
        (status = 422, description = "Proposta sem itens")
    )
)]
pub async fn create_proposal(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProposalPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let proposal = app_state
        .proposal_service
        .create_proposal(
            payload.lead_id,
            &payload.items,
            payload.discount,
            payload.shipping_method,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(proposal)))
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LeadQuery {
    pub lead_id: Uuid,
}

// GET /api/proposals?leadId={uuid}
#[utoipa::path(
    get,
    path = "/api/proposals",
    tag = "Propostas",
    params(LeadQuery),
    responses(
        (status = 200, description = "Histórico de propostas do lead, da mais antiga para a mais recente", body = Vec<Proposal>),
        (status = 404, description = "Lead não encontrado")
    )
)]
pub async fn list_by_lead(
    State(app_state): State<AppState>,
    Query(query): Query<LeadQuery>,
) -> Result<impl IntoResponse, AppError> {
    let proposals = app_state.proposal_service.list_by_lead(query.lead_id).await?;
    Ok((StatusCode::OK, Json(proposals)))
}

// GET /api/proposals/{id}
#[utoipa::path(
    get,
    path = "/api/proposals/{id}",
    tag = "Propostas",
    params(("id" = Uuid, Path, description = "ID da proposta")),
    responses(
        (status = 200, description = "Proposta encontrada", body = Proposal),
        (status = 404, description = "Proposta não encontrada")
    )
)]
pub async fn get_proposal(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let proposal = app_state.proposal_service.get_proposal(id).await?;
    Ok((StatusCode::OK, Json(proposal)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProposalPayload {
    #[validate(length(min = 1, message = "required"), nested)]
    pub items: Vec<ProposalItemInput>,

    #[serde(default)]
    pub discount: Decimal,

    pub shipping_method: ShippingMethod,
}

// PUT /api/proposals/{id}
// Só a proposta mais recente do lead aceita alteração; o total volta
// sempre recalculado.
#[utoipa::path(
    put,
    path = "/api/proposals/{id}",
    tag = "Propostas",
    params(("id" = Uuid, Path, description = "ID da proposta")),
    request_body = UpdateProposalPayload,
    responses(
        (status = 200, description = "Proposta recalculada", body = Proposal),
        (status = 404, description = "Proposta não encontrada"),
        (status = 409, description = "Não é a proposta mais recente do lead")
    )
)]
pub async fn update_proposal(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProposalPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let proposal = app_state
        .proposal_service
        .update_proposal(id, &payload.items, payload.discount, payload.shipping_method)
        .await?;

    Ok((StatusCode::OK, Json(proposal)))
}

// POST /api/proposals/{id}/send
#[utoipa::path(
    post,
    path = "/api/proposals/{id}/send",
    tag = "Propostas",
    params(("id" = Uuid, Path, description = "ID da proposta")),
    responses(
        (status = 200, description = "Proposta marcada como enviada", body = Proposal),
        (status = 404, description = "Proposta não encontrada"),
        (status = 409, description = "Não é a proposta mais recente do lead")
    )
)]
pub async fn send_proposal(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let proposal = app_state.proposal_service.mark_sent(id).await?;
    Ok((StatusCode::OK, Json(proposal)))
}
