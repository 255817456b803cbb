// src/handlers/address.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{common::error::AppError, config::AppState, models::address::AddressInfo};

// GET /api/address/{cep}
// Consulta oportunista para pré-preencher o endereço do lead; falha aqui
// não bloqueia nenhum fluxo do funil.
#[utoipa::path(
    get,
    path = "/api/address/{cep}",
    tag = "Endereço",
    params(("cep" = String, Path, description = "CEP com 8 dígitos numéricos")),
    responses(
        (status = 200, description = "Endereço encontrado", body = AddressInfo),
        (status = 400, description = "CEP inválido"),
        (status = 404, description = "CEP não encontrado"),
        (status = 502, description = "Serviço de CEP indisponível")
    )
)]
pub async fn lookup_cep(
    State(app_state): State<AppState>,
    Path(cep): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let address = app_state.address_service.lookup(&cep).await?;
    Ok((StatusCode::OK, Json(address)))
}
