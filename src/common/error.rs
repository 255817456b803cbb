use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Lead não encontrado")]
    LeadNotFound,

    #[error("Produto não encontrado")]
    ProductNotFound,

    #[error("Proposta não encontrada")]
    ProposalNotFound,

    #[error("Pedido não encontrado")]
    OrderNotFound,

    // Guardas de transição/finalização: o agregado fica como estava
    #[error("Proposta sem itens")]
    EmptyProposal,

    #[error("Apenas a proposta mais recente pode ser alterada")]
    ProposalNotCurrent,

    // Cada lead ganho gera exatamente um pedido
    #[error("O lead já possui um pedido")]
    OrderAlreadyExists,

    #[error("CEP inválido")]
    InvalidCep,

    #[error("CEP não encontrado")]
    CepNotFound,

    // Falha de transporte na consulta de CEP; o chamador pode tentar de novo
    #[error("Falha na consulta de CEP: {0}")]
    AddressLookup(#[from] reqwest::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

// Helper para montar um erro de validação de um único campo sem passar
// pelo derive do `validator`.
pub fn field_error(field: &str, code: &'static str) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    let mut err = validator::ValidationError::new(code);
    err.message = Some(code.into());

    // Leak seguro para erro estático
    let static_field: &'static str = Box::leak(field.to_string().into_boxed_str());
    errors.add(static_field, err);

    AppError::ValidationError(errors)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::LeadNotFound => (StatusCode::NOT_FOUND, "Lead não encontrado."),
            AppError::ProductNotFound => (StatusCode::NOT_FOUND, "Produto não encontrado."),
            AppError::ProposalNotFound => (StatusCode::NOT_FOUND, "Proposta não encontrada."),
            AppError::OrderNotFound => (StatusCode::NOT_FOUND, "Pedido não encontrado."),
            AppError::EmptyProposal => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "A proposta precisa de ao menos um item.",
            ),
            AppError::ProposalNotCurrent => (
                StatusCode::CONFLICT,
                "Apenas a proposta mais recente do lead pode ser alterada.",
            ),
            AppError::OrderAlreadyExists => (
                StatusCode::CONFLICT,
                "Este lead já possui um pedido gerado.",
            ),
            AppError::InvalidCep => (
                StatusCode::BAD_REQUEST,
                "CEP inválido. Informe 8 dígitos numéricos.",
            ),
            AppError::CepNotFound => (StatusCode::NOT_FOUND, "CEP não encontrado."),
            AppError::AddressLookup(ref e) => {
                tracing::warn!("Falha na consulta de CEP: {}", e);
                (StatusCode::BAD_GATEWAY, "Serviço de CEP indisponível.")
            }

            // Todos os outros erros viram 500.
            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
