// src/models/funnel.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Etapas do Funil ---
// A ordem das variantes é a ordem das colunas no quadro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum LeadStatus {
    #[serde(rename = "Lista de Leads")]
    ListaDeLeads,
    #[serde(rename = "Contato")]
    Contato,
    #[serde(rename = "Proposta")]
    Proposta,
    #[serde(rename = "Negociação")]
    Negociacao,
    // Etapa "ganho": o lead aprovado que vira pedido
    #[serde(rename = "Criar Pedido")]
    CriarPedido,
    #[serde(rename = "Reprovado")]
    Reprovado,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    #[schema(example = "Padaria Dois Irmãos")]
    pub company_name: String,
    #[schema(example = "Seu José")]
    pub contact_name: Option<String>,
    #[schema(example = "1500.00")]
    pub value: Decimal,
    pub status: LeadStatus,
    // Distância em km até o endereço do lead; alimenta o cálculo de frete
    pub distance: Option<Decimal>,
    pub proposal_notes: Option<String>,

    // Endereço (preenchido opcionalmente via consulta de CEP)
    #[schema(example = "01310100")]
    pub cep: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,

    // Carimbado quando o lead entra em "Criar Pedido"; base da reativação
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Resultado de uma transição ---
// A máquina de estados nunca grava nada sozinha: ela devolve o que o
// chamador deve fazer. `Applied` traz o lead já atualizado; os outros
// dois casos deixam o lead exatamente como estava.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TransitionOutcome {
    /// Transição aplicada; o lead retornado é o novo estado.
    Applied { lead: Lead },
    /// Entrada em "Proposta" exige as observações da proposta antes de mover.
    NotesRequired { lead_id: Uuid },
    /// Entrada em "Criar Pedido" dispara o fluxo de criação de pedido;
    /// o status só muda depois, quando o pedido existir.
    OpenOrderFlow { lead_id: Uuid },
}
