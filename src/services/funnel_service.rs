// src/services/funnel_service.rs

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{FunnelRepository, SettingsRepository},
    models::funnel::{Lead, LeadStatus, TransitionOutcome},
    models::settings::FunnelSettings,
};

// --- Máquina de estados do funil (núcleo puro) ---
//
// Decide uma transição sem tocar em nada: recebe o lead atual e devolve o
// resultado que o chamador aplica (ou não). Regras:
//   - Entrar em "Proposta" vindo de outra etapa exige as observações da
//     proposta junto do pedido de transição; sem elas nada muda.
//   - Entrar em "Criar Pedido" nunca muda o status aqui: dispara o fluxo
//     de criação de pedido, e a aprovação é gravada depois, em separado,
//     quando o pedido existir (`mark_approved`).
//   - Qualquer outro par (etapa, destino) é um arrasto livre, inclusive
//     para "Reprovado".
pub fn transition(
    lead: &Lead,
    target: LeadStatus,
    notes: Option<&str>,
    now: DateTime<Utc>,
) -> TransitionOutcome {
    // Soltar o card na própria coluna: nada a fazer
    if lead.status == target {
        return TransitionOutcome::Applied { lead: lead.clone() };
    }

    match target {
        LeadStatus::CriarPedido => TransitionOutcome::OpenOrderFlow { lead_id: lead.id },
        LeadStatus::Proposta => match notes.map(str::trim).filter(|n| !n.is_empty()) {
            Some(notes) => {
                let mut updated = lead.clone();
                updated.status = LeadStatus::Proposta;
                updated.proposal_notes = Some(notes.to_string());
                updated.updated_at = now;
                TransitionOutcome::Applied { lead: updated }
            }
            None => TransitionOutcome::NotesRequired { lead_id: lead.id },
        },
        _ => {
            let mut updated = lead.clone();
            updated.status = target;
            updated.updated_at = now;
            TransitionOutcome::Applied { lead: updated }
        }
    }
}

// Condição derivada, nunca armazenada: lead parado em "Criar Pedido" há
// mais de `reactivationPeriodDays` desde a última aprovação. Recalculada a
// cada consulta porque depende do relógio e da configuração vigente.
pub fn needs_reactivation(lead: &Lead, now: DateTime<Utc>, settings: &FunnelSettings) -> bool {
    if lead.status != LeadStatus::CriarPedido {
        return false;
    }
    match lead.approved_at {
        Some(approved_at) => {
            now.signed_duration_since(approved_at)
                > Duration::days(settings.reactivation_period_days)
        }
        None => false,
    }
}

// --- Serviço ---

#[derive(Clone)]
pub struct FunnelService {
    repo: FunnelRepository,
    settings_repo: SettingsRepository,
}

impl FunnelService {
    pub fn new(repo: FunnelRepository, settings_repo: SettingsRepository) -> Self {
        Self {
            repo,
            settings_repo,
        }
    }

    pub async fn create_lead(
        &self,
        company_name: &str,
        contact_name: Option<&str>,
        value: Decimal,
        distance: Option<Decimal>,
        cep: Option<&str>,
        street: Option<&str>,
        number: Option<&str>,
        neighborhood: Option<&str>,
        city: Option<&str>,
        state: Option<&str>,
    ) -> Result<Lead, AppError> {
        let now = Utc::now();
        let lead = Lead {
            id: Uuid::new_v4(),
            company_name: company_name.to_string(),
            contact_name: contact_name.map(str::to_string),
            value,
            status: LeadStatus::ListaDeLeads,
            distance,
            proposal_notes: None,
            cep: cep.map(str::to_string),
            street: street.map(str::to_string),
            number: number.map(str::to_string),
            neighborhood: neighborhood.map(str::to_string),
            city: city.map(str::to_string),
            state: state.map(str::to_string),
            approved_at: None,
            created_at: now,
            updated_at: now,
        };
        Ok(self.repo.insert(lead).await)
    }

    pub async fn list_leads(&self) -> Vec<Lead> {
        self.repo.list().await
    }

    pub async fn get_lead(&self, id: Uuid) -> Result<Lead, AppError> {
        self.repo.get(id).await
    }

    // Edição de cadastro: status e aprovação só mudam pelas transições.
    pub async fn update_lead(
        &self,
        id: Uuid,
        company_name: &str,
        contact_name: Option<&str>,
        value: Decimal,
        distance: Option<Decimal>,
        proposal_notes: Option<&str>,
        cep: Option<&str>,
        street: Option<&str>,
        number: Option<&str>,
        neighborhood: Option<&str>,
        city: Option<&str>,
        state: Option<&str>,
    ) -> Result<Lead, AppError> {
        let mut lead = self.repo.get(id).await?;
        lead.company_name = company_name.to_string();
        lead.contact_name = contact_name.map(str::to_string);
        lead.value = value;
        lead.distance = distance;
        lead.proposal_notes = proposal_notes.map(str::to_string);
        lead.cep = cep.map(str::to_string);
        lead.street = street.map(str::to_string);
        lead.number = number.map(str::to_string);
        lead.neighborhood = neighborhood.map(str::to_string);
        lead.city = city.map(str::to_string);
        lead.state = state.map(str::to_string);
        lead.updated_at = Utc::now();
        self.repo.update(lead).await
    }

    pub async fn delete_lead(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    // Aplica uma transição pedida pelo quadro. O resultado da máquina de
    // estados é gravado em uma única atualização ou em nenhuma: não existe
    // estado intermediário com status trocado e efeito pendente.
    pub async fn request_transition(
        &self,
        id: Uuid,
        target: LeadStatus,
        notes: Option<&str>,
    ) -> Result<TransitionOutcome, AppError> {
        let lead = self.repo.get(id).await?;
        let outcome = transition(&lead, target, notes, Utc::now());

        if let TransitionOutcome::Applied { lead } = &outcome {
            self.repo.update(lead.clone()).await?;
        }
        Ok(outcome)
    }

    // Atualização explícita e separada, chamada quando o pedido do lead já
    // existe: só então a etapa vira "Criar Pedido".
    pub async fn mark_approved(&self, id: Uuid) -> Result<Lead, AppError> {
        let mut lead = self.repo.get(id).await?;
        let now = Utc::now();
        lead.status = LeadStatus::CriarPedido;
        lead.approved_at = Some(now);
        lead.updated_at = now;
        self.repo.update(lead).await
    }

    // Leads aprovados há mais tempo que o período configurado
    pub async fn reactivation_list(&self) -> Vec<Lead> {
        let settings = self.settings_repo.get_funnel().await;
        let now = Utc::now();
        self.repo
            .list()
            .await
            .into_iter()
            .filter(|lead| needs_reactivation(lead, now, &settings))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_in(status: LeadStatus) -> Lead {
        let now = Utc::now();
        Lead {
            id: Uuid::new_v4(),
            company_name: "Padaria Dois Irmãos".to_string(),
            contact_name: Some("Seu José".to_string()),
            value: Decimal::from(1500),
            status,
            distance: Some(Decimal::from(7)),
            proposal_notes: None,
            cep: None,
            street: None,
            number: None,
            neighborhood: None,
            city: None,
            state: None,
            approved_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn free_drag_between_ordinary_stages() {
        let lead = lead_in(LeadStatus::ListaDeLeads);
        let outcome = transition(&lead, LeadStatus::Contato, None, Utc::now());
        match outcome {
            TransitionOutcome::Applied { lead } => assert_eq!(lead.status, LeadStatus::Contato),
            other => panic!("esperava Applied, veio {:?}", other),
        }
    }

    #[test]
    fn entering_proposta_without_notes_keeps_prior_status() {
        let lead = lead_in(LeadStatus::Contato);
        let outcome = transition(&lead, LeadStatus::Proposta, None, Utc::now());
        assert!(matches!(outcome, TransitionOutcome::NotesRequired { .. }));

        // Observações em branco também não servem
        let outcome = transition(&lead, LeadStatus::Proposta, Some("   "), Utc::now());
        assert!(matches!(outcome, TransitionOutcome::NotesRequired { .. }));
    }

    #[test]
    fn entering_proposta_with_notes_commits_both() {
        let lead = lead_in(LeadStatus::Contato);
        let outcome = transition(
            &lead,
            LeadStatus::Proposta,
            Some("Entrega quinzenal, 200 unidades"),
            Utc::now(),
        );
        match outcome {
            TransitionOutcome::Applied { lead } => {
                assert_eq!(lead.status, LeadStatus::Proposta);
                assert_eq!(
                    lead.proposal_notes.as_deref(),
                    Some("Entrega quinzenal, 200 unidades")
                );
            }
            other => panic!("esperava Applied, veio {:?}", other),
        }
    }

    #[test]
    fn entering_criar_pedido_only_signals_order_flow() {
        let lead = lead_in(LeadStatus::Negociacao);
        let outcome = transition(&lead, LeadStatus::CriarPedido, None, Utc::now());
        assert!(matches!(outcome, TransitionOutcome::OpenOrderFlow { .. }));
    }

    #[test]
    fn dropping_on_own_column_is_a_noop() {
        let lead = lead_in(LeadStatus::Proposta);
        let outcome = transition(&lead, LeadStatus::Proposta, None, Utc::now());
        match outcome {
            TransitionOutcome::Applied { lead: updated } => {
                assert_eq!(updated.status, LeadStatus::Proposta);
                assert_eq!(updated.proposal_notes, lead.proposal_notes);
            }
            other => panic!("esperava Applied, veio {:?}", other),
        }
    }

    #[test]
    fn reprovado_accepts_any_lead() {
        let lead = lead_in(LeadStatus::Negociacao);
        let outcome = transition(&lead, LeadStatus::Reprovado, None, Utc::now());
        match outcome {
            TransitionOutcome::Applied { lead } => assert_eq!(lead.status, LeadStatus::Reprovado),
            other => panic!("esperava Applied, veio {:?}", other),
        }
    }

    #[test]
    fn reactivation_requires_elapsed_period() {
        let settings = FunnelSettings {
            reactivation_period_days: 30,
        };
        let now = Utc::now();

        let mut lead = lead_in(LeadStatus::CriarPedido);
        lead.approved_at = Some(now - Duration::days(31));
        assert!(needs_reactivation(&lead, now, &settings));

        // Exatamente no limite ainda não venceu ("mais de" N dias)
        lead.approved_at = Some(now - Duration::days(30));
        assert!(!needs_reactivation(&lead, now, &settings));

        // Mudar a configuração muda o resultado sem mudar o lead
        let shorter = FunnelSettings {
            reactivation_period_days: 7,
        };
        assert!(needs_reactivation(&lead, now, &shorter));
    }

    #[test]
    fn reactivation_ignores_other_stages() {
        let settings = FunnelSettings::default();
        let now = Utc::now();
        let mut lead = lead_in(LeadStatus::Negociacao);
        lead.approved_at = Some(now - Duration::days(90));
        assert!(!needs_reactivation(&lead, now, &settings));
    }

    #[tokio::test]
    async fn request_transition_persists_only_applied_outcomes() {
        let repo = FunnelRepository::new();
        let service = FunnelService::new(repo.clone(), SettingsRepository::default());
        let lead = service
            .create_lead("Mercearia Central", None, Decimal::from(800), None, None, None, None, None, None, None)
            .await
            .expect("create ok");

        // Sem observações: nada foi gravado
        let outcome = service
            .request_transition(lead.id, LeadStatus::Proposta, None)
            .await
            .expect("transition ok");
        assert!(matches!(outcome, TransitionOutcome::NotesRequired { .. }));
        let stored = repo.get(lead.id).await.expect("lead exists");
        assert_eq!(stored.status, LeadStatus::ListaDeLeads);

        // Com observações: status e notas gravados juntos
        service
            .request_transition(lead.id, LeadStatus::Proposta, Some("Proposta padrão"))
            .await
            .expect("transition ok");
        let stored = repo.get(lead.id).await.expect("lead exists");
        assert_eq!(stored.status, LeadStatus::Proposta);
        assert_eq!(stored.proposal_notes.as_deref(), Some("Proposta padrão"));
    }

    #[tokio::test]
    async fn mark_approved_stamps_approval_time() {
        let service = FunnelService::new(FunnelRepository::new(), SettingsRepository::default());
        let lead = service
            .create_lead("Mercearia Central", None, Decimal::from(800), None, None, None, None, None, None, None)
            .await
            .expect("create ok");

        let approved = service.mark_approved(lead.id).await.expect("approve ok");
        assert_eq!(approved.status, LeadStatus::CriarPedido);
        assert!(approved.approved_at.is_some());
    }
}
