// src/db/proposal_repo.rs

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{common::error::AppError, models::proposal::Proposal};

#[derive(Clone, Default)]
pub struct ProposalRepository {
    proposals: Arc<RwLock<HashMap<Uuid, Proposal>>>,
}

impl ProposalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, proposal: Proposal) -> Proposal {
        let mut proposals = self.proposals.write().await;
        proposals.insert(proposal.id, proposal.clone());
        proposal
    }

    pub async fn get(&self, id: Uuid) -> Result<Proposal, AppError> {
        let proposals = self.proposals.read().await;
        proposals.get(&id).cloned().ok_or(AppError::ProposalNotFound)
    }

    pub async fn update(&self, proposal: Proposal) -> Result<Proposal, AppError> {
        let mut proposals = self.proposals.write().await;
        if !proposals.contains_key(&proposal.id) {
            return Err(AppError::ProposalNotFound);
        }
        proposals.insert(proposal.id, proposal.clone());
        Ok(proposal)
    }

    // Histórico do lead, da mais antiga para a mais recente
    pub async fn list_by_lead(&self, lead_id: Uuid) -> Vec<Proposal> {
        let proposals = self.proposals.read().await;
        let mut of_lead: Vec<Proposal> = proposals
            .values()
            .filter(|p| p.lead_id == lead_id)
            .cloned()
            .collect();
        of_lead.sort_by_key(|p| p.created_at);
        of_lead
    }

    // A única proposta acionável de um lead é a mais recente
    pub async fn latest_for_lead(&self, lead_id: Uuid) -> Option<Proposal> {
        self.list_by_lead(lead_id).await.into_iter().next_back()
    }
}
