// src/db/funnel_repo.rs

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{common::error::AppError, models::funnel::Lead};

// Guarda dos leads em memória. A persistência durável é do aplicativo
// hospedeiro; aqui o contrato é ler/substituir o agregado inteiro, de modo
// que cada atualização do handler seja atômica.
#[derive(Clone, Default)]
pub struct FunnelRepository {
    leads: Arc<RwLock<HashMap<Uuid, Lead>>>,
}

impl FunnelRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, lead: Lead) -> Lead {
        let mut leads = self.leads.write().await;
        leads.insert(lead.id, lead.clone());
        lead
    }

    pub async fn list(&self) -> Vec<Lead> {
        let leads = self.leads.read().await;
        let mut all: Vec<Lead> = leads.values().cloned().collect();
        all.sort_by_key(|l| l.created_at);
        all
    }

    pub async fn get(&self, id: Uuid) -> Result<Lead, AppError> {
        let leads = self.leads.read().await;
        leads.get(&id).cloned().ok_or(AppError::LeadNotFound)
    }

    // Substitui o agregado inteiro; falha se o lead sumiu no meio do caminho.
    pub async fn update(&self, lead: Lead) -> Result<Lead, AppError> {
        let mut leads = self.leads.write().await;
        if !leads.contains_key(&lead.id) {
            return Err(AppError::LeadNotFound);
        }
        leads.insert(lead.id, lead.clone());
        Ok(lead)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut leads = self.leads.write().await;
        leads.remove(&id).map(|_| ()).ok_or(AppError::LeadNotFound)
    }
}
