// src/services/order_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{OrdersRepository, ProposalRepository},
    models::orders::{OrderItem, OrderStatus, PaymentStatus, SalesOrder},
    services::funnel_service::FunnelService,
};

#[derive(Clone)]
pub struct OrderService {
    repo: OrdersRepository,
    proposal_repo: ProposalRepository,
    funnel_service: FunnelService,
}

impl OrderService {
    pub fn new(
        repo: OrdersRepository,
        proposal_repo: ProposalRepository,
        funnel_service: FunnelService,
    ) -> Self {
        Self {
            repo,
            proposal_repo,
            funnel_service,
        }
    }

    // Fecha o ciclo do funil: materializa a proposta mais recente do lead
    // em um pedido. Só DEPOIS do pedido existir o lead é marcado como
    // aprovado ("Criar Pedido") — a transição no quadro apenas sinalizou o
    // fluxo, nunca mudou o status.
    pub async fn create_from_lead(&self, lead_id: Uuid) -> Result<SalesOrder, AppError> {
        // Confere que o lead existe antes de qualquer coisa
        self.funnel_service.get_lead(lead_id).await?;

        if self.repo.find_by_lead(lead_id).await.is_some() {
            return Err(AppError::OrderAlreadyExists);
        }

        let proposal = self
            .proposal_repo
            .latest_for_lead(lead_id)
            .await
            .ok_or(AppError::ProposalNotFound)?;

        let items: Vec<OrderItem> = proposal
            .items
            .iter()
            .map(|item| OrderItem {
                product_id: item.product_id,
                product_name: item.product_name.clone(),
                price: item.price,
                quantity: item.quantity,
            })
            .collect();

        let now = Utc::now();
        let order = SalesOrder {
            id: Uuid::new_v4(),
            lead_id,
            items,
            total: proposal.total,
            status: OrderStatus::Pendente,
            payment_status: PaymentStatus::Pendente,
            created_at: now,
            updated_at: now,
        };
        let order = self.repo.insert(order).await;

        // Atualização explícita do funil, agora que o pedido existe
        self.funnel_service.mark_approved(lead_id).await?;

        Ok(order)
    }

    pub async fn list_orders(&self) -> Vec<SalesOrder> {
        self.repo.list().await
    }

    pub async fn get_order(&self, id: Uuid) -> Result<SalesOrder, AppError> {
        self.repo.get(id).await
    }

    // Depois de criado, só status e situação de pagamento mudam
    pub async fn update_status(
        &self,
        id: Uuid,
        status: Option<OrderStatus>,
        payment_status: Option<PaymentStatus>,
    ) -> Result<SalesOrder, AppError> {
        let mut order = self.repo.get(id).await?;
        if let Some(status) = status {
            order.status = status;
        }
        if let Some(payment_status) = payment_status {
            order.payment_status = payment_status;
        }
        order.updated_at = Utc::now();
        self.repo.update(order).await
    }
}
