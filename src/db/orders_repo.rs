// src/db/orders_repo.rs

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{common::error::AppError, models::orders::SalesOrder};

#[derive(Clone, Default)]
pub struct OrdersRepository {
    orders: Arc<RwLock<HashMap<Uuid, SalesOrder>>>,
}

impl OrdersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, order: SalesOrder) -> SalesOrder {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order.clone());
        order
    }

    pub async fn list(&self) -> Vec<SalesOrder> {
        let orders = self.orders.read().await;
        let mut all: Vec<SalesOrder> = orders.values().cloned().collect();
        all.sort_by_key(|o| o.created_at);
        all
    }

    pub async fn get(&self, id: Uuid) -> Result<SalesOrder, AppError> {
        let orders = self.orders.read().await;
        orders.get(&id).cloned().ok_or(AppError::OrderNotFound)
    }

    pub async fn update(&self, order: SalesOrder) -> Result<SalesOrder, AppError> {
        let mut orders = self.orders.write().await;
        if !orders.contains_key(&order.id) {
            return Err(AppError::OrderNotFound);
        }
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    // Cada lead ganho produz exatamente um pedido
    pub async fn find_by_lead(&self, lead_id: Uuid) -> Option<SalesOrder> {
        let orders = self.orders.read().await;
        orders.values().find(|o| o.lead_id == lead_id).cloned()
    }
}
