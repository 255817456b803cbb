// src/db/catalog_repo.rs

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{common::error::AppError, models::catalog::Product};

#[derive(Clone, Default)]
pub struct CatalogRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, product: Product) -> Product {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        product
    }

    pub async fn list(&self) -> Vec<Product> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by_key(|p| p.created_at);
        all
    }

    pub async fn get(&self, id: Uuid) -> Result<Product, AppError> {
        let products = self.products.read().await;
        products.get(&id).cloned().ok_or(AppError::ProductNotFound)
    }

    pub async fn update(&self, product: Product) -> Result<Product, AppError> {
        let mut products = self.products.write().await;
        if !products.contains_key(&product.id) {
            return Err(AppError::ProductNotFound);
        }
        products.insert(product.id, product.clone());
        Ok(product)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut products = self.products.write().await;
        products
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::ProductNotFound)
    }
}
