// src/services/catalog_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::{field_error, AppError},
    db::CatalogRepository,
    models::catalog::Product,
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    pub async fn create_product(
        &self,
        name: &str,
        price: Decimal,
        raw_material_cost: Decimal,
        labor_cost: Decimal,
        supplies_cost: Decimal,
        fees: Decimal,
        taxes: Decimal,
        profit_margin: Decimal,
    ) -> Result<Product, AppError> {
        validate_money_fields(price, raw_material_cost, labor_cost, supplies_cost)?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            raw_material_cost,
            labor_cost,
            supplies_cost,
            fees,
            taxes,
            profit_margin,
            created_at: now,
            updated_at: now,
        };
        Ok(self.repo.insert(product).await)
    }

    pub async fn list_products(&self) -> Vec<Product> {
        self.repo.list().await
    }

    pub async fn get_product(&self, id: Uuid) -> Result<Product, AppError> {
        self.repo.get(id).await
    }

    // Propostas e pedidos existentes não são afetados: as linhas copiaram
    // nome e preço na seleção.
    pub async fn update_product(
        &self,
        id: Uuid,
        name: &str,
        price: Decimal,
        raw_material_cost: Decimal,
        labor_cost: Decimal,
        supplies_cost: Decimal,
        fees: Decimal,
        taxes: Decimal,
        profit_margin: Decimal,
    ) -> Result<Product, AppError> {
        validate_money_fields(price, raw_material_cost, labor_cost, supplies_cost)?;

        let mut product = self.repo.get(id).await?;
        product.name = name.to_string();
        product.price = price;
        product.raw_material_cost = raw_material_cost;
        product.labor_cost = labor_cost;
        product.supplies_cost = supplies_cost;
        product.fees = fees;
        product.taxes = taxes;
        product.profit_margin = profit_margin;
        product.updated_at = Utc::now();
        self.repo.update(product).await
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}

fn validate_money_fields(
    price: Decimal,
    raw_material_cost: Decimal,
    labor_cost: Decimal,
    supplies_cost: Decimal,
) -> Result<(), AppError> {
    if price < Decimal::ZERO {
        return Err(field_error("price", "invalid_number"));
    }
    if raw_material_cost < Decimal::ZERO {
        return Err(field_error("rawMaterialCost", "invalid_number"));
    }
    if labor_cost < Decimal::ZERO {
        return Err(field_error("laborCost", "invalid_number"));
    }
    if supplies_cost < Decimal::ZERO {
        return Err(field_error("suppliesCost", "invalid_number"));
    }
    Ok(())
}
