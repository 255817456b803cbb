// src/services/dashboard_service.rs

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    db::{CatalogRepository, OrdersRepository},
    models::catalog::Product,
    models::dashboard::{DashboardSummary, StatusRevenueEntry},
    models::orders::{OrderStatus, PaymentStatus, SalesOrder},
};

// --- Agregação (núcleo puro) ---
//
// Receita: pedidos entregues E pagos. A receber: entregues e ainda não
// pagos (pedidos não entregues ficam fora das duas somas). Lucro: para os
// entregues e pagos, custo do item = custos base do produto + fees/taxes
// aplicados sobre o PREÇO VENDIDO do item. A base dos percentuais aqui é
// diferente da precificação, que aplica sobre o custo base; os dois
// cálculos são mantidos como estão.
pub fn summarize(orders: &[SalesOrder], products: &[Product]) -> DashboardSummary {
    let by_id: HashMap<Uuid, &Product> = products.iter().map(|p| (p.id, p)).collect();

    let mut revenue = Decimal::ZERO;
    let mut receivable = Decimal::ZERO;
    let mut profit = Decimal::ZERO;

    for order in orders {
        if order.status != OrderStatus::Entregue {
            continue;
        }
        if order.payment_status != PaymentStatus::Pago {
            receivable += order.total;
            continue;
        }
        revenue += order.total;

        for item in &order.items {
            // Produto removido do catálogo: sem planilha de custo, a linha
            // não entra no lucro (a receita acima já contou o pedido).
            let Some(product) = by_id.get(&item.product_id) else {
                continue;
            };
            let item_cost = product.raw_material_cost
                + product.labor_cost
                + product.supplies_cost
                + item.price * product.fees / Decimal::ONE_HUNDRED
                + item.price * product.taxes / Decimal::ONE_HUNDRED;
            profit += (item.price - item_cost) * Decimal::from(item.quantity);
        }
    }

    DashboardSummary {
        revenue,
        receivable,
        profit,
    }
}

// Totais por status para o gráfico, na ordem fixa dos status; só entram
// status com total diferente de zero.
pub fn sales_by_status(orders: &[SalesOrder]) -> Vec<StatusRevenueEntry> {
    let mut totals: HashMap<OrderStatus, Decimal> = HashMap::new();
    for order in orders {
        *totals.entry(order.status).or_insert(Decimal::ZERO) += order.total;
    }

    OrderStatus::ALL
        .into_iter()
        .filter_map(|status| {
            let total = totals.get(&status).copied()?;
            (total != Decimal::ZERO).then_some(StatusRevenueEntry { status, total })
        })
        .collect()
}

// --- Serviço ---

#[derive(Clone)]
pub struct DashboardService {
    orders_repo: OrdersRepository,
    catalog_repo: CatalogRepository,
}

impl DashboardService {
    pub fn new(orders_repo: OrdersRepository, catalog_repo: CatalogRepository) -> Self {
        Self {
            orders_repo,
            catalog_repo,
        }
    }

    pub async fn get_summary(&self) -> DashboardSummary {
        let orders = self.orders_repo.list().await;
        let products = self.catalog_repo.list().await;
        summarize(&orders, &products)
    }

    pub async fn get_sales_by_status(&self) -> Vec<StatusRevenueEntry> {
        let orders = self.orders_repo.list().await;
        sales_by_status(&orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::orders::OrderItem;
    use chrono::Utc;

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    fn product(fees: &str, taxes: &str) -> Product {
        let now = Utc::now();
        Product {
            id: Uuid::new_v4(),
            name: "Bolo de pote 250ml".to_string(),
            price: dec("25"),
            raw_material_cost: dec("10"),
            labor_cost: dec("5"),
            supplies_cost: dec("2"),
            fees: dec(fees),
            taxes: dec(taxes),
            profit_margin: dec("20"),
            created_at: now,
            updated_at: now,
        }
    }

    fn order(
        status: OrderStatus,
        payment: PaymentStatus,
        total: &str,
        items: Vec<OrderItem>,
    ) -> SalesOrder {
        let now = Utc::now();
        SalesOrder {
            id: Uuid::new_v4(),
            lead_id: Uuid::new_v4(),
            items,
            total: dec(total),
            status,
            payment_status: payment,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn revenue_counts_only_delivered_and_paid() {
        let orders = vec![
            order(OrderStatus::Entregue, PaymentStatus::Pago, "100", vec![]),
            order(OrderStatus::Entregue, PaymentStatus::Pendente, "40", vec![]),
            order(OrderStatus::Enviado, PaymentStatus::Pago, "70", vec![]),
            order(OrderStatus::Pendente, PaymentStatus::Pendente, "25", vec![]),
        ];
        let summary = summarize(&orders, &[]);

        assert_eq!(summary.revenue, dec("100"));
        // Só entregues não pagos entram no a receber; os demais ficam fora
        assert_eq!(summary.receivable, dec("40"));
    }

    #[test]
    fn profit_applies_percentages_over_sold_price() {
        let product = product("5", "3");
        let item = OrderItem {
            product_id: product.id,
            product_name: product.name.clone(),
            price: dec("25"),
            quantity: 2,
        };
        let orders = vec![order(
            OrderStatus::Entregue,
            PaymentStatus::Pago,
            "50",
            vec![item],
        )];
        let summary = summarize(&orders, &[product]);

        // custo do item = 17 + 25*5% + 25*3% = 19; lucro = (25-19) x 2
        assert_eq!(summary.profit, dec("12"));
    }

    #[test]
    fn profit_skips_items_of_removed_products() {
        let item = OrderItem {
            product_id: Uuid::new_v4(),
            product_name: "Produto excluído".to_string(),
            price: dec("25"),
            quantity: 1,
        };
        let orders = vec![order(
            OrderStatus::Entregue,
            PaymentStatus::Pago,
            "25",
            vec![item],
        )];
        let summary = summarize(&orders, &[]);

        assert_eq!(summary.revenue, dec("25"));
        assert_eq!(summary.profit, Decimal::ZERO);
    }

    #[test]
    fn breakdown_emits_only_nonzero_statuses_in_fixed_order() {
        let orders = vec![
            order(OrderStatus::Entregue, PaymentStatus::Pago, "100", vec![]),
            order(OrderStatus::Pendente, PaymentStatus::Pendente, "30", vec![]),
            order(OrderStatus::Pendente, PaymentStatus::Pendente, "20", vec![]),
        ];
        let entries = sales_by_status(&orders);

        assert_eq!(
            entries,
            vec![
                StatusRevenueEntry {
                    status: OrderStatus::Pendente,
                    total: dec("50"),
                },
                StatusRevenueEntry {
                    status: OrderStatus::Entregue,
                    total: dec("100"),
                },
            ]
        );
    }

    #[test]
    fn empty_collections_summarize_to_zero() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.revenue, Decimal::ZERO);
        assert_eq!(summary.receivable, Decimal::ZERO);
        assert_eq!(summary.profit, Decimal::ZERO);
        assert!(sales_by_status(&[]).is_empty());
    }
}
