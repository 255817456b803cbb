// src/services/proposal_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::{field_error, AppError},
    db::{CatalogRepository, FunnelRepository, ProposalRepository, SettingsRepository},
    models::proposal::{
        Proposal, ProposalItem, ProposalItemInput, ProposalStatus, ProposalTotals,
    },
    models::settings::ShippingMethod,
    services::shipping_service,
};

// --- Cálculo da proposta (núcleo puro) ---
//
//   subtotal = soma de quantidade x preço
//   desconto = subtotal x discount / 100
//   total    = subtotal - desconto + frete
//
// Lista vazia, desconto 0 e frete 0 dão total 0; a soma é comutativa, a
// ordem dos itens não importa.
pub fn compute_totals(
    items: &[ProposalItem],
    discount: Decimal,
    shipping: Decimal,
) -> ProposalTotals {
    let subtotal: Decimal = items
        .iter()
        .map(|item| Decimal::from(item.quantity) * item.price)
        .sum();
    let discount_amount = subtotal * discount / Decimal::ONE_HUNDRED;
    let total = subtotal - discount_amount + shipping;

    ProposalTotals {
        subtotal,
        discount_amount,
        total,
    }
}

// --- Serviço ---

#[derive(Clone)]
pub struct ProposalService {
    repo: ProposalRepository,
    catalog_repo: CatalogRepository,
    funnel_repo: FunnelRepository,
    settings_repo: SettingsRepository,
}

impl ProposalService {
    pub fn new(
        repo: ProposalRepository,
        catalog_repo: CatalogRepository,
        funnel_repo: FunnelRepository,
        settings_repo: SettingsRepository,
    ) -> Self {
        Self {
            repo,
            catalog_repo,
            funnel_repo,
            settings_repo,
        }
    }

    pub async fn create_proposal(
        &self,
        lead_id: Uuid,
        items: &[ProposalItemInput],
        discount: Decimal,
        shipping_method: ShippingMethod,
    ) -> Result<Proposal, AppError> {
        let lead = self.funnel_repo.get(lead_id).await?;

        let items = self.resolve_items(items).await?;
        validate_discount(discount)?;
        let shipping = self.resolve_shipping(shipping_method, lead.distance).await?;
        let totals = compute_totals(&items, discount, shipping);

        let now = Utc::now();
        let proposal = Proposal {
            id: Uuid::new_v4(),
            lead_id,
            items,
            discount,
            shipping,
            shipping_method,
            status: ProposalStatus::Draft,
            total: totals.total,
            created_at: now,
            updated_at: now,
        };
        Ok(self.repo.insert(proposal).await)
    }

    // Reedição: os itens são resolvidos de novo contra o catálogo (nova
    // seleção copia o preço vigente) e o total é sempre recalculado.
    pub async fn update_proposal(
        &self,
        id: Uuid,
        items: &[ProposalItemInput],
        discount: Decimal,
        shipping_method: ShippingMethod,
    ) -> Result<Proposal, AppError> {
        let mut proposal = self.repo.get(id).await?;
        self.ensure_current(&proposal).await?;

        let lead = self.funnel_repo.get(proposal.lead_id).await?;
        let items = self.resolve_items(items).await?;
        validate_discount(discount)?;
        let shipping = self.resolve_shipping(shipping_method, lead.distance).await?;
        let totals = compute_totals(&items, discount, shipping);

        proposal.items = items;
        proposal.discount = discount;
        proposal.shipping = shipping;
        proposal.shipping_method = shipping_method;
        proposal.total = totals.total;
        proposal.updated_at = Utc::now();
        self.repo.update(proposal).await
    }

    pub async fn mark_sent(&self, id: Uuid) -> Result<Proposal, AppError> {
        let mut proposal = self.repo.get(id).await?;
        self.ensure_current(&proposal).await?;

        proposal.status = ProposalStatus::Sent;
        proposal.updated_at = Utc::now();
        self.repo.update(proposal).await
    }

    pub async fn get_proposal(&self, id: Uuid) -> Result<Proposal, AppError> {
        self.repo.get(id).await
    }

    pub async fn list_by_lead(&self, lead_id: Uuid) -> Result<Vec<Proposal>, AppError> {
        // Garante 404 para lead inexistente em vez de lista vazia
        self.funnel_repo.get(lead_id).await?;
        Ok(self.repo.list_by_lead(lead_id).await)
    }

    // Um lead acumula propostas, mas só a mais recente é acionável.
    async fn ensure_current(&self, proposal: &Proposal) -> Result<(), AppError> {
        match self.repo.latest_for_lead(proposal.lead_id).await {
            Some(latest) if latest.id == proposal.id => Ok(()),
            _ => Err(AppError::ProposalNotCurrent),
        }
    }

    // Copia nome e preço do catálogo no momento da seleção. Alterações
    // futuras no produto não alcançam linhas já gravadas.
    async fn resolve_items(
        &self,
        inputs: &[ProposalItemInput],
    ) -> Result<Vec<ProposalItem>, AppError> {
        if inputs.is_empty() {
            return Err(AppError::EmptyProposal);
        }

        let mut items = Vec::with_capacity(inputs.len());
        for input in inputs {
            if input.quantity < 1 {
                return Err(field_error("quantity", "invalid_number"));
            }
            let product = self.catalog_repo.get(input.product_id).await?;
            items.push(ProposalItem {
                product_id: product.id,
                product_name: product.name,
                quantity: input.quantity,
                price: product.price,
            });
        }
        Ok(items)
    }

    // Frete derivado do método escolhido: a entrega calculada usa a faixa
    // da distância do lead; retirada e "a combinar" custam zero.
    async fn resolve_shipping(
        &self,
        method: ShippingMethod,
        distance: Option<Decimal>,
    ) -> Result<Decimal, AppError> {
        match method {
            ShippingMethod::Entrega => {
                let settings = self.settings_repo.get_shipping().await;
                shipping_service::resolve_tier(distance, &settings.tiers)
                    .ok_or_else(|| field_error("shippingMethod", "frete_nao_calculado"))
            }
            ShippingMethod::Retirada | ShippingMethod::ACombinar => Ok(Decimal::ZERO),
        }
    }
}

fn validate_discount(discount: Decimal) -> Result<(), AppError> {
    if discount < Decimal::ZERO || discount > Decimal::ONE_HUNDRED {
        return Err(field_error("discount", "invalid_number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Product;
    use crate::models::settings::{ShippingSettings, ShippingTier};

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    fn item(quantity: u32, price: &str) -> ProposalItem {
        ProposalItem {
            product_id: Uuid::new_v4(),
            product_name: "Bolo de pote".to_string(),
            quantity,
            price: dec(price),
        }
    }

    #[test]
    fn totals_scenario_with_discount_and_shipping() {
        // 2 x 50 = 100; desconto 10% = 10; frete 20 => total 110
        let items = vec![item(2, "50")];
        let totals = compute_totals(&items, dec("10"), dec("20"));

        assert_eq!(totals.subtotal, dec("100"));
        assert_eq!(totals.discount_amount, dec("10"));
        assert_eq!(totals.total, dec("110"));
    }

    #[test]
    fn total_is_invariant_under_item_reordering() {
        let a = item(2, "50");
        let b = item(1, "19.90");
        let c = item(3, "7.35");

        let forward = compute_totals(&[a.clone(), b.clone(), c.clone()], dec("5"), dec("12"));
        let backward = compute_totals(&[c, b, a], dec("5"), dec("12"));
        assert_eq!(forward, backward);
    }

    #[test]
    fn empty_items_with_zero_discount_and_shipping_total_zero() {
        let totals = compute_totals(&[], Decimal::ZERO, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn stored_total_survives_a_serialization_round_trip() {
        // Consistência do campo derivado: serializar itens, desconto e
        // frete e recomputar a partir do que voltou reproduz o total.
        let items = vec![item(2, "50"), item(4, "12.25")];
        let discount = dec("7.5");
        let shipping = dec("18");
        let stored = compute_totals(&items, discount, shipping).total;

        let json = serde_json::to_string(&(items, discount, shipping)).expect("serialize");
        let (items, discount, shipping): (Vec<ProposalItem>, Decimal, Decimal) =
            serde_json::from_str(&json).expect("deserialize");

        assert_eq!(compute_totals(&items, discount, shipping).total, stored);
    }

    // --- Cenários com repositórios em memória ---

    async fn service_with_product(price: &str) -> (ProposalService, Uuid, Uuid) {
        let catalog = CatalogRepository::new();
        let funnel = FunnelRepository::new();
        let settings = SettingsRepository::new(
            ShippingSettings {
                origin_zip: None,
                tiers: vec![ShippingTier {
                    min_distance: Decimal::ZERO,
                    max_distance: Decimal::from(10),
                    cost: Decimal::from(20),
                }],
            },
            Default::default(),
        );

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: "Bolo de pote 250ml".to_string(),
            price: dec(price),
            raw_material_cost: dec("10"),
            labor_cost: dec("5"),
            supplies_cost: dec("2"),
            fees: dec("5"),
            taxes: dec("3"),
            profit_margin: dec("20"),
            created_at: now,
            updated_at: now,
        };
        let product_id = product.id;
        catalog.insert(product).await;

        let lead = crate::models::funnel::Lead {
            id: Uuid::new_v4(),
            company_name: "Mercearia Central".to_string(),
            contact_name: None,
            value: Decimal::from(800),
            status: crate::models::funnel::LeadStatus::Proposta,
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
        };
        let lead_id = lead.id;
        funnel.insert(lead).await;

        let service = ProposalService::new(
            ProposalRepository::new(),
            catalog,
            funnel,
            settings,
        );
        (service, lead_id, product_id)
    }

    #[tokio::test]
    async fn proposal_copies_catalog_price_at_selection_time() {
        let (service, lead_id, product_id) = service_with_product("50").await;

        let inputs = vec![ProposalItemInput {
            product_id,
            quantity: 2,
        }];
        let proposal = service
            .create_proposal(lead_id, &inputs, dec("10"), ShippingMethod::Entrega)
            .await
            .expect("create ok");

        // 2 x 50 - 10% + frete 20 (faixa 0..10 para distância 7)
        assert_eq!(proposal.total, dec("110"));
        assert_eq!(proposal.items[0].price, dec("50"));
        assert_eq!(proposal.items[0].product_name, "Bolo de pote 250ml");
    }

    #[tokio::test]
    async fn rejects_empty_item_list_before_computing() {
        let (service, lead_id, _) = service_with_product("50").await;
        let err = service
            .create_proposal(lead_id, &[], Decimal::ZERO, ShippingMethod::Retirada)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyProposal));
    }

    #[tokio::test]
    async fn manual_override_uses_fixed_zero_cost_option() {
        let (service, lead_id, product_id) = service_with_product("50").await;
        let inputs = vec![ProposalItemInput {
            product_id,
            quantity: 1,
        }];
        let proposal = service
            .create_proposal(lead_id, &inputs, Decimal::ZERO, ShippingMethod::ACombinar)
            .await
            .expect("create ok");

        assert_eq!(proposal.shipping, Decimal::ZERO);
        assert_eq!(proposal.total, dec("50"));
    }

    #[tokio::test]
    async fn only_latest_proposal_is_actionable() {
        let (service, lead_id, product_id) = service_with_product("50").await;
        let inputs = vec![ProposalItemInput {
            product_id,
            quantity: 1,
        }];
        let first = service
            .create_proposal(lead_id, &inputs, Decimal::ZERO, ShippingMethod::Retirada)
            .await
            .expect("create ok");
        let _second = service
            .create_proposal(lead_id, &inputs, Decimal::ZERO, ShippingMethod::Retirada)
            .await
            .expect("create ok");

        let err = service.mark_sent(first.id).await.unwrap_err();
        assert!(matches!(err, AppError::ProposalNotCurrent));
    }
}
