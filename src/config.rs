// src/config.rs

use std::env;

use crate::db::{
    CatalogRepository, FunnelRepository, OrdersRepository, ProposalRepository, SettingsRepository,
};
use crate::models::settings::{FunnelSettings, ShippingSettings};
use crate::services::{
    address_service::AddressService, catalog_service::CatalogService,
    dashboard_service::DashboardService, funnel_service::FunnelService,
    order_service::OrderService, proposal_service::ProposalService,
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub funnel_service: FunnelService,
    pub catalog_service: CatalogService,
    pub proposal_service: ProposalService,
    pub order_service: OrderService,
    pub dashboard_service: DashboardService,
    pub address_service: AddressService,
    pub settings_repo: SettingsRepository,
}

impl AppState {
    // Monta os repositórios em memória e amarra os serviços
    pub fn new() -> anyhow::Result<Self> {
        // .env é opcional; variáveis já exportadas também servem
        dotenvy::dotenv().ok();

        let reactivation_period_days = env::var("REACTIVATION_PERIOD_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(30);
        let viacep_base_url = env::var("VIACEP_BASE_URL").ok();

        let funnel_repo = FunnelRepository::new();
        let catalog_repo = CatalogRepository::new();
        let proposal_repo = ProposalRepository::new();
        let orders_repo = OrdersRepository::new();
        let settings_repo = SettingsRepository::new(
            ShippingSettings::default(),
            FunnelSettings {
                reactivation_period_days,
            },
        );

        let funnel_service = FunnelService::new(funnel_repo.clone(), settings_repo.clone());
        let catalog_service = CatalogService::new(catalog_repo.clone());
        let proposal_service = ProposalService::new(
            proposal_repo.clone(),
            catalog_repo.clone(),
            funnel_repo,
            settings_repo.clone(),
        );
        let order_service =
            OrderService::new(orders_repo.clone(), proposal_repo, funnel_service.clone());
        let dashboard_service = DashboardService::new(orders_repo, catalog_repo);
        let address_service = AddressService::new(viacep_base_url)
            .map_err(|e| anyhow::anyhow!("Falha ao criar o cliente de CEP: {}", e))?;

        Ok(Self {
            funnel_service,
            catalog_service,
            proposal_service,
            order_service,
            dashboard_service,
            address_service,
            settings_repo,
        })
    }
}
