// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Funil ---
        handlers::funnel::create_lead,
        handlers::funnel::list_leads,
        handlers::funnel::get_lead,
        handlers::funnel::update_lead,
        handlers::funnel::delete_lead,
        handlers::funnel::request_transition,
        handlers::funnel::reactivation_list,
        handlers::funnel::shipping_options,

        // --- Catálogo ---
        handlers::catalog::create_product,
        handlers::catalog::list_products,
        handlers::catalog::get_product,
        handlers::catalog::update_product,
        handlers::catalog::delete_product,
        handlers::catalog::costing_preview,
        handlers::catalog::labor_rate,

        // --- Propostas ---
        handlers::proposals::create_proposal,
        handlers::proposals::list_by_lead,
        handlers::proposals::get_proposal,
        handlers::proposals::update_proposal,
        handlers::proposals::send_proposal,

        // --- Pedidos ---
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::update_order_status,

        // --- Configurações ---
        handlers::settings::get_shipping_settings,
        handlers::settings::save_shipping_settings,
        handlers::settings::get_funnel_settings,
        handlers::settings::save_funnel_settings,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_sales_by_status,

        // --- Endereço ---
        handlers::address::lookup_cep,
    ),
    components(
        schemas(
            // --- Funil ---
            models::funnel::LeadStatus,
            models::funnel::Lead,
            models::funnel::TransitionOutcome,
            handlers::funnel::CreateLeadPayload,
            handlers::funnel::UpdateLeadPayload,
            handlers::funnel::TransitionPayload,

            // --- Catálogo ---
            models::catalog::Product,
            models::catalog::CostingInput,
            models::catalog::CostingBreakdown,
            models::catalog::LaborRateInput,
            models::catalog::LaborRateBreakdown,
            handlers::catalog::ProductPayload,

            // --- Propostas ---
            models::proposal::ProposalStatus,
            models::proposal::ProposalItem,
            models::proposal::ProposalItemInput,
            models::proposal::Proposal,
            models::proposal::ProposalTotals,
            handlers::proposals::CreateProposalPayload,
            handlers::proposals::UpdateProposalPayload,

            // --- Pedidos ---
            models::orders::OrderStatus,
            models::orders::PaymentStatus,
            models::orders::OrderItem,
            models::orders::SalesOrder,
            handlers::orders::CreateOrderPayload,
            handlers::orders::UpdateOrderStatusPayload,

            // --- Configurações ---
            models::settings::ShippingTier,
            models::settings::ShippingSettings,
            models::settings::ShippingMethod,
            models::settings::ShippingOption,
            models::settings::FunnelSettings,
            handlers::settings::SaveShippingSettingsPayload,
            handlers::settings::SaveFunnelSettingsPayload,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,
            models::dashboard::StatusRevenueEntry,

            // --- Endereço ---
            models::address::AddressInfo,
        )
    ),
    tags(
        (name = "Funil", description = "Quadro de leads, transições e reativação"),
        (name = "Catálogo", description = "Produtos e precificação"),
        (name = "Propostas", description = "Orçamentos por lead"),
        (name = "Pedidos", description = "Pedidos gerados de leads ganhos"),
        (name = "Configurações", description = "Frete e período de reativação"),
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais"),
        (name = "Endereço", description = "Consulta de CEP")
    )
)]
pub struct ApiDoc;
