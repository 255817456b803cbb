//src/main.rs

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    // Quadro do funil: leads, transições e reativação
    let funnel_routes = Router::new()
        .route("/leads"
               ,post(handlers::funnel::create_lead)
               .get(handlers::funnel::list_leads)
        )
        .route("/leads/{id}"
               ,get(handlers::funnel::get_lead)
               .put(handlers::funnel::update_lead)
               .delete(handlers::funnel::delete_lead)
        )
        .route("/leads/{id}/transition"
               ,post(handlers::funnel::request_transition)
        )
        .route("/leads/{id}/shipping-options"
               ,get(handlers::funnel::shipping_options)
        )
        .route("/reactivation"
               ,get(handlers::funnel::reactivation_list)
        );

    let catalog_routes = Router::new()
        .route("/products"
               ,post(handlers::catalog::create_product)
               .get(handlers::catalog::list_products)
        )
        .route("/products/{id}"
               ,get(handlers::catalog::get_product)
               .put(handlers::catalog::update_product)
               .delete(handlers::catalog::delete_product)
        )
        .route("/costing"
               ,post(handlers::catalog::costing_preview)
        )
        .route("/costing/labor-rate"
               ,post(handlers::catalog::labor_rate)
        );

    let proposal_routes = Router::new()
        .route("/"
               ,post(handlers::proposals::create_proposal)
               .get(handlers::proposals::list_by_lead)
        )
        .route("/{id}"
               ,get(handlers::proposals::get_proposal)
               .put(handlers::proposals::update_proposal)
        )
        .route("/{id}/send"
               ,post(handlers::proposals::send_proposal)
        );

    let order_routes = Router::new()
        .route("/"
               ,post(handlers::orders::create_order)
               .get(handlers::orders::list_orders)
        )
        .route("/{id}"
               ,get(handlers::orders::get_order)
        )
        .route("/{id}/status"
               ,put(handlers::orders::update_order_status)
        );

    let settings_routes = Router::new()
        .route("/shipping"
               ,get(handlers::settings::get_shipping_settings)
               .put(handlers::settings::save_shipping_settings)
        )
        .route("/funnel"
               ,get(handlers::settings::get_funnel_settings)
               .put(handlers::settings::save_funnel_settings)
        );

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/sales-by-status", get(handlers::dashboard::get_sales_by_status));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/address/{cep}", get(handlers::address::lookup_cep))
        .nest("/api/funnel", funnel_routes)
        .nest("/api/catalog", catalog_routes)
        .nest("/api/proposals", proposal_routes)
        .nest("/api/orders", order_routes)
        .nest("/api/settings", settings_routes)
        .nest("/api/dashboard", dashboard_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
