// src/db/settings_repo.rs

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::settings::{FunnelSettings, ShippingSettings};

// Configuração global, mutada apenas pelo "salvar" explícito das telas de
// configuração. Leituras devolvem uma cópia: os serviços recebem o valor
// vigente como dado e recalculam a partir dele.
#[derive(Clone)]
pub struct SettingsRepository {
    shipping: Arc<RwLock<ShippingSettings>>,
    funnel: Arc<RwLock<FunnelSettings>>,
}

impl SettingsRepository {
    pub fn new(shipping: ShippingSettings, funnel: FunnelSettings) -> Self {
        Self {
            shipping: Arc::new(RwLock::new(shipping)),
            funnel: Arc::new(RwLock::new(funnel)),
        }
    }

    pub async fn get_shipping(&self) -> ShippingSettings {
        self.shipping.read().await.clone()
    }

    pub async fn save_shipping(&self, settings: ShippingSettings) -> ShippingSettings {
        let mut current = self.shipping.write().await;
        *current = settings.clone();
        settings
    }

    pub async fn get_funnel(&self) -> FunnelSettings {
        self.funnel.read().await.clone()
    }

    pub async fn save_funnel(&self, settings: FunnelSettings) -> FunnelSettings {
        let mut current = self.funnel.write().await;
        *current = settings.clone();
        settings
    }
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new(ShippingSettings::default(), FunnelSettings::default())
    }
}
