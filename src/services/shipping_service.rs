// src/services/shipping_service.rs

use rust_decimal::Decimal;

use crate::models::settings::{ShippingMethod, ShippingOption, ShippingSettings, ShippingTier};

// Resolve o custo de frete para uma distância: a PRIMEIRA faixa (na ordem
// configurada) cujo intervalo inclusivo [min, max] contém a distância.
// `None` quando a distância está ausente ou nenhuma faixa serve — caso
// válido e comum: o chamador cai nas opções fixas (retirada / a combinar).
pub fn resolve_tier(distance: Option<Decimal>, tiers: &[ShippingTier]) -> Option<Decimal> {
    let distance = distance?;
    tiers
        .iter()
        .find(|tier| distance >= tier.min_distance && distance <= tier.max_distance)
        .map(|tier| tier.cost)
}

// Monta as opções de entrega oferecidas na proposta de um lead. A entrega
// calculada só aparece quando alguma faixa cobriu a distância; as opções
// fixas de custo zero aparecem sempre.
pub fn shipping_options(
    distance: Option<Decimal>,
    settings: &ShippingSettings,
) -> Vec<ShippingOption> {
    let mut options = Vec::new();

    if let Some(cost) = resolve_tier(distance, &settings.tiers) {
        options.push(ShippingOption {
            method: ShippingMethod::Entrega,
            label: ShippingMethod::Entrega.label().to_string(),
            cost,
        });
    }

    options.push(ShippingOption {
        method: ShippingMethod::Retirada,
        label: ShippingMethod::Retirada.label().to_string(),
        cost: Decimal::ZERO,
    });
    options.push(ShippingOption {
        method: ShippingMethod::ACombinar,
        label: ShippingMethod::ACombinar.label().to_string(),
        cost: Decimal::ZERO,
    });

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(min: i64, max: i64, cost: i64) -> ShippingTier {
        ShippingTier {
            min_distance: Decimal::from(min),
            max_distance: Decimal::from(max),
            cost: Decimal::from(cost),
        }
    }

    #[test]
    fn first_matching_tier_wins_on_overlap() {
        // Faixas sobrepostas: [0,10] -> 8 e [5,15] -> 12; distância 7
        let tiers = vec![tier(0, 10, 8), tier(5, 15, 12)];
        let cost = resolve_tier(Some(Decimal::from(7)), &tiers);
        assert_eq!(cost, Some(Decimal::from(8)));
    }

    #[test]
    fn bounds_are_inclusive_and_scan_in_order() {
        let tiers = vec![tier(0, 10, 15), tier(10, 20, 25)];
        // 12 está fora da primeira faixa, dentro da segunda
        assert_eq!(
            resolve_tier(Some(Decimal::from(12)), &tiers),
            Some(Decimal::from(25))
        );
        // 10 é inclusivo nas duas; a primeira ganha
        assert_eq!(
            resolve_tier(Some(Decimal::from(10)), &tiers),
            Some(Decimal::from(15))
        );
    }

    #[test]
    fn absent_distance_is_not_an_error() {
        let tiers = vec![tier(0, 10, 15)];
        assert_eq!(resolve_tier(None, &tiers), None);
    }

    #[test]
    fn no_tier_matches_outside_all_ranges() {
        let tiers = vec![tier(0, 10, 15), tier(10, 20, 25)];
        assert_eq!(resolve_tier(Some(Decimal::from(50)), &tiers), None);
    }

    #[test]
    fn options_always_include_zero_cost_fallbacks() {
        let settings = ShippingSettings {
            origin_zip: None,
            tiers: vec![],
        };
        let options = shipping_options(Some(Decimal::from(7)), &settings);
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|o| o.cost == Decimal::ZERO));
        assert_eq!(options[0].method, ShippingMethod::Retirada);
        assert_eq!(options[1].method, ShippingMethod::ACombinar);
    }

    #[test]
    fn calculated_delivery_listed_first_when_tier_matches() {
        let settings = ShippingSettings {
            origin_zip: Some("01310100".to_string()),
            tiers: vec![tier(0, 10, 15)],
        };
        let options = shipping_options(Some(Decimal::from(5)), &settings);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].method, ShippingMethod::Entrega);
        assert_eq!(options[0].cost, Decimal::from(15));
    }
}
