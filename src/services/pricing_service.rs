// src/services/pricing_service.rs

use rust_decimal::Decimal;

use crate::{
    common::error::{field_error, AppError},
    models::catalog::{CostingBreakdown, CostingInput, LaborRateBreakdown, LaborRateInput},
};

// Média de semanas por mês usada na conversão salário -> custo por minuto
const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2); // 4.33
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

// Precificação de um produto. Fees e taxes são percentuais aplicados sobre
// o CUSTO BASE (matéria-prima + mão de obra + insumos), não sobre o preço.
// O lucro real pode sair negativo: é prejuízo, não erro.
pub fn compute_costing(input: &CostingInput) -> CostingBreakdown {
    let base_cost = input.raw_material_cost + input.labor_cost + input.supplies_cost;
    let fees_value = base_cost * input.fees / Decimal::ONE_HUNDRED;
    let taxes_value = base_cost * input.taxes / Decimal::ONE_HUNDRED;
    let total_cost = base_cost + fees_value + taxes_value;
    let suggested_price =
        total_cost * (Decimal::ONE + input.profit_margin / Decimal::ONE_HUNDRED);
    let actual_profit = input.price - total_cost;

    CostingBreakdown {
        base_cost,
        fees_value,
        taxes_value,
        total_cost,
        suggested_price,
        actual_profit,
    }
}

// Cálculo auxiliar de mão de obra: converte salário mensal + custos fixos
// em custo por minuto (horas semanais x 4.33 semanas x 60 minutos) e
// multiplica pelos minutos de produção. O resultado alimenta o campo
// `laborCost` da precificação.
pub fn compute_labor_rate(input: &LaborRateInput) -> Result<LaborRateBreakdown, AppError> {
    let minutes_per_month = input.weekly_hours * WEEKS_PER_MONTH * MINUTES_PER_HOUR;

    let monthly_total = input.monthly_salary + input.monthly_fixed_costs;
    let cost_per_minute = monthly_total
        .checked_div(minutes_per_month)
        .ok_or_else(|| field_error("weeklyHours", "invalid_number"))?;

    Ok(LaborRateBreakdown {
        cost_per_minute,
        labor_cost: cost_per_minute * input.production_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    #[test]
    fn costing_scenario_with_fees_taxes_and_margin() {
        // matéria-prima 10 + mão de obra 5 + insumos 2 = base 17
        let input = CostingInput {
            raw_material_cost: dec("10"),
            labor_cost: dec("5"),
            supplies_cost: dec("2"),
            fees: dec("5"),
            taxes: dec("3"),
            profit_margin: dec("20"),
            price: dec("25"),
        };
        let breakdown = compute_costing(&input);

        assert_eq!(breakdown.base_cost, dec("17"));
        assert_eq!(breakdown.fees_value, dec("0.85"));
        assert_eq!(breakdown.taxes_value, dec("0.51"));
        assert_eq!(breakdown.total_cost, dec("18.36"));
        assert_eq!(breakdown.suggested_price, dec("22.032"));
        assert_eq!(breakdown.actual_profit, dec("6.64"));
    }

    #[test]
    fn total_cost_never_below_base_cost() {
        let input = CostingInput {
            raw_material_cost: dec("12.50"),
            labor_cost: dec("4.20"),
            supplies_cost: dec("1.30"),
            fees: dec("7"),
            taxes: dec("11"),
            profit_margin: dec("35"),
            price: dec("40"),
        };
        let breakdown = compute_costing(&input);

        assert!(breakdown.total_cost >= breakdown.base_cost);
        assert!(breakdown.suggested_price >= breakdown.total_cost);
        assert_eq!(breakdown.actual_profit, input.price - breakdown.total_cost);
    }

    #[test]
    fn empty_form_computes_all_zeros() {
        let breakdown = compute_costing(&CostingInput::default());
        assert_eq!(breakdown.total_cost, Decimal::ZERO);
        assert_eq!(breakdown.suggested_price, Decimal::ZERO);
        assert_eq!(breakdown.actual_profit, Decimal::ZERO);
    }

    #[test]
    fn selling_below_cost_yields_negative_profit() {
        let input = CostingInput {
            raw_material_cost: dec("30"),
            price: dec("20"),
            ..CostingInput::default()
        };
        let breakdown = compute_costing(&input);
        assert_eq!(breakdown.actual_profit, dec("-10"));
    }

    #[test]
    fn labor_rate_from_monthly_salary() {
        // (2000 + 598) / (10h x 4.33 x 60min) = 2598 / 2598 = 1,00/min
        let input = LaborRateInput {
            monthly_salary: dec("2000"),
            monthly_fixed_costs: dec("598"),
            weekly_hours: dec("10"),
            production_minutes: dec("45"),
        };
        let breakdown = compute_labor_rate(&input).expect("labor rate ok");

        assert_eq!(breakdown.cost_per_minute, dec("1"));
        assert_eq!(breakdown.labor_cost, dec("45"));
    }

    #[test]
    fn labor_rate_rejects_zero_weekly_hours() {
        let input = LaborRateInput {
            monthly_salary: dec("2000"),
            ..LaborRateInput::default()
        };
        let err = compute_labor_rate(&input).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
