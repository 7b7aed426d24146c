//! Budget calculation
//!
//! A single pure function over the current inputs and rates. The result is
//! produced whole or not at all, so callers can replace their totals
//! atomically.

use shared::{BudgetInputs, BudgetRates, BudgetTotals};

use crate::error::{PlannerError, PlannerResult};

/// Compute every derived total for the given inputs
pub fn calculate_totals(inputs: &BudgetInputs, rates: &BudgetRates) -> PlannerResult<BudgetTotals> {
    if inputs.player_amount == 0 {
        return Err(PlannerError::InvalidPlayerCount {
            count: inputs.player_amount,
        });
    }

    check_amount("iceCost", inputs.ice_cost_per_hour)?;
    check_amount("hours", inputs.total_hours)?;
    check_amount("jersey_cost_per_player", rates.jersey_cost_per_player)?;
    check_amount("coach_cost_per_coach", rates.coach_cost_per_coach)?;
    check_amount("overhead_rate", rates.overhead_rate)?;

    let total_jersey_cost = rates.jersey_cost_per_player * f64::from(inputs.player_amount);
    let total_ice_cost = inputs.ice_cost_per_hour * inputs.total_hours;
    let total_coach_cost = rates.coach_cost_per_coach * f64::from(inputs.coach_amount);

    let total_overhead = (total_ice_cost + total_coach_cost + total_jersey_cost) * rates.overhead_rate;
    let total_cost = total_ice_cost + total_coach_cost + total_jersey_cost + total_overhead;
    let cost_per_player = total_cost / f64::from(inputs.player_amount);

    let totals = BudgetTotals {
        total_jersey_cost,
        total_ice_cost,
        total_coach_cost,
        total_overhead,
        total_cost,
        cost_per_player,
    };
    check_totals(&totals)?;
    Ok(totals)
}

/// Large finite inputs can still overflow to infinity
fn check_totals(totals: &BudgetTotals) -> PlannerResult<()> {
    [
        ("total_jersey_cost", totals.total_jersey_cost),
        ("total_ice_cost", totals.total_ice_cost),
        ("total_coach_cost", totals.total_coach_cost),
        ("total_overhead", totals.total_overhead),
        ("total_cost", totals.total_cost),
        ("cost_per_player", totals.cost_per_player),
    ]
    .into_iter()
    .try_for_each(|(field, value)| check_amount(field, value))
}

fn check_amount(field: &str, value: f64) -> PlannerResult<()> {
    if !value.is_finite() {
        return Err(PlannerError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(PlannerError::NegativeValue {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(players: u32, ice_cost: f64, hours: f64, coaches: u32) -> BudgetInputs {
        BudgetInputs {
            team_name: "Penguins".to_string(),
            player_amount: players,
            ice_cost_per_hour: ice_cost,
            total_hours: hours,
            coach_amount: coaches,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_default_scenario() {
        let totals = calculate_totals(&BudgetInputs::default(), &BudgetRates::default()).unwrap();

        assert_close(totals.total_jersey_cost, 88.0);
        assert_close(totals.total_ice_cost, 15000.0);
        assert_close(totals.total_coach_cost, 3000.0);
        assert_close(totals.total_overhead, 361.76);
        assert_close(totals.total_cost, 18449.76);
        assert_close(totals.cost_per_player, 18449.76);
    }

    #[test]
    fn test_twenty_player_scenario() {
        let totals = calculate_totals(&inputs(20, 250.0, 40.0, 2), &BudgetRates::default()).unwrap();

        assert_close(totals.total_jersey_cost, 1760.0);
        assert_close(totals.total_ice_cost, 10000.0);
        assert_close(totals.total_coach_cost, 6000.0);
        assert_close(totals.total_overhead, 355.2);
        assert_close(totals.total_cost, 18115.2);
        assert_close(totals.cost_per_player, 905.76);
    }

    #[test]
    fn test_closed_form_over_a_grid() {
        let rates = BudgetRates::default();
        for p in [1u32, 3, 17, 40] {
            for (c, h) in [(0.0, 0.0), (125.5, 12.0), (300.0, 50.0)] {
                for k in [0u32, 1, 4] {
                    let totals = calculate_totals(&inputs(p, c, h, k), &rates).unwrap();
                    let expected = 1.02 * (88.0 * p as f64 + c * h + 3000.0 * k as f64);
                    assert_close(totals.total_cost, expected);
                    assert_close(totals.cost_per_player, expected / p as f64);
                }
            }
        }
    }

    #[test]
    fn test_zero_players_is_rejected() {
        let result = calculate_totals(&inputs(0, 300.0, 50.0, 1), &BudgetRates::default());
        assert!(matches!(result, Err(PlannerError::InvalidPlayerCount { count: 0 })));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let result = calculate_totals(&inputs(5, f64::NAN, 50.0, 1), &BudgetRates::default());
        assert!(matches!(result, Err(PlannerError::InvalidNumber { ref field, .. }) if field == "iceCost"));
    }

    #[test]
    fn test_overflowing_totals_are_rejected() {
        let result = calculate_totals(&inputs(5, 1e200, 1e200, 1), &BudgetRates::default());
        assert!(matches!(result, Err(PlannerError::InvalidNumber { ref field, .. }) if field == "total_ice_cost"));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let rates = BudgetRates {
            overhead_rate: -0.5,
            ..BudgetRates::default()
        };
        let result = calculate_totals(&BudgetInputs::default(), &rates);
        assert!(matches!(result, Err(PlannerError::NegativeValue { .. })));
    }

    #[test]
    fn test_custom_rates() {
        let rates = BudgetRates {
            jersey_cost_per_player: 100.0,
            coach_cost_per_coach: 0.0,
            overhead_rate: 0.0,
        };
        let totals = calculate_totals(&inputs(10, 200.0, 10.0, 3), &rates).unwrap();
        assert_close(totals.total_cost, 3000.0);
        assert_close(totals.cost_per_player, 300.0);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let inputs = inputs(12, 275.0, 33.5, 2);
        let rates = BudgetRates::default();
        let first = calculate_totals(&inputs, &rates).unwrap();
        let second = calculate_totals(&inputs, &rates).unwrap();
        assert_eq!(first, second);
    }
}
