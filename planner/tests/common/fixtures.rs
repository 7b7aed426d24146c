//! Test fixtures and data for planner tests

use shared::BudgetInputs;

/// Standard test data and fixtures
pub struct TestFixtures;

#[allow(dead_code)]
impl TestFixtures {
    pub const BASE_URL: &'static str = "https://planner.example.com";
    pub const TEAM: &'static str = "Ice Hawks";

    /// The twenty-player scenario with known totals
    pub fn twenty_players() -> BudgetInputs {
        BudgetInputs {
            team_name: Self::TEAM.to_string(),
            player_amount: 20,
            ice_cost_per_hour: 250.0,
            total_hours: 40.0,
            coach_amount: 2,
        }
    }

    /// Query string for the twenty-player scenario
    pub fn twenty_players_query() -> &'static str {
        "team=Ice+Hawks&players=20&iceCost=250&hours=40&coaches=2"
    }

    /// Inputs exercising encoding edge cases
    pub fn awkward_inputs() -> BudgetInputs {
        BudgetInputs {
            team_name: "Los Pingüinos #1 & Friends".to_string(),
            player_amount: 7,
            ice_cost_per_hour: 199.99,
            total_hours: 12.5,
            coach_amount: 3,
        }
    }
}
