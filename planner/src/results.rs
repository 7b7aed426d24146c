//! Results display
//!
//! Stateless view over the last calculated totals. It receives the seven
//! display fields by value and only formats them.

use serde::{Deserialize, Serialize};
use shared::BudgetTotals;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsView {
    pub team_name: String,
    pub total_jersey: f64,
    pub total_ice: f64,
    pub total_coach: f64,
    pub total_overhead: f64,
    pub total_cost: f64,
    pub cost_per_player: f64,
}

impl ResultsView {
    pub fn new(team_name: impl Into<String>, totals: &BudgetTotals) -> Self {
        Self {
            team_name: team_name.into(),
            total_jersey: totals.total_jersey_cost,
            total_ice: totals.total_ice_cost,
            total_coach: totals.total_coach_cost,
            total_overhead: totals.total_overhead,
            total_cost: totals.total_cost,
            cost_per_player: totals.cost_per_player,
        }
    }

    /// Cost per player rounded to cents
    pub fn formatted_cost_per_player(&self) -> String {
        format!("{:.2}", self.cost_per_player)
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results for {}", self.team_name)?;
        writeln!(f, "Jersey Cost: ${}", self.total_jersey)?;
        writeln!(f, "Ice Cost: ${}", self.total_ice)?;
        writeln!(f, "Coach Cost: ${}", self.total_coach)?;
        writeln!(f, "Overhead: ${}", self.total_overhead)?;
        writeln!(f, "Total Cost: ${}", self.total_cost)?;
        write!(f, "Cost per Player: ${}", self.formatted_cost_per_player())
    }
}
