//! Core budget types shared by the planner and results components

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Editable planner inputs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetInputs {
    pub team_name: String,
    pub player_amount: u32,
    pub ice_cost_per_hour: f64,
    pub total_hours: f64,
    pub coach_amount: u32,
}

impl BudgetInputs {
    pub const DEFAULT_TEAM: &'static str = "Penguins";
}

impl Default for BudgetInputs {
    fn default() -> Self {
        Self {
            team_name: Self::DEFAULT_TEAM.to_string(),
            player_amount: 1,
            ice_cost_per_hour: 300.0,
            total_hours: 50.0,
            coach_amount: 1,
        }
    }
}

/// Per-unit rates applied by the calculation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetRates {
    pub jersey_cost_per_player: f64, // Flat jersey cost per rostered player
    pub coach_cost_per_coach: f64,   // Season fee per coach
    pub overhead_rate: f64,          // Fraction of the subtotal, 0.02 = 2%
}

impl Default for BudgetRates {
    fn default() -> Self {
        Self {
            jersey_cost_per_player: 88.0,
            coach_cost_per_coach: 3000.0,
            overhead_rate: 0.02,
        }
    }
}

/// Derived totals, always replaced as a whole
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub total_jersey_cost: f64,
    pub total_ice_cost: f64,
    pub total_coach_cost: f64,
    pub total_overhead: f64,
    pub total_cost: f64,
    pub cost_per_player: f64,
}

/// Input fields that can be edited or shared through the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    Team,
    Players,
    IceCost,
    Hours,
    Coaches,
}

impl InputField {
    /// Fields in share-URL order
    pub const ALL: [InputField; 5] = [
        InputField::Team,
        InputField::Players,
        InputField::IceCost,
        InputField::Hours,
        InputField::Coaches,
    ];

    /// Query parameter name used in share links
    pub fn param_name(&self) -> &'static str {
        match self {
            InputField::Team => "team",
            InputField::Players => "players",
            InputField::IceCost => "iceCost",
            InputField::Hours => "hours",
            InputField::Coaches => "coaches",
        }
    }

    /// Look up a field by its exact query parameter name
    pub fn from_param(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.param_name() == name)
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, InputField::Team)
    }

    /// Whether the field only accepts whole numbers
    pub fn is_integer(&self) -> bool {
        matches!(self, InputField::Players | InputField::Coaches)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.param_name())
    }
}

impl std::str::FromStr for InputField {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        match s.to_lowercase().as_str() {
            "team" | "team-name" | "teamname" => Ok(InputField::Team),
            "players" | "player-amount" | "playeramount" => Ok(InputField::Players),
            "icecost" | "ice-cost" | "icecostperhour" => Ok(InputField::IceCost),
            "hours" | "total-hours" | "totalhours" => Ok(InputField::Hours),
            "coaches" | "coach-amount" | "coachamount" => Ok(InputField::Coaches),
            _ => Err(SharedError::UnknownField { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs() {
        let inputs = BudgetInputs::default();
        assert_eq!(inputs.team_name, "Penguins");
        assert_eq!(inputs.player_amount, 1);
        assert_eq!(inputs.ice_cost_per_hour, 300.0);
        assert_eq!(inputs.total_hours, 50.0);
        assert_eq!(inputs.coach_amount, 1);
    }

    #[test]
    fn test_default_totals_are_zeroed() {
        let totals = BudgetTotals::default();
        assert_eq!(totals.total_cost, 0.0);
        assert_eq!(totals.cost_per_player, 0.0);
    }

    #[test]
    fn test_field_parsing_accepts_aliases() {
        assert_eq!("iceCost".parse::<InputField>().unwrap(), InputField::IceCost);
        assert_eq!("ice-cost".parse::<InputField>().unwrap(), InputField::IceCost);
        assert_eq!("PLAYERS".parse::<InputField>().unwrap(), InputField::Players);
        assert_eq!("team-name".parse::<InputField>().unwrap(), InputField::Team);
        assert!("goalies".parse::<InputField>().is_err());
    }

    #[test]
    fn test_param_lookup_is_exact() {
        assert_eq!(InputField::from_param("iceCost"), Some(InputField::IceCost));
        assert_eq!(InputField::from_param("icecost"), None);
    }

    #[test]
    fn test_inputs_deserialize_with_missing_fields() {
        let inputs: BudgetInputs = serde_json::from_str(r#"{"player_amount": 12}"#).unwrap();
        assert_eq!(inputs.player_amount, 12);
        assert_eq!(inputs.team_name, "Penguins");
    }
}
