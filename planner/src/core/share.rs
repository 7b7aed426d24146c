//! Share-link encoding
//!
//! Inputs travel as five query parameters (`team`, `players`, `iceCost`,
//! `hours`, `coaches`) on the page's base URL. Loading applies each parameter
//! independently; anything absent keeps its current value.

use serde::Serialize;
use shared::logging::ComponentId;
use shared::{BudgetInputs, InputField, planner_debug, planner_warn};
use url::Url;

use super::edit::{assign, coerce_value};
use crate::error::{PlannerError, PlannerResult};

/// Parse and normalise the base URL share links are built on
pub fn parse_base_url(raw: &str) -> PlannerResult<Url> {
    let url = Url::parse(raw).map_err(|_| PlannerError::InvalidBaseUrl { url: raw.to_string() })?;
    if url.cannot_be_a_base() {
        return Err(PlannerError::InvalidBaseUrl { url: raw.to_string() });
    }
    Ok(url)
}

/// Render the raw parameter value for one field
pub fn param_value(inputs: &BudgetInputs, field: InputField) -> String {
    match field {
        InputField::Team => inputs.team_name.clone(),
        InputField::Players => inputs.player_amount.to_string(),
        InputField::IceCost => inputs.ice_cost_per_hour.to_string(),
        InputField::Hours => inputs.total_hours.to_string(),
        InputField::Coaches => inputs.coach_amount.to_string(),
    }
}

/// Build an absolute share URL for the given inputs
///
/// Any query or fragment already on `base` is replaced.
pub fn build_share_url(base: &Url, inputs: &BudgetInputs) -> String {
    let mut url = base.clone();
    url.set_fragment(None);
    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        for field in InputField::ALL {
            pairs.append_pair(field.param_name(), &param_value(inputs, field));
        }
    }
    url.to_string()
}

/// Outcome of applying a query string
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    /// Fields overwritten from the query
    pub applied: Vec<InputField>,
    /// Known parameters whose value could not be coerced
    pub rejected: Vec<(String, String)>,
    /// Parameters this planner does not understand
    pub unknown: Vec<String>,
}

impl LoadReport {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.rejected.is_empty() && self.unknown.is_empty()
    }
}

/// Extract the query part from a bare query, `?query` or a full URL
///
/// Text that is not an absolute URL is read as a query, after dropping any
/// `host/path?` prefix that carries no parameters.
fn query_part(input: &str) -> String {
    let trimmed = input.trim();
    if let Ok(url) = Url::parse(trimmed) {
        if !url.cannot_be_a_base() {
            return url.query().unwrap_or_default().to_string();
        }
    }

    let (prefix, query) = match trimmed.split_once('?') {
        Some((prefix, rest)) if !prefix.contains('=') => (prefix, rest),
        _ => ("", trimmed),
    };
    if prefix.contains("://") {
        planner_warn!(
            ComponentId::Planner,
            "Could not parse {} as a URL; reading parameters after '?'",
            prefix
        );
    }
    query.to_string()
}

/// Overwrite inputs from any recognised parameters in `input`
///
/// The first occurrence of a repeated parameter wins.
pub fn load_from_query(input: &str, inputs: &mut BudgetInputs) -> LoadReport {
    let query = query_part(input);
    let mut report = LoadReport::default();
    let mut seen: Vec<InputField> = Vec::with_capacity(InputField::ALL.len());

    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let Some(field) = InputField::from_param(&name) else {
            report.unknown.push(name.into_owned());
            continue;
        };
        if seen.contains(&field) {
            continue;
        }
        seen.push(field);
        match coerce_value(field, &value) {
            Ok(coerced) => {
                assign(inputs, field, coerced);
                report.applied.push(field);
            }
            Err(e) => {
                planner_warn!(ComponentId::Planner, "Ignoring share parameter {}={}: {}", name, value, e);
                report.rejected.push((name.into_owned(), value.into_owned()));
            }
        }
    }

    planner_debug!(
        ComponentId::Planner,
        "Loaded {} field(s) from query ({} rejected, {} unknown)",
        report.applied.len(),
        report.rejected.len(),
        report.unknown.len()
    );
    report
}
