//! Main planner implementation
//!
//! The `Planner` owns the editable inputs and the last calculated totals and
//! drives the pure functions in [`crate::core`]. Clipboard and notice output
//! are injected so the planner can be exercised with mocks.

use std::sync::Arc;

use shared::logging::ComponentId;
use shared::{BudgetInputs, BudgetRates, BudgetTotals, InputField, planner_debug, planner_info, planner_warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use url::Url;

use crate::config::{PlannerConfig, RecomputePolicy};
use crate::core::edit::{FieldEdit, InputPolicy, apply_edit};
use crate::core::share::{LoadReport, build_share_url, load_from_query};
use crate::core::calculate_totals;
use crate::error::{PlannerError, PlannerResult};
use crate::results::ResultsView;
use crate::traits::{Clipboard, Notice, Notifier};

/// Budget planner with dependency injection
pub struct Planner<C, N>
where
    C: Clipboard + 'static,
    N: Notifier + 'static,
{
    inputs: BudgetInputs,
    totals: BudgetTotals,
    rates: BudgetRates,
    base_url: Url,
    input_policy: InputPolicy,
    recompute_policy: RecomputePolicy,
    clipboard: Arc<C>,
    notifier: Arc<N>,
}

impl<C, N> Planner<C, N>
where
    C: Clipboard + 'static,
    N: Notifier + 'static,
{
    /// Create a planner with default inputs and zeroed totals
    pub fn new(config: &PlannerConfig, clipboard: C, notifier: N) -> Self {
        Self {
            inputs: BudgetInputs::default(),
            totals: BudgetTotals::default(),
            rates: config.rates.clone(),
            base_url: config.base_url.clone(),
            input_policy: config.input_policy,
            recompute_policy: config.recompute_policy,
            clipboard: Arc::new(clipboard),
            notifier: Arc::new(notifier),
        }
    }

    pub fn inputs(&self) -> &BudgetInputs {
        &self.inputs
    }

    /// Totals as of the last successful calculation
    pub fn totals(&self) -> &BudgetTotals {
        &self.totals
    }

    pub fn rates(&self) -> &BudgetRates {
        &self.rates
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn recompute_policy(&self) -> RecomputePolicy {
        self.recompute_policy
    }

    /// Edit a field by name, e.g. `("players", "20")`
    pub fn set_field(&mut self, name: &str, value: &str) -> PlannerResult<()> {
        let field: InputField = name.parse()?;
        self.apply_edit(&FieldEdit::new(field, value))
    }

    /// Apply a single edit; totals are untouched unless recompute is live
    pub fn apply_edit(&mut self, edit: &FieldEdit) -> PlannerResult<()> {
        self.inputs = apply_edit(&self.inputs, edit, self.input_policy)?;
        planner_debug!(ComponentId::Planner, "Set {} = {}", edit.field, edit.value);
        self.recompute_if_live();
        Ok(())
    }

    /// Recompute totals from the current inputs
    ///
    /// On error the previous totals are kept.
    pub fn calculate_totals(&mut self) -> PlannerResult<&BudgetTotals> {
        self.totals = calculate_totals(&self.inputs, &self.rates)?;
        planner_debug!(
            ComponentId::Planner,
            "Calculated total {} ({} per player)",
            self.totals.total_cost,
            self.totals.cost_per_player
        );
        Ok(&self.totals)
    }

    /// Share link for the current inputs
    pub fn build_share_url(&self) -> String {
        build_share_url(&self.base_url, &self.inputs)
    }

    /// Overwrite inputs from a query string or full share link
    pub fn load_from_url(&mut self, query: &str) -> LoadReport {
        let report = load_from_query(query, &mut self.inputs);
        if !report.applied.is_empty() {
            planner_info!(ComponentId::Planner, "Loaded {} field(s) from share link", report.applied.len());
            self.recompute_if_live();
        }
        report
    }

    /// Copy the share link and report the outcome to the user
    ///
    /// Returns the copied URL. A failed write is reported through the
    /// notifier and returned as an error; it never affects planner state.
    pub async fn copy_share_link(&self) -> PlannerResult<String> {
        let url = self.build_share_url();
        copy_url(self.clipboard.clone(), self.notifier.clone(), url).await
    }

    /// Start an independent copy task
    ///
    /// Each call starts its own write; earlier writes are not cancelled.
    /// The task runs on the current tokio runtime; without one this returns
    /// [`PlannerError::NoRuntime`].
    pub fn spawn_copy_share_link(&self) -> PlannerResult<JoinHandle<PlannerResult<String>>> {
        let runtime = Handle::try_current().map_err(|_| PlannerError::NoRuntime)?;
        let url = self.build_share_url();
        let clipboard = self.clipboard.clone();
        let notifier = self.notifier.clone();
        Ok(runtime.spawn(copy_url(clipboard, notifier, url)))
    }

    /// Restore default inputs and zero the totals
    pub fn reset(&mut self) {
        self.inputs = BudgetInputs::default();
        self.totals = BudgetTotals::default();
    }

    /// Display fields handed to the results view
    pub fn results(&self) -> ResultsView {
        ResultsView::new(self.inputs.team_name.clone(), &self.totals)
    }

    fn recompute_if_live(&mut self) {
        if self.recompute_policy != RecomputePolicy::Live {
            return;
        }
        if let Err(e) = self.calculate_totals() {
            planner_warn!(ComponentId::Planner, "Live recompute skipped: {}", e);
        }
    }
}

async fn copy_url<C, N>(clipboard: Arc<C>, notifier: Arc<N>, url: String) -> PlannerResult<String>
where
    C: Clipboard + ?Sized,
    N: Notifier + ?Sized,
{
    match clipboard.write_text(&url).await {
        Ok(()) => {
            notifier.notify(Notice::LinkCopied { url: url.clone() });
            Ok(url)
        }
        Err(e) => {
            notifier.notify(Notice::CopyFailed { reason: e.to_string() });
            Err(e)
        }
    }
}
