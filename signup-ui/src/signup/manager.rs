use std::collections::VecDeque;

use signup_core::{Addon, BillingPeriod, Catalog, Field, FormState, Plan, Step};

use super::SignupAction;

pub struct SignupManager {
    // Current state - single source of truth
    state: FormState,

    catalog: Catalog,

    // Actions queued by render functions, applied on the next update
    pending_actions: VecDeque<SignupAction>,
}

impl SignupManager {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: FormState::default(),
            catalog,
            pending_actions: VecDeque::new(),
        }
    }

    /// UI calls this while rendering; the action is only queued.
    pub fn dispatch(&mut self, action: SignupAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Call this each frame before rendering - applies every queued action in order.
    pub fn update(&mut self) {
        while let Some(action) = self.pending_actions.pop_front() {
            self.handle_action(action);
        }
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }

    pub fn clear_pending_actions(&mut self) {
        self.pending_actions.clear();
    }

    fn handle_action(&mut self, action: SignupAction) {
        match action {
            SignupAction::AdvanceStep => self.handle_advance_step(),
            SignupAction::GoBackStep => self.handle_go_back_step(),
            SignupAction::Reset => self.handle_reset(),
            SignupAction::UpdateField { field, value } => self.handle_update_field(field, value),
            SignupAction::SelectPlan { plan } => self.handle_select_plan(&plan),
            SignupAction::ToggleAddon { addon } => self.handle_toggle_addon(&addon),
            SignupAction::SetBillingPeriod { period } => self.handle_set_billing_period(period),
            SignupAction::ToggleBillingPeriod => {
                let period = self.state.billing_period().toggled();
                self.handle_set_billing_period(period);
            }
        }
    }
}

// Action handler implementations
impl SignupManager {
    fn handle_advance_step(&mut self) {
        if !self.state.advance() {
            let missing: Vec<_> = self.state.field_errors().marked().collect();
            if missing.is_empty() {
                log::debug!("Already on the last step");
            } else {
                log::info!("Cannot advance: required fields missing {:?}", missing);
            }
            return;
        }

        let step = self.state.current_step();
        log::info!("Advanced to step {}: {:?}", step.number(), step);

        if step == Step::Confirmation {
            self.log_confirmation();
        }
    }

    fn handle_go_back_step(&mut self) {
        if self.state.retreat() {
            let step = self.state.current_step();
            log::info!("Went back to step {}: {:?}", step.number(), step);
        }
    }

    fn handle_reset(&mut self) {
        self.state = FormState::default();
        self.pending_actions.clear();
        log::info!("Signup state reset");
    }

    fn handle_update_field(&mut self, field: Field, value: String) {
        self.state.set_field(field, value);
    }

    fn handle_select_plan(&mut self, plan: &Plan) {
        if self.catalog.plan(&plan.name).is_none() {
            log::warn!("Selected plan {} is not in the catalog", plan.name);
        }
        self.state.select_plan(plan);
        log::info!("Plan selected: {}", plan.name);
        self.report_pricing_failure();
    }

    fn handle_toggle_addon(&mut self, addon: &Addon) {
        let selected = self.state.toggle_addon(addon);
        log::info!(
            "Add-on {} {}",
            addon.name,
            if selected { "added" } else { "removed" }
        );
        self.report_pricing_failure();
    }

    fn handle_set_billing_period(&mut self, period: BillingPeriod) {
        self.state.set_billing_period(period);
        log::info!("Billing period: {}", period.label());
        self.report_pricing_failure();
    }

    /// Logged once per selection change; the screens just show a placeholder.
    fn report_pricing_failure(&self) {
        if let Err(error) = self.state.total() {
            log::error!("Current selection cannot be priced: {}", error);
        }
    }

    fn log_confirmation(&self) {
        let summary = match self.state.summary() {
            Ok(summary) => summary,
            Err(error) => {
                log::error!("Failed to price confirmed subscription: {}", error);
                return;
            }
        };

        match serde_json::to_string(&summary) {
            Ok(json) => log::info!("Subscription confirmed: {}", json),
            Err(error) => log::error!("Failed to serialize subscription summary: {}", error),
        }
    }
}
