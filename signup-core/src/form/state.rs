use std::collections::BTreeMap;

use serde::Serialize;

use super::fields::{Field, FieldErrors, PersonalInfo};
use super::step::Step;
use crate::meta::{Addon, AddonId, Plan};
use crate::pricing::{self, BillingPeriod, PriceTotal};
use crate::util::errors::PriceError;

/// Everything the signup wizard knows. Owned by one component and discarded
/// with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    current_step: Step,
    personal_info: PersonalInfo,
    field_errors: FieldErrors,
    // Stored exactly as listed in the catalog; period-specific prices are
    // derived on read.
    selected_plan: Option<Plan>,
    selected_addons: BTreeMap<AddonId, Addon>,
    billing_period: BillingPeriod,
}

/// What was signed up for, without personal details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionSummary {
    pub plan: Option<String>,
    pub billing_period: BillingPeriod,
    pub addons: Vec<String>,
    pub total: PriceTotal,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn selected_plan(&self) -> Option<&Plan> {
        self.selected_plan.as_ref()
    }

    pub fn selected_addons(&self) -> impl Iterator<Item = &Addon> + '_ {
        self.selected_addons.values()
    }

    pub fn is_addon_selected(&self, id: AddonId) -> bool {
        self.selected_addons.contains_key(&id)
    }

    pub fn is_plan_selected(&self, plan: &Plan) -> bool {
        self.selected_plan.as_ref() == Some(plan)
    }

    pub fn billing_period(&self) -> BillingPeriod {
        self.billing_period
    }

    pub fn is_yearly_billing(&self) -> bool {
        self.billing_period.is_yearly()
    }
}

// Step controller
impl FormState {
    /// Moves one step forward when not on the last step and the personal
    /// info passes validation. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.current_step.next() else {
            return false;
        };
        if !self.validate() {
            return false;
        }
        self.current_step = next;
        true
    }

    /// Moves one step back unless already on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.current_step.previous() {
            Some(previous) => {
                self.current_step = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.current_step.next().is_some()
    }

    pub fn can_go_back(&self) -> bool {
        self.current_step.previous().is_some()
    }

    pub fn progress_percentage(&self) -> u8 {
        self.current_step.progress_percentage()
    }
}

// Validator
impl FormState {
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.personal_info.set(field, value);
    }

    /// Re-marks every personal info field and reports whether all are filled.
    pub fn validate(&mut self) -> bool {
        self.field_errors.check(&self.personal_info)
    }
}

// Selection state
impl FormState {
    pub fn select_plan(&mut self, plan: &Plan) {
        self.selected_plan = Some(plan.clone());
    }

    /// Adds the add-on if absent, removes it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle_addon(&mut self, addon: &Addon) -> bool {
        if self.selected_addons.remove(&addon.id).is_some() {
            false
        } else {
            self.selected_addons.insert(addon.id, addon.clone());
            true
        }
    }

    pub fn set_billing_period(&mut self, period: BillingPeriod) {
        self.billing_period = period;
    }

    pub fn toggle_billing_period(&mut self) {
        self.billing_period = self.billing_period.toggled();
    }
}

// Price calculator
impl FormState {
    pub fn total(&self) -> Result<PriceTotal, PriceError> {
        pricing::calculate_total(
            self.selected_plan.as_ref(),
            self.selected_addons.values(),
            self.billing_period,
        )
    }

    /// The selected plan's price for the current billing period.
    pub fn selected_plan_price(&self) -> Option<Result<String, PriceError>> {
        self.selected_plan
            .as_ref()
            .map(|plan| pricing::display_plan_price(plan, self.billing_period))
    }

    pub fn summary(&self) -> Result<SubscriptionSummary, PriceError> {
        Ok(SubscriptionSummary {
            plan: self.selected_plan.as_ref().map(|plan| plan.name.clone()),
            billing_period: self.billing_period,
            addons: self
                .selected_addons
                .values()
                .map(|addon| addon.name.clone())
                .collect(),
            total: self.total()?,
        })
    }
}
