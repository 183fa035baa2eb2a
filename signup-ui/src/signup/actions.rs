use signup_core::{Addon, BillingPeriod, Field, Plan};

#[derive(Debug, Clone)]
pub enum SignupAction {
    // Workflow control
    AdvanceStep,
    GoBackStep,
    Reset,

    // Personal info
    UpdateField { field: Field, value: String },

    // Plan and add-ons
    SelectPlan { plan: Plan },
    ToggleAddon { addon: Addon },

    // Billing
    SetBillingPeriod { period: BillingPeriod },
    ToggleBillingPeriod,
}

impl SignupAction {
    pub fn description(&self) -> &'static str {
        match self {
            SignupAction::AdvanceStep => "Advancing to next step",
            SignupAction::GoBackStep => "Going back to previous step",
            SignupAction::Reset => "Resetting signup",
            SignupAction::UpdateField { .. } => "Updating personal info",
            SignupAction::SelectPlan { .. } => "Selecting plan",
            SignupAction::ToggleAddon { .. } => "Toggling add-on",
            SignupAction::SetBillingPeriod { .. } => "Setting billing period",
            SignupAction::ToggleBillingPeriod => "Toggling billing period",
        }
    }
}
