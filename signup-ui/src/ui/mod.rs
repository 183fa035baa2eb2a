// Pure render functions, one module per step. Each one:
// 1. Reads FormState (immutable)
// 2. Renders UI based on state
// 3. Pushes SignupActions for the manager to apply on the next update

pub mod addons;
pub mod confirmation;
pub mod nav;
pub mod personal_info;
pub mod plan;
pub mod sidebar;
pub mod summary;

use signup_core::{Catalog, FormState, PriceError, Step};

use crate::signup::SignupAction;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(71, 61, 255);
pub const MARINE: egui::Color32 = egui::Color32::from_rgb(2, 41, 90);

/// What a step screen needs besides the form state.
pub struct StepContext<'a> {
    pub catalog: &'a Catalog,
    pub support_email: &'a str,
}

/// Header plus the body of the current step.
pub fn render_step(
    ui: &mut egui::Ui,
    state: &FormState,
    ctx: &StepContext<'_>,
    actions: &mut Vec<SignupAction>,
) {
    let step = state.current_step();

    if step == Step::Confirmation {
        confirmation::render(ui, ctx.support_email);
        return;
    }

    render_header(ui, step);

    match step {
        Step::PersonalInfo => personal_info::render(ui, state, actions),
        Step::SelectPlan => plan::render(ui, state, ctx.catalog, actions),
        Step::AddOns => addons::render(ui, state, ctx.catalog, actions),
        Step::Summary => summary::render(ui, state),
        Step::Confirmation => {}
    }
}

/// Shown where a price cannot be computed. The manager logs the failure when
/// the selection changes; render code stays silent.
pub const PRICE_PLACEHOLDER: &str = "—";

pub fn price_or_placeholder(price: Result<String, PriceError>) -> String {
    price.unwrap_or_else(|_| PRICE_PLACEHOLDER.to_string())
}

fn render_header(ui: &mut egui::Ui, step: Step) {
    ui.label(egui::RichText::new(step.title()).heading().strong());
    ui.label(egui::RichText::new(step.description()).weak());
    ui.add_space(20.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_or_placeholder() {
        assert_eq!(price_or_placeholder(Ok("$9/mo".to_string())), "$9/mo");
        assert_eq!(
            price_or_placeholder(Err(PriceError::TotalOverflow("Big".to_string()))),
            PRICE_PLACEHOLDER
        );
    }
}
