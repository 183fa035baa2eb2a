use signup_core::pricing::display_plan_price;
use signup_core::{BillingPeriod, Catalog, FormState, Plan};

use super::{price_or_placeholder, ACCENT};
use crate::signup::SignupAction;

pub fn render(
    ui: &mut egui::Ui,
    state: &FormState,
    catalog: &Catalog,
    actions: &mut Vec<SignupAction>,
) {
    let period = state.billing_period();

    ui.horizontal(|ui| {
        for plan in &catalog.plans {
            if plan_card(ui, plan, period, state.is_plan_selected(plan)).clicked() {
                actions.push(SignupAction::SelectPlan { plan: plan.clone() });
            }
        }
    });

    ui.add_space(24.0);
    billing_switch(ui, period, actions);
}

fn plan_card(ui: &mut egui::Ui, plan: &Plan, period: BillingPeriod, selected: bool) -> egui::Response {
    let stroke = if selected {
        egui::Stroke::new(1.5, ACCENT)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };
    let fill = if selected {
        ui.visuals().faint_bg_color
    } else {
        ui.visuals().panel_fill
    };

    let price = price_or_placeholder(display_plan_price(plan, period));

    egui::Frame::group(ui.style())
        .stroke(stroke)
        .fill(fill)
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(130.0);
            ui.vertical(|ui| {
                plan_badge(ui, plan);
                ui.add_space(28.0);
                ui.label(egui::RichText::new(&plan.name).strong());
                ui.label(egui::RichText::new(price).weak());
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Stand-in for the plan icon asset: the plan's initial on a coloured disc.
fn plan_badge(ui: &mut egui::Ui, plan: &Plan) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
    let color = match plan.icon.as_deref() {
        Some("icon-arcade.svg") => egui::Color32::from_rgb(255, 175, 126),
        Some("icon-advanced.svg") => egui::Color32::from_rgb(240, 134, 134),
        _ => ACCENT,
    };
    let initial = plan.name.chars().next().unwrap_or('?').to_string();

    let painter = ui.painter();
    painter.circle_filled(rect.center(), 20.0, color);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(18.0),
        egui::Color32::WHITE,
    );
}

fn billing_switch(ui: &mut egui::Ui, period: BillingPeriod, actions: &mut Vec<SignupAction>) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(egui::Margin::same(10.0))
        .rounding(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for option in [BillingPeriod::Monthly, BillingPeriod::Yearly] {
                    if option == BillingPeriod::Yearly {
                        let mut yearly = period.is_yearly();
                        if ui.checkbox(&mut yearly, "").changed() {
                            actions.push(SignupAction::ToggleBillingPeriod);
                        }
                    }

                    let text = egui::RichText::new(option.label()).strong();
                    let text = if option == period { text } else { text.weak() };
                    if ui.selectable_label(false, text).clicked() {
                        actions.push(SignupAction::SetBillingPeriod { period: option });
                    }
                }
            });
        });
}
