use signup_core::pricing::display_addon_price;
use signup_core::FormState;

use super::{price_or_placeholder, ACCENT};

pub fn render(ui: &mut egui::Ui, state: &FormState) {
    let period = state.billing_period();

    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(egui::Margin::same(16.0))
        .rounding(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                let name = state.selected_plan().map(|plan| plan.name.as_str()).unwrap_or("");
                ui.label(egui::RichText::new(format!("{name} ({})", period.label())).strong());

                let price = state
                    .selected_plan_price()
                    .map(price_or_placeholder)
                    .unwrap_or_default();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(price).strong());
                });
            });

            ui.separator();

            for addon in state.selected_addons() {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&addon.name).weak());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(display_addon_price(addon));
                    });
                });
            }
        });

    ui.add_space(16.0);

    let total = price_or_placeholder(state.total().map(|total| total.to_string()));
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("Total (per {})", period.unit())).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(total).strong().size(18.0).color(ACCENT));
        });
    });
}
