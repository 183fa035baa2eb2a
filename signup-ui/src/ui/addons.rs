use signup_core::pricing::display_addon_price;
use signup_core::{Catalog, FormState};

use super::ACCENT;
use crate::signup::SignupAction;

pub fn render(
    ui: &mut egui::Ui,
    state: &FormState,
    catalog: &Catalog,
    actions: &mut Vec<SignupAction>,
) {
    for addon in &catalog.addons {
        let selected = state.is_addon_selected(addon.id);
        let stroke = if selected {
            egui::Stroke::new(1.5, ACCENT)
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke
        };

        egui::Frame::group(ui.style())
            .stroke(stroke)
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let mut checked = selected;
                    if ui.checkbox(&mut checked, "").changed() {
                        actions.push(SignupAction::ToggleAddon {
                            addon: addon.clone(),
                        });
                    }

                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&addon.name).strong());
                        ui.label(egui::RichText::new(&addon.description).small().weak());
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(display_addon_price(addon))
                                .color(ACCENT),
                        );
                    });
                });
            });

        ui.add_space(10.0);
    }
}
