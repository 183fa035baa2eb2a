use signup_core::FormState;

use super::ACCENT;
use crate::signup::SignupAction;

/// "Previous" on every step after the first, "Next" on every step but the last.
pub fn render(ui: &mut egui::Ui, state: &FormState, actions: &mut Vec<SignupAction>) {
    ui.horizontal(|ui| {
        if state.can_go_back() && ui.add(egui::Button::new("Previous").frame(false)).clicked() {
            actions.push(SignupAction::GoBackStep);
        }

        if !state.can_advance() {
            return;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let button = egui::Button::new(egui::RichText::new("Next").color(egui::Color32::WHITE))
                .fill(ACCENT)
                .min_size(egui::vec2(110.0, 36.0));
            if ui.add(button).clicked() {
                actions.push(SignupAction::AdvanceStep);
            }
        });
    });
}
