use signup_core::form::REQUIRED_MESSAGE;
use signup_core::{Field, FormState};

use crate::signup::SignupAction;

pub fn render(ui: &mut egui::Ui, state: &FormState, actions: &mut Vec<SignupAction>) {
    for field in Field::ALL {
        let marked = state.field_errors().is_marked(field);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(field.label()).strong());
            if marked {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(ui.visuals().error_fg_color, REQUIRED_MESSAGE);
                });
            }
        });

        // The edit buffer is rebuilt from state every frame; changes go through the manager.
        let mut value = state.personal_info().get(field).to_owned();
        let response = ui.add(
            egui::TextEdit::singleline(&mut value)
                .hint_text(field.placeholder())
                .desired_width(f32::INFINITY)
                .margin(egui::vec2(12.0, 8.0)),
        );

        if marked {
            ui.painter().rect_stroke(
                response.rect.expand(1.0),
                4.0,
                egui::Stroke::new(1.5, ui.visuals().error_fg_color),
            );
        }

        if response.changed() {
            actions.push(SignupAction::UpdateField { field, value });
        }

        ui.add_space(14.0);
    }
}
