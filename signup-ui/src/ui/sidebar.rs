use signup_core::{FormState, Step};

use super::MARINE;

/// Numbered step list. The confirmation screen has no entry, so nothing is
/// highlighted once the signup is confirmed.
pub fn render(ui: &mut egui::Ui, state: &FormState) {
    ui.add_space(24.0);

    for step in Step::ALL {
        let Some(label) = step.sidebar_label() else {
            continue;
        };
        let active = state.current_step() == step;

        ui.horizontal(|ui| {
            step_circle(ui, step.number(), active);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(format!("STEP {}", step.number()))
                        .small()
                        .weak(),
                );
                ui.label(egui::RichText::new(label.to_uppercase()).strong());
            });
        });
        ui.add_space(12.0);
    }

    ui.add_space(12.0);
    ui.add(
        egui::ProgressBar::new(f32::from(state.progress_percentage()) / 100.0)
            .desired_width(160.0)
            .show_percentage(),
    );
}

fn step_circle(ui: &mut egui::Ui, number: u8, active: bool) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::hover());
    let painter = ui.painter();
    let center = rect.center();

    if active {
        painter.circle_filled(center, 15.0, egui::Color32::from_rgb(191, 226, 253));
    } else {
        painter.circle_stroke(center, 15.0, egui::Stroke::new(1.0, ui.visuals().text_color()));
    }

    let text_color = if active { MARINE } else { ui.visuals().text_color() };
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        number.to_string(),
        egui::FontId::proportional(14.0),
        text_color,
    );
}
