use signup_core::Step;

use super::ACCENT;

pub fn render(ui: &mut egui::Ui, support_email: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(egui::RichText::new("✔").size(48.0).color(ACCENT));
        ui.add_space(16.0);
        ui.label(egui::RichText::new(Step::Confirmation.title()).heading().strong());
        ui.add_space(8.0);
        ui.label(egui::RichText::new(format!(
            "{} If you ever need support, please feel free to email us at {}.",
            Step::Confirmation.description(),
            support_email
        ))
        .weak());
    });
}
