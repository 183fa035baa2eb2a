use signup_core::Catalog;

use crate::config::SignupConfig;
use crate::signup::{SignupAction, SignupManager};
use crate::ui::{self, StepContext};
use crate::wasm_utils;

/// Subscription signup wizard
pub struct SignupApp {
    manager: SignupManager,
    support_email: String,
}

impl SignupApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &SignupConfig, catalog: Catalog) -> Self {
        wasm_utils::set_panic_hook();

        let visuals = if config.application.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);

        log::info!(
            "Starting signup with {} plans and {} add-ons",
            catalog.plans.len(),
            catalog.addons.len()
        );

        Self {
            manager: SignupManager::new(catalog),
            support_email: config.application.support_email.clone(),
        }
    }
}

impl eframe::App for SignupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply what the previous frame's widgets asked for
        self.manager.update();

        let mut actions = Vec::new();
        let state = self.manager.state();

        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New signup").clicked() {
                        actions.push(SignupAction::Reset);
                        ui.close_menu();
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    {
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    }
                });
            });
        });

        egui::SidePanel::left("steps")
            .resizable(false)
            .exact_width(200.0)
            .show(ctx, |ui| ui::sidebar::render(ui, state));

        let step_ctx = StepContext {
            catalog: self.manager.catalog(),
            support_email: &self.support_email,
        };

        egui::TopBottomPanel::bottom("navigation")
            .show_separator_line(false)
            .min_height(60.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui::nav::render(ui, state, &mut actions);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(16.0);
                ui::render_step(ui, state, &step_ctx, &mut actions);
            });
        });

        if !actions.is_empty() {
            for action in actions {
                self.manager.dispatch(action);
            }
            ctx.request_repaint();
        }
    }
}
