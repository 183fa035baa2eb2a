// Desktop entry point for the signup UI
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use signup_ui::app::SignupApp;
    use signup_ui::config::SignupConfig;

    signup_ui::wasm_utils::init_logging();

    let config = SignupConfig::load()?;
    let catalog = config.load_catalog()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.application.width, config.application.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title(config.application.title.clone()),
        ..Default::default()
    };
    let app_name = config.application.title.clone();

    eframe::run_native(
        &app_name,
        native_options,
        Box::new(move |cc| Ok(Box::new(SignupApp::new(cc, &config, catalog)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run signup window: {e}"))
}

// The wasm build starts through `signup_ui::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
