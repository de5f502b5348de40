#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

mod app;
mod ui;

use eframe::egui;
use slipstreamlauncher_core::{launcher_root, init_logging, SettingsStore};

fn main() -> anyhow::Result<()> {
    let root = launcher_root()?;
    init_logging(&root);
    let settings_store = SettingsStore::at(&root)?;
    let settings = settings_store.load().unwrap_or_else(|e| {
        tracing::warn!("Using default settings: {:#}", e);
        Default::default()
    });
    tracing::info!("Launcher root: {}", root.display());

    let title = settings.window_title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size(ui::layout::WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app::LauncherApp::new(root, settings_store, settings)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
