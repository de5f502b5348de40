use eframe::egui;

pub fn render_settings_window(app: &mut crate::app::LauncherApp, ctx: &egui::Context) {
	if !app.show_settings { return; }
	let mut open = true;
	let mut changed = false;
	egui::Window::new("Settings").open(&mut open).collapsible(false).resizable(false).show(ctx, |ui| {
		let default_master = app.root.join(&app.settings.executable_name).display().to_string();
		let mut master = app.settings.master_executable.clone().unwrap_or_default();
		ui.horizontal(|ui| {
			ui.label("Master executable:");
			if ui.add(egui::TextEdit::singleline(&mut master).hint_text(default_master).desired_width(260.0)).changed() {
				app.settings.master_executable = if master.trim().is_empty() { None } else { Some(master.clone()) };
				changed = true;
			}
			if ui.button("Browse").clicked() {
				if let Some(p) = rfd::FileDialog::new().set_directory(&app.root).pick_file() {
					app.settings.master_executable = Some(p.display().to_string());
					changed = true;
				}
			}
		});
		// Path validation hint
		let ok = app.store.master_executable_available();
		let col = if ok { egui::Color32::from_rgb(0,200,0) } else { egui::Color32::from_rgb(200,0,0) };
		ui.colored_label(col, if ok { "Master executable found" } else { "Master executable not found" });
		ui.separator();
		ui.horizontal(|ui| {
			ui.label("Custom args:");
			let mut custom = app.settings.custom_launch_options.clone().unwrap_or_default();
			if ui.text_edit_singleline(&mut custom).changed() {
				app.settings.custom_launch_options = if custom.trim().is_empty() { None } else { Some(custom) };
				changed = true;
			}
		});
		if ui.checkbox(&mut app.settings.close_on_launch, "Close launcher after Start").changed() { changed = true; }
		ui.separator();
		let git = option_env!("GIT_COMMIT_HASH").unwrap_or("unknown");
		ui.small(format!("Launcher version: {} ({})", env!("CARGO_PKG_VERSION"), git));
	});
	if changed { app.apply_settings(); }
	if !open { app.show_settings = false; }
}
