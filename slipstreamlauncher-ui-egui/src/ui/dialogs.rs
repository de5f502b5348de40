use eframe::egui;

pub fn render_new_account_dialog(app: &mut crate::app::LauncherApp, ctx: &egui::Context) {
	let Some(mut name) = app.new_account.take() else { return; };
	let mut submit = false;
	let mut cancel = false;
	egui::Window::new("New account").collapsible(false).resizable(false).anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0)).show(ctx, |ui| {
		ui.label("Account name:");
		let edit = ui.text_edit_singleline(&mut name);
		edit.request_focus();
		if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) { submit = true; }
		if ui.input(|i| i.key_pressed(egui::Key::Escape)) { cancel = true; }
		ui.horizontal(|ui| {
			if ui.button("OK").clicked() { submit = true; }
			if ui.button("Cancel").clicked() { cancel = true; }
		});
	});
	if submit {
		app.add_account(&name);
	} else if !cancel {
		app.new_account = Some(name);
	}
}

pub fn render_delete_dialog(app: &mut crate::app::LauncherApp, ctx: &egui::Context) {
	let Some(name) = app.pending_delete.clone() else { return; };
	egui::Window::new("Confirmation").collapsible(false).resizable(false).anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0)).show(ctx, |ui| {
		ui.label(format!("Delete '{}'?", name));
		ui.label("Its folder and executable copy will be removed.");
		ui.horizontal(|ui| {
			if ui.button("Yes").clicked() { app.pending_delete = None; app.delete_account(&name); }
			if ui.button("No").clicked() { app.pending_delete = None; }
		});
	});
}

pub fn render_error_modal(app: &mut crate::app::LauncherApp, ctx: &egui::Context) {
	if let Some(msg) = app.show_error_modal.clone() {
		egui::Window::new("Error").collapsible(false).resizable(true).anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0)).show(ctx, |ui| {
			ui.colored_label(egui::Color32::RED, &msg);
			ui.horizontal(|ui| {
				if ui.button("Copy details").clicked() { ui.output_mut(|o| o.copied_text = msg.clone()); app.add_toast("Copied error", egui::Color32::LIGHT_GREEN); }
				if ui.button("Close").clicked() { app.show_error_modal = None; }
			});
		});
	}
}
