use crate::ui::layout::ViewState;
use crate::ui::shell::{primary_click_pos, render_shell, ShellAction};
use eframe::{egui, App};
use slipstreamlauncher_core::{AccountStore, AppSettings, LauncherConfig, LauncherPaths, SettingsStore};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::warn;

pub struct Toast { pub msg: String, pub color: egui::Color32, pub until: std::time::Instant }

pub struct LauncherApp {
	pub root: PathBuf,
	pub store: AccountStore,
	pub settings_store: SettingsStore,
	pub settings: AppSettings,
	/// Last state read from disk; replaced wholesale after every mutation.
	pub config: LauncherConfig,
	pub view: ViewState,
	pub show_error_modal: Option<String>,
	/// Name being typed while the new-account prompt is open.
	pub new_account: Option<String>,
	pub pending_delete: Option<String>,
	pub show_settings: bool,
	pub toasts: Vec<Toast>,
	close_requested: bool,
}

impl LauncherApp {
	pub fn new(root: PathBuf, settings_store: SettingsStore, settings: AppSettings) -> Self {
		let store = AccountStore::new(LauncherPaths::new(&root, &settings));
		let mut app = Self {
			root,
			store,
			settings_store,
			settings,
			config: LauncherConfig::default(),
			view: ViewState::default(),
			show_error_modal: None,
			new_account: None,
			pending_delete: None,
			show_settings: false,
			toasts: Vec::new(),
			close_requested: false,
		};
		if let Err(e) = app.store.paths().ensure_dirs() {
			app.report_error(format!("create {}: {}", app.store.paths().accounts_dir.display(), e));
		}
		app.reload();
		app
	}

	/// Re-reads the config from disk. The dropdown always starts closed afterwards.
	pub fn reload(&mut self) {
		self.view.close_dropdown();
		match self.store.load() {
			Ok(config) => self.config = config,
			Err(e) => self.report_error(e),
		}
	}

	pub fn report_error(&mut self, err: impl Display) {
		let msg = err.to_string();
		warn!("{}", msg);
		self.show_error_modal = Some(msg);
	}

	pub fn add_toast(&mut self, msg: &str, color: egui::Color32) { self.toasts.push(Toast { msg: msg.to_string(), color, until: std::time::Instant::now() + std::time::Duration::from_secs(4) }); }

	fn draw_toasts(&mut self, ctx: &egui::Context) {
		let now = std::time::Instant::now();
		self.toasts.retain(|t| t.until > now);
		let mut y = 12.0;
		for (i, t) in self.toasts.iter().enumerate() {
			egui::Area::new(egui::Id::new(format!("toast-{i}"))).fixed_pos(egui::pos2(20.0, y)).show(ctx, |ui| { ui.colored_label(t.color, &t.msg); });
			y += 22.0;
		}
	}

	fn modal_open(&self) -> bool {
		self.new_account.is_some() || self.pending_delete.is_some() || self.show_error_modal.is_some()
	}

	pub fn begin_new_account(&mut self) {
		if !self.store.master_executable_available() {
			let path = self.store.paths().master_executable.display().to_string();
			self.report_error(format!("{} not found", path));
			return;
		}
		self.new_account = Some(String::new());
	}

	pub fn add_account(&mut self, name: &str) {
		if name.trim().is_empty() { return; }
		match self.store.add_account(name) {
			Ok(_) => self.add_toast(&format!("Created account '{}'", name.trim()), egui::Color32::LIGHT_GREEN),
			Err(e) => self.report_error(e),
		}
		self.reload();
	}

	pub fn delete_account(&mut self, name: &str) {
		match self.store.delete_account(name) {
			Ok(_) => self.add_toast(&format!("Deleted account '{}'", name), egui::Color32::LIGHT_GREEN),
			Err(e) => self.report_error(e),
		}
		self.reload();
	}

	pub fn switch_account(&mut self, name: &str) {
		if let Err(e) = self.store.switch_account(name) { self.report_error(e); }
		self.reload();
	}

	pub fn start_selected(&mut self) {
		let Some(name) = self.config.selected_account().map(str::to_string) else { return; };
		match self.store.launch_account(&name, &self.settings) {
			Ok(_) if self.settings.close_on_launch => self.close_requested = true,
			Ok(_) => self.add_toast(&format!("Launched '{}'", name), egui::Color32::LIGHT_GREEN),
			Err(e) => self.report_error(e),
		}
		self.reload();
	}

	/// Persists edited settings and rebuilds the store so path changes take effect.
	pub fn apply_settings(&mut self) {
		if let Err(e) = self.settings_store.save(&self.settings) {
			self.report_error(format!("{:#}", e));
		}
		self.store = AccountStore::new(LauncherPaths::new(&self.root, &self.settings));
	}

	fn dispatch(&mut self, action: ShellAction) {
		match action {
			ShellAction::NewAccount => self.begin_new_account(),
			ShellAction::ToggleDropdown => self.view.toggle_dropdown(),
			ShellAction::Delete => {
				if let Some(name) = self.config.selected_account() { self.pending_delete = Some(name.to_string()); }
			}
			ShellAction::Start => self.start_selected(),
			ShellAction::Switch(name) => self.switch_account(&name),
			ShellAction::OpenSettings => self.show_settings = true,
		}
	}
}

impl App for LauncherApp {
	fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
		if !self.toasts.is_empty() { ctx.request_repaint_after(std::time::Duration::from_millis(250)); }

		let interactive = !self.modal_open();
		let background = self.store.paths().background_image.clone();
		let mut action = None;
		egui::CentralPanel::default().frame(egui::Frame::none()).show(ctx, |ui| {
			if interactive {
				let others = self.config.other_accounts().len();
				if let Some(pos) = primary_click_pos(ui) { self.view.close_on_outside_click(pos, others); }
			}
			action = render_shell(ui, &self.config, &self.view, &background, interactive);
		});
		if let Some(action) = action { self.dispatch(action); }

		crate::ui::dialogs::render_new_account_dialog(self, ctx);
		crate::ui::dialogs::render_delete_dialog(self, ctx);
		crate::ui::settings::render_settings_window(self, ctx);
		crate::ui::dialogs::render_error_modal(self, ctx);
		self.draw_toasts(ctx);

		if self.close_requested { ctx.send_viewport_cmd(egui::ViewportCommand::Close); }
	}
}
