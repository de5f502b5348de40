use crate::ui::layout::{
    dropdown_rect, dropdown_row_rect, ViewState, ACCOUNT_NAME_RECT, DELETE_RECT, DROPDOWN_TEXT_INSET,
    NEW_ACCOUNT_RECT, SETTINGS_RECT, START_RECT,
};
use eframe::egui::load::{TextureLoadResult, TexturePoll};
use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense, Stroke, Vec2};
use slipstreamlauncher_core::LauncherConfig;
use std::path::Path;

pub const FALLBACK_BACKGROUND: Color32 = Color32::from_rgb(0x0a, 0x0e, 0x27);
const DROPDOWN_FILL: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
const DISABLED_TEXT: Color32 = Color32::from_gray(110);

/// What the user asked for this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    NewAccount,
    ToggleDropdown,
    Delete,
    Start,
    Switch(String),
    OpenSettings,
}

fn text_button(ui: &mut egui::Ui, id: &str, rect: Rect, text: &str, left_aligned: bool, enabled: bool) -> egui::Response {
    let sense = if enabled { Sense::click() } else { Sense::hover() };
    let response = ui.interact(rect, ui.id().with(id), sense);
    let color = if !enabled {
        DISABLED_TEXT
    } else if response.hovered() {
        Color32::from_rgb(0xcc, 0xdd, 0xff)
    } else {
        Color32::WHITE
    };
    let (pos, anchor) = if left_aligned {
        (rect.left_center() + Vec2::new(15.0, 0.0), Align2::LEFT_CENTER)
    } else {
        (rect.center(), Align2::CENTER_CENTER)
    };
    ui.painter().text(pos, anchor, text, FontId::proportional(16.0), color);
    response
}

/// Only a fully decoded texture replaces the plain fill; pending or failed loads don't.
fn background_ready(poll: &TextureLoadResult) -> bool {
    matches!(poll, Ok(TexturePoll::Ready { .. }))
}

fn paint_background(ui: &egui::Ui, rect: Rect, background: &Path) {
    if background.is_file() {
        let image = egui::Image::new(format!("file://{}", background.display()));
        if background_ready(&image.load_for_size(ui.ctx(), rect.size())) {
            image.paint_at(ui, rect);
            return;
        }
    }
    ui.painter().rect_filled(rect, 0.0, FALLBACK_BACKGROUND);
}

/// Draws the launcher from `config` and returns the action clicked, if any.
/// `interactive` is false while a dialog is up.
pub fn render_shell(
    ui: &mut egui::Ui,
    config: &LauncherConfig,
    view: &ViewState,
    background: &Path,
    interactive: bool,
) -> Option<ShellAction> {
    let area = ui.max_rect();
    let at = |r: Rect| r.translate(area.min.to_vec2());
    paint_background(ui, area, background);

    let mut action = None;
    let selected = config.selected_account();

    if text_button(ui, "new-account", at(NEW_ACCOUNT_RECT), "New Account", false, interactive).clicked() {
        action = Some(ShellAction::NewAccount);
    }

    let name_resp = text_button(ui, "account-name", at(ACCOUNT_NAME_RECT), selected.unwrap_or("No account"), true, interactive);
    if name_resp.clicked() {
        action = Some(ShellAction::ToggleDropdown);
    }
    if let Some(exe) = selected.and_then(|n| config.accounts.get(n)) {
        let size = std::fs::metadata(exe).map(|m| humansize::format_size(m.len(), humansize::BINARY));
        let hint = match size {
            Ok(size) => format!("{} ({})", exe.display(), size),
            Err(_) => format!("{} (missing)", exe.display()),
        };
        name_resp.on_hover_text(hint);
    }

    if text_button(ui, "delete", at(DELETE_RECT), "🗑", false, interactive && selected.is_some()).clicked() {
        action = Some(ShellAction::Delete);
    }
    if text_button(ui, "start", at(START_RECT), "Start", false, interactive && selected.is_some()).clicked() {
        action = Some(ShellAction::Start);
    }
    if text_button(ui, "settings", at(SETTINGS_RECT), "⚙", false, interactive).clicked() {
        action = Some(ShellAction::OpenSettings);
    }

    if view.dropdown_open {
        let others = config.other_accounts();
        if let Some(list) = dropdown_rect(others.len()) {
            ui.painter().rect_filled(at(list), 0.0, DROPDOWN_FILL);
        }
        for (i, name) in others.iter().enumerate() {
            let Some(row) = dropdown_row_rect(i, others.len()).map(at) else { continue };
            let resp = ui.interact(row, ui.id().with(("dropdown-row", i)), if interactive { Sense::click() } else { Sense::hover() });
            if resp.hovered() {
                ui.painter().rect_filled(row, 0.0, Color32::from_rgb(0x22, 0x26, 0x3a));
            }
            ui.painter().rect_stroke(row, 0.0, Stroke::new(1.0, Color32::WHITE));
            ui.painter().text(
                row.left_center() + Vec2::new(DROPDOWN_TEXT_INSET, 0.0),
                Align2::LEFT_CENTER,
                *name,
                FontId::proportional(14.0),
                Color32::WHITE,
            );
            if resp.clicked() {
                action = Some(ShellAction::Switch(name.to_string()));
            }
        }
    }

    action
}

/// Position of a primary click this frame, in layout coordinates.
pub fn primary_click_pos(ui: &egui::Ui) -> Option<egui::Pos2> {
    let origin = ui.max_rect().min.to_vec2();
    ui.input(|i| if i.pointer.primary_clicked() { i.pointer.interact_pos() } else { None })
        .map(|p| p - origin)
}
