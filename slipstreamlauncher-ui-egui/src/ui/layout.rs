use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

pub const WINDOW_SIZE: Vec2 = vec2(800.0, 600.0);

pub const NEW_ACCOUNT_RECT: Rect = Rect::from_min_max(pos2(20.0, 520.0), pos2(380.0, 580.0));
pub const ACCOUNT_NAME_RECT: Rect = Rect::from_min_max(pos2(420.0, 520.0), pos2(620.0, 580.0));
pub const DELETE_RECT: Rect = Rect::from_min_max(pos2(620.0, 520.0), pos2(680.0, 580.0));
pub const START_RECT: Rect = Rect::from_min_max(pos2(680.0, 520.0), pos2(780.0, 580.0));
pub const SETTINGS_RECT: Rect = Rect::from_min_max(pos2(756.0, 12.0), pos2(788.0, 44.0));

pub const DROPDOWN_ROW_HEIGHT: f32 = 45.0;
pub const DROPDOWN_TEXT_INSET: f32 = 10.0;

/// Transient presentation state. Everything else is re-read from the store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub dropdown_open: bool,
}

impl ViewState {
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Closes the dropdown for a click that lands neither on it nor on the account
    /// name control. Returns whether it closed.
    pub fn close_on_outside_click(&mut self, click: Pos2, entries: usize) -> bool {
        if !self.dropdown_open {
            return false;
        }
        let on_dropdown = dropdown_rect(entries).is_some_and(|r| r.contains(click));
        if on_dropdown || ACCOUNT_NAME_RECT.contains(click) {
            return false;
        }
        self.dropdown_open = false;
        true
    }
}

/// Area covered by the dropdown list; rows grow upwards from the account name control.
pub fn dropdown_rect(entries: usize) -> Option<Rect> {
    if entries == 0 {
        return None;
    }
    let bottom = ACCOUNT_NAME_RECT.min.y;
    let top = bottom - entries as f32 * DROPDOWN_ROW_HEIGHT;
    Some(Rect::from_min_max(pos2(ACCOUNT_NAME_RECT.min.x, top), pos2(ACCOUNT_NAME_RECT.max.x, bottom)))
}

pub fn dropdown_row_rect(index: usize, entries: usize) -> Option<Rect> {
    let area = dropdown_rect(entries)?;
    if index >= entries {
        return None;
    }
    let top = area.min.y + index as f32 * DROPDOWN_ROW_HEIGHT;
    Some(Rect::from_min_size(pos2(area.min.x, top), vec2(area.width(), DROPDOWN_ROW_HEIGHT)))
}
