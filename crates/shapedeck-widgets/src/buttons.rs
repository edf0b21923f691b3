//! Button components: text buttons and list rows.

use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, Pos2, Sense, Ui};

use crate::{sizing, theme};

/// A full-width text button.
pub struct TextButton<'a> {
    label: &'a str,
    hint: Option<&'a str>,
}

impl<'a> TextButton<'a> {
    /// Create a new text button.
    pub fn new(label: &'a str) -> Self {
        Self { label, hint: None }
    }

    /// Add a muted hint on the right (e.g. a shortcut).
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(ui.available_width(), 24.0);
        let (rect, response) = ui.allocate_at_least(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().text(
                Pos2::new(rect.left() + 8.0, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                egui::FontId::proportional(12.0),
                theme::TEXT,
            );

            if let Some(hint) = self.hint {
                ui.painter().text(
                    Pos2::new(rect.right() - 8.0, rect.center().y),
                    Align2::RIGHT_CENTER,
                    hint,
                    egui::FontId::proportional(11.0),
                    theme::TEXT_MUTED,
                );
            }
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A selectable row in a list: title plus a muted detail line.
pub struct ListRow<'a> {
    title: &'a str,
    detail: &'a str,
    selected: bool,
}

impl<'a> ListRow<'a> {
    pub fn new(title: &'a str, detail: &'a str, selected: bool) -> Self {
        Self {
            title,
            detail,
            selected,
        }
    }

    /// Show the row and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(ui.available_width(), 36.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::SELECTED_BG
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            let title_color = if self.selected { theme::ACCENT } else { theme::TEXT };
            ui.painter().text(
                Pos2::new(rect.left() + 8.0, rect.top() + 11.0),
                Align2::LEFT_CENTER,
                self.title,
                egui::FontId::proportional(12.0),
                title_color,
            );
            ui.painter().text(
                Pos2::new(rect.left() + 8.0, rect.bottom() - 10.0),
                Align2::LEFT_CENTER,
                self.detail,
                egui::FontId::proportional(10.0),
                theme::TEXT_MUTED,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
