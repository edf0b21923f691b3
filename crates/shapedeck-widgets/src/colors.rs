//! Color swatches and palette pickers.

use egui::{vec2, Color32, CornerRadius, CursorIcon, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::{sizing, theme};

/// Style for color swatches.
#[derive(Clone)]
pub struct ColorSwatchStyle {
    /// Size of the swatch
    pub size: Vec2,
    /// Circle with an inner selection ring (true) or rounded rect with an
    /// accent border (false)
    pub circular: bool,
}

impl Default for ColorSwatchStyle {
    fn default() -> Self {
        Self {
            size: vec2(sizing::SMALL, sizing::SMALL),
            circular: true,
        }
    }
}

impl ColorSwatchStyle {
    /// Rounded-rect swatches, for pickers that sit next to a circular one.
    pub fn square() -> Self {
        Self {
            circular: false,
            ..Self::default()
        }
    }
}

/// A clickable color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    style: ColorSwatchStyle,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            style: ColorSwatchStyle::default(),
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the style.
    pub fn style(mut self, style: ColorSwatchStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.style.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;
            // Light swatches (white, yellow) need an edge to stay visible.
            let edge = Stroke::new(1.0, theme::BORDER);

            if self.style.circular {
                ui.painter().circle_filled(center, radius, self.color);
                ui.painter().circle_stroke(center, radius, edge);
                if self.selected {
                    ui.painter().circle_stroke(
                        center,
                        radius - 3.0,
                        Stroke::new(2.0, ring_color(self.color)),
                    );
                }
            } else {
                let corner = CornerRadius::same(sizing::CORNER_RADIUS);
                ui.painter().rect_filled(rect, corner, self.color);
                ui.painter().rect_stroke(rect, corner, edge, StrokeKind::Inside);
                if self.selected {
                    ui.painter().rect_stroke(
                        rect,
                        corner,
                        Stroke::new(2.0, theme::ACCENT),
                        StrokeKind::Outside,
                    );
                }
            }
        }

        let clicked = response.clicked();
        response.on_hover_text(self.tooltip).on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// Show a row of swatches and return the index of the clicked one.
///
/// `selected` marks the current color.
pub fn palette_picker(
    ui: &mut Ui,
    colors: &[(Color32, &str)],
    selected: Option<usize>,
    style: &ColorSwatchStyle,
) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(4.0, 4.0);
        for (i, (color, name)) in colors.iter().enumerate() {
            let (was_clicked, _) = ColorSwatch::new(*color, name)
                .selected(selected == Some(i))
                .style(style.clone())
                .show(ui);
            if was_clicked {
                clicked = Some(i);
            }
        }
    });
    clicked
}

/// Ring color that contrasts with the swatch fill.
fn ring_color(fill: Color32) -> Color32 {
    let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma > 140.0 {
        Color32::from_gray(30)
    } else {
        Color32::WHITE
    }
}
