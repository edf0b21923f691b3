//! UI components using egui.

use egui::{Align2, Color32, Context, DragValue, FontId, Pos2, Rect, Vec2};
use shapedeck_core::{NamedColor, Shape, ShapeController, ShapeId, PALETTE};
use shapedeck_widgets::{
    palette_picker, panel_frame, section_label, separator, theme, ColorSwatchStyle, ListRow, TextButton,
};

/// UI state that persists between frames.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Screen area between the side panels that the shape preview is
    /// centred in (logical points).
    pub canvas_rect: Rect,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
        }
    }
}

/// Actions triggered by UI interactions.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    AddRectangle,
    AddCircle,
    Select(ShapeId),
    ClearSelection,
    SetWidth(f64),
    SetHeight(f64),
    SetRotation(f64),
    SetRadius(f64),
    SetHorizontalCompression(f64),
    SetVerticalCompression(f64),
    SetLabelText(String),
    SetFillColor(NamedColor),
    SetLabelColor(NamedColor),
}

/// Convert a palette color to an egui color.
pub fn color32(color: NamedColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// One-line description of a shape's geometry for the shape list.
pub fn shape_summary(shape: &Shape) -> String {
    match shape {
        Shape::Rectangle(rect) => format!(
            "{} × {}, {}°",
            rect.width(),
            rect.height(),
            rect.rotation_degrees()
        ),
        Shape::Circle(circle) => format!(
            "r {} ({} × {})",
            circle.radius(),
            circle.width(),
            circle.height()
        ),
    }
}

/// Render all UI and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState, controller: &ShapeController) -> Option<UiAction> {
    #[allow(deprecated)]
    let screen_rect = ctx.input(|i| i.content_rect());

    let shortcut_action = handle_shortcuts(ctx);
    let (list_action, list_rect) = render_shape_list(ctx, controller);
    let (properties_action, properties_rect) = render_properties_panel(ctx, controller);
    ui_state.canvas_rect = preview_area(screen_rect, Some(list_rect), properties_rect);
    render_label(ctx, ui_state, controller);

    shortcut_action.or(list_action).or(properties_action)
}

/// The part of `screen` between the left and right panels.
///
/// Falls back to the whole screen when the panels overlap.
fn preview_area(screen: Rect, left: Option<Rect>, right: Option<Rect>) -> Rect {
    let min_x = left.map_or(screen.min.x, |r| r.max.x.max(screen.min.x));
    let max_x = right.map_or(screen.max.x, |r| r.min.x.min(screen.max.x));
    if max_x <= min_x {
        return screen;
    }
    Rect::from_x_y_ranges(min_x..=max_x, screen.y_range())
}

fn handle_shortcuts(ctx: &Context) -> Option<UiAction> {
    if ctx.wants_keyboard_input() {
        return None;
    }
    ctx.input(|i| {
        if i.key_pressed(egui::Key::R) {
            Some(UiAction::AddRectangle)
        } else if i.key_pressed(egui::Key::C) {
            Some(UiAction::AddCircle)
        } else if i.key_pressed(egui::Key::Escape) {
            Some(UiAction::ClearSelection)
        } else {
            None
        }
    })
}

/// Left panel: creation buttons and the shape list.
fn render_shape_list(ctx: &Context, controller: &ShapeController) -> (Option<UiAction>, Rect) {
    let mut action = None;
    let panel_width = 200.0;

    let rect = egui::Area::new(egui::Id::new("shape_list"))
        .anchor(Align2::LEFT_TOP, Vec2::new(12.0, 12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(panel_width - 24.0);
                ui.spacing_mut().item_spacing = Vec2::new(0.0, 2.0);

                if TextButton::new("Add rectangle").hint("R").show(ui) {
                    action = Some(UiAction::AddRectangle);
                }
                if TextButton::new("Add circle").hint("C").show(ui) {
                    action = Some(UiAction::AddCircle);
                }
                separator(ui);

                if controller.is_empty() {
                    section_label(ui, "No shapes yet");
                    return;
                }
                section_label(ui, "Shapes");

                egui::ScrollArea::vertical().max_height(480.0).show(ui, |ui| {
                    for shape in controller.shapes() {
                        let selected = controller.selected_id() == Some(shape.id());
                        let summary = shape_summary(shape);
                        if ListRow::new(shape.title(), &summary, selected).show(ui) {
                            action = Some(if selected {
                                UiAction::ClearSelection
                            } else {
                                UiAction::Select(shape.id())
                            });
                        }
                    }
                });
            });
        })
        .response
        .rect;

    (action, rect)
}

/// Drag field for a numeric attribute. Returns the new value if edited.
fn number_field(ui: &mut egui::Ui, label: &str, value: f64, speed: f64) -> Option<f64> {
    let mut edited = value;
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).size(11.0).color(theme::TEXT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            changed = ui.add(DragValue::new(&mut edited).speed(speed)).changed();
        });
    });
    changed.then_some(edited)
}

fn read_only_field(ui: &mut egui::Ui, label: &str, value: f64) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).size(11.0).color(theme::TEXT_MUTED));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(format!("{:.2}", value)).size(11.0).color(theme::TEXT_MUTED));
        });
    });
}

/// Right panel: editable attributes of the selected shape.
///
/// Returns no rect when nothing is selected and the panel is hidden.
fn render_properties_panel(ctx: &Context, controller: &ShapeController) -> (Option<UiAction>, Option<Rect>) {
    let Some(shape) = controller.selected_shape() else {
        return (None, None);
    };
    let mut action = None;
    let panel_width = 220.0;

    let rect = egui::Area::new(egui::Id::new("properties"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-12.0, 12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(panel_width - 24.0);
                ui.spacing_mut().item_spacing = Vec2::new(0.0, 6.0);

                ui.label(
                    egui::RichText::new(shape.title())
                        .size(14.0)
                        .strong()
                        .color(theme::TEXT),
                );

                match shape {
                    Shape::Rectangle(rect) => {
                        if let Some(v) = number_field(ui, "Width", rect.width(), 1.0) {
                            action = Some(UiAction::SetWidth(v));
                        }
                        if let Some(v) = number_field(ui, "Height", rect.height(), 1.0) {
                            action = Some(UiAction::SetHeight(v));
                        }
                        if let Some(v) = number_field(ui, "Rotation", rect.rotation_degrees(), 1.0) {
                            action = Some(UiAction::SetRotation(v));
                        }
                    }
                    Shape::Circle(circle) => {
                        if let Some(v) = number_field(ui, "Radius", circle.radius(), 1.0) {
                            action = Some(UiAction::SetRadius(v));
                        }
                        if let Some(v) = number_field(
                            ui,
                            "Horizontal compression",
                            circle.horizontal_compression(),
                            0.01,
                        ) {
                            action = Some(UiAction::SetHorizontalCompression(v));
                        }
                        if let Some(v) = number_field(
                            ui,
                            "Vertical compression",
                            circle.vertical_compression(),
                            0.01,
                        ) {
                            action = Some(UiAction::SetVerticalCompression(v));
                        }
                        read_only_field(ui, "Width", circle.width());
                        read_only_field(ui, "Height", circle.height());
                    }
                }

                separator(ui);
                section_label(ui, "Label");
                let mut text = shape.base().label_text().to_string();
                if ui
                    .add(egui::TextEdit::singleline(&mut text).desired_width(f32::INFINITY))
                    .changed()
                {
                    action = Some(UiAction::SetLabelText(text));
                }

                let palette: Vec<(Color32, &str)> =
                    PALETTE.iter().map(|c| (color32(*c), c.name())).collect();

                section_label(ui, "Fill color");
                let fill = shape.base().fill_color();
                if let Some(i) =
                    palette_picker(ui, &palette, Some(fill.palette_index()), &ColorSwatchStyle::default())
                {
                    action = Some(UiAction::SetFillColor(PALETTE[i]));
                }

                section_label(ui, "Label color");
                let label_color = shape.base().label_color();
                if let Some(i) = palette_picker(
                    ui,
                    &palette,
                    Some(label_color.palette_index()),
                    &ColorSwatchStyle::square(),
                ) {
                    action = Some(UiAction::SetLabelColor(PALETTE[i]));
                }
            });
        })
        .response
        .rect;

    (action, Some(rect))
}

/// Paint the selected shape's label over the preview.
fn render_label(ctx: &Context, ui_state: &UiState, controller: &ShapeController) {
    let Some(shape) = controller.selected_shape() else {
        return;
    };
    let text = shape.base().label_text();
    if text.is_empty() {
        return;
    }
    let center: Pos2 = ui_state.canvas_rect.center();
    ctx.layer_painter(egui::LayerId::background()).text(
        center,
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(16.0),
        color32(shape.base().label_color()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(ui_state: &mut UiState, controller: &ShapeController) -> Option<UiAction> {
        let ctx = Context::default();
        let mut action = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = render_ui(ctx, ui_state, controller);
        });
        action
    }

    #[test]
    fn test_color32() {
        assert_eq!(color32(NamedColor::Green), Color32::from_rgb(0, 128, 0));
    }

    #[test]
    fn test_shape_summary() {
        let mut controller = ShapeController::new();
        controller.create_rectangle();
        controller.create_circle();
        assert_eq!(shape_summary(&controller.shapes()[0]), "100 × 100, 0°");
        assert_eq!(shape_summary(&controller.shapes()[1]), "r 100 (100 × 100)");
    }

    #[test]
    fn test_idle_frame_has_no_action() {
        let mut controller = ShapeController::new();
        let id = controller.create_circle();
        controller.select(Some(id));
        if let Some(shape) = controller.selected_shape_mut() {
            shape.base_mut().set_label_text("hi");
        }

        let mut ui_state = UiState::default();
        assert_eq!(run_frame(&mut ui_state, &controller), None);
        assert!(ui_state.canvas_rect.is_positive());
    }

    #[test]
    fn test_preview_area_between_panels() {
        let screen = Rect::from_min_max(Pos2::ZERO, Pos2::new(1000.0, 800.0));
        let left = Rect::from_min_max(Pos2::new(12.0, 12.0), Pos2::new(212.0, 300.0));
        let right = Rect::from_min_max(Pos2::new(768.0, 12.0), Pos2::new(988.0, 500.0));

        let area = preview_area(screen, Some(left), Some(right));
        assert_eq!(area, Rect::from_min_max(Pos2::new(212.0, 0.0), Pos2::new(768.0, 800.0)));
        assert_eq!(area.center(), Pos2::new(490.0, 400.0));

        let area = preview_area(screen, Some(left), None);
        assert_eq!(area.min.x, 212.0);
        assert_eq!(area.max.x, 1000.0);
    }

    #[test]
    fn test_preview_area_falls_back_when_panels_overlap() {
        let screen = Rect::from_min_max(Pos2::ZERO, Pos2::new(300.0, 400.0));
        let left = Rect::from_min_max(Pos2::new(12.0, 12.0), Pos2::new(212.0, 300.0));
        let right = Rect::from_min_max(Pos2::new(68.0, 12.0), Pos2::new(288.0, 500.0));
        assert_eq!(preview_area(screen, Some(left), Some(right)), screen);
    }

    #[test]
    fn test_canvas_rect_excludes_panels() {
        let mut controller = ShapeController::new();
        let id = controller.create_rectangle();
        controller.select(Some(id));

        let mut ui_state = UiState::default();
        run_frame(&mut ui_state, &controller);
        let canvas = ui_state.canvas_rect;
        assert!(canvas.is_positive());
        // Both panels are anchored 12 points in from the screen edges.
        assert!(canvas.min.x > 12.0);
        assert!(canvas.min.y.abs() < f32::EPSILON);
    }
}
