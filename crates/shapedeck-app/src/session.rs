//! Applies UI actions to the shape model and tracks pending redraws.

use std::cell::Cell;
use std::rc::Rc;

use shapedeck_core::{ControllerEvent, Shape, ShapeController, ShapeId};

use crate::ui::UiAction;

/// The shape controller plus the change listeners the shell installs on it.
///
/// Every controller event and shape attribute change marks the session
/// dirty; the shell redraws while it is dirty.
pub struct Session {
    controller: ShapeController,
    dirty: Rc<Cell<bool>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let dirty = Rc::new(Cell::new(false));
        let mut controller = ShapeController::new();

        let flag = dirty.clone();
        controller.subscribe(move |event| {
            match event {
                ControllerEvent::ShapeAdded { index, id } => {
                    log::debug!("Shape {} added at {}", id, index)
                }
                ControllerEvent::SelectionChanged => log::debug!("Selection changed"),
            }
            flag.set(true);
        });

        Self { controller, dirty }
    }

    pub fn controller(&self) -> &ShapeController {
        &self.controller
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Apply a UI action. Attribute edits target the selected shape and are
    /// ignored when nothing (or a shape of the wrong kind) is selected.
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::AddRectangle => {
                let id = self.controller.create_rectangle();
                self.watch(id);
            }
            UiAction::AddCircle => {
                let id = self.controller.create_circle();
                self.watch(id);
            }
            UiAction::Select(id) => {
                self.controller.select(Some(id));
            }
            UiAction::ClearSelection => {
                self.controller.select(None);
            }
            UiAction::SetWidth(v) => {
                self.edit_rectangle(|r| r.set_width(v));
            }
            UiAction::SetHeight(v) => {
                self.edit_rectangle(|r| r.set_height(v));
            }
            UiAction::SetRotation(v) => {
                self.edit_rectangle(|r| r.set_rotation_degrees(v));
            }
            UiAction::SetRadius(v) => {
                self.edit_circle(|c| c.set_radius(v));
            }
            UiAction::SetHorizontalCompression(v) => {
                self.edit_circle(|c| c.set_horizontal_compression(v));
            }
            UiAction::SetVerticalCompression(v) => {
                self.edit_circle(|c| c.set_vertical_compression(v));
            }
            UiAction::SetLabelText(text) => {
                if let Some(shape) = self.controller.selected_shape_mut() {
                    shape.base_mut().set_label_text(text);
                }
            }
            UiAction::SetFillColor(color) => {
                if let Some(shape) = self.controller.selected_shape_mut() {
                    shape.base_mut().set_fill_color(color);
                }
            }
            UiAction::SetLabelColor(color) => {
                if let Some(shape) = self.controller.selected_shape_mut() {
                    shape.base_mut().set_label_color(color);
                }
            }
        }
    }

    /// Subscribe to a newly created shape's attribute changes.
    fn watch(&mut self, id: ShapeId) {
        let flag = self.dirty.clone();
        if let Some(shape) = self.controller.shape_mut(id) {
            shape.subscribe(move |property| {
                log::debug!("Shape {} changed {}", id, property.name());
                flag.set(true);
            });
        }
    }

    fn edit_rectangle(&mut self, edit: impl FnOnce(&mut shapedeck_core::Rectangle) -> bool) {
        match self.controller.selected_shape_mut().and_then(Shape::as_rectangle_mut) {
            Some(rect) => {
                edit(rect);
            }
            None => log::warn!("No rectangle selected"),
        }
    }

    fn edit_circle(&mut self, edit: impl FnOnce(&mut shapedeck_core::Circle) -> bool) {
        match self.controller.selected_shape_mut().and_then(Shape::as_circle_mut) {
            Some(circle) => {
                edit(circle);
            }
            None => log::warn!("No circle selected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapedeck_core::NamedColor;

    #[test]
    fn test_add_marks_dirty() {
        let mut session = Session::new();
        assert!(!session.take_dirty());

        session.apply(UiAction::AddRectangle);
        assert_eq!(session.controller().len(), 1);
        assert!(session.take_dirty());
        assert!(!session.take_dirty());
    }

    #[test]
    fn test_edits_route_to_selected_shape() {
        let mut session = Session::new();
        session.apply(UiAction::AddCircle);
        let id = session.controller().shapes()[0].id();
        session.apply(UiAction::Select(id));
        session.take_dirty();

        session.apply(UiAction::SetRadius(50.0));
        assert!(session.take_dirty());
        let shape = session.controller().selected_shape().unwrap();
        assert!((shape.width() - 50.0).abs() < f64::EPSILON);
        assert!((shape.height() - 50.0).abs() < f64::EPSILON);

        session.apply(UiAction::SetFillColor(NamedColor::Blue));
        session.apply(UiAction::SetLabelText("moon".to_string()));
        let base = session.controller().selected_shape().unwrap().base();
        assert_eq!(base.fill_color(), NamedColor::Blue);
        assert_eq!(base.label_text(), "moon");
    }

    #[test]
    fn test_unchanged_edit_stays_clean() {
        let mut session = Session::new();
        session.apply(UiAction::AddRectangle);
        let id = session.controller().shapes()[0].id();
        session.apply(UiAction::Select(id));
        session.take_dirty();

        session.apply(UiAction::SetWidth(100.0));
        assert!(!session.take_dirty());
    }

    #[test]
    fn test_wrong_kind_edit_ignored() {
        let mut session = Session::new();
        session.apply(UiAction::AddRectangle);
        let id = session.controller().shapes()[0].id();
        session.apply(UiAction::Select(id));
        session.take_dirty();

        session.apply(UiAction::SetRadius(10.0));
        assert!(!session.take_dirty());
        assert!((session.controller().shapes()[0].width() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_edit_without_selection_ignored() {
        let mut session = Session::new();
        session.apply(UiAction::AddCircle);
        session.take_dirty();

        session.apply(UiAction::SetLabelText("x".to_string()));
        assert!(!session.take_dirty());
        assert!(session.controller().shapes()[0].base().label_text().is_empty());
    }

    #[test]
    fn test_clear_selection() {
        let mut session = Session::new();
        session.apply(UiAction::AddCircle);
        let id = session.controller().shapes()[0].id();
        session.apply(UiAction::Select(id));
        session.apply(UiAction::ClearSelection);
        assert!(session.controller().selected_shape().is_none());
    }
}
