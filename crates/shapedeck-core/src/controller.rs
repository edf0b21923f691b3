//! Shape collection and current selection.

use crate::observable::{ChangeNotifier, SubscriptionId};
use crate::shapes::{Circle, Rectangle, Shape, ShapeId};

/// Events published by [`ShapeController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// A shape was appended at `index`.
    ShapeAdded { index: usize, id: ShapeId },
    /// The selected shape changed (including to or from none).
    SelectionChanged,
}

/// Owns the ordered shape collection and tracks the selected shape.
///
/// Shapes are only ever appended; selection is held as a [`ShapeId`].
#[derive(Debug, Default)]
pub struct ShapeController {
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
    notifier: ChangeNotifier<ControllerEvent>,
}

impl ShapeController {
    /// Create a controller with no shapes and no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a default rectangle.
    pub fn create_rectangle(&mut self) -> ShapeId {
        self.push(Rectangle::new().into())
    }

    /// Append a default circle.
    pub fn create_circle(&mut self) -> ShapeId {
        self.push(Circle::new().into())
    }

    fn push(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        let index = self.shapes.len();
        log::debug!("Adding {} {} at {}", shape.title(), id, index);
        self.shapes.push(shape);
        self.notifier
            .notify(&ControllerEvent::ShapeAdded { index, id });
        id
    }

    /// All shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.shape(id))
    }

    pub fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        let id = self.selected?;
        self.shape_mut(id)
    }

    /// Change the selection.
    ///
    /// Ids not present in the collection are rejected and leave the
    /// selection untouched. Returns `true` if the selection changed.
    pub fn select(&mut self, id: Option<ShapeId>) -> bool {
        if let Some(id) = id {
            if self.shape(id).is_none() {
                log::warn!("Ignoring selection of unknown shape {}", id);
                return false;
            }
        }
        self.notifier
            .set(&mut self.selected, id, ControllerEvent::SelectionChanged)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ControllerEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
