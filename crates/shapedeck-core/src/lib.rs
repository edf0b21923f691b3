//! ShapeDeck Core Library
//!
//! Platform-agnostic observable shape model for the ShapeDeck editor.

pub mod controller;
pub mod convert;
pub mod observable;
pub mod shapes;

pub use controller::{ControllerEvent, ShapeController};
pub use observable::{same_f64, set_if_changed, set_if_changed_by, ChangeNotifier, SubscriptionId};
pub use shapes::{Circle, NamedColor, Property, Rectangle, Shape, ShapeBase, ShapeId, ShapeKind, PALETTE};
