//! Shape definitions and their observable attributes.

mod circle;
mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

use crate::observable::{ChangeNotifier, SubscriptionId};
use kurbo::{BezPath, Point};
use peniko::Color;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Names an observable attribute of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    FillColor,
    LabelText,
    LabelColor,
    Width,
    Height,
    RotationDegrees,
    Radius,
    HorizontalCompression,
    VerticalCompression,
}

impl Property {
    /// Attribute name as shown to listeners and in logs.
    pub fn name(self) -> &'static str {
        match self {
            Property::FillColor => "fill_color",
            Property::LabelText => "label_text",
            Property::LabelColor => "label_color",
            Property::Width => "width",
            Property::Height => "height",
            Property::RotationDegrees => "rotation_degrees",
            Property::Radius => "radius",
            Property::HorizontalCompression => "horizontal_compression",
            Property::VerticalCompression => "vertical_compression",
        }
    }
}

/// A color from the fixed shape palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Pink,
    Brown,
    Black,
    White,
}

/// The colors offered to every shape, in display order.
pub const PALETTE: [NamedColor; 10] = [
    NamedColor::Red,
    NamedColor::Green,
    NamedColor::Blue,
    NamedColor::Yellow,
    NamedColor::Purple,
    NamedColor::Orange,
    NamedColor::Pink,
    NamedColor::Brown,
    NamedColor::Black,
    NamedColor::White,
];

impl NamedColor {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Red => "Red",
            NamedColor::Green => "Green",
            NamedColor::Blue => "Blue",
            NamedColor::Yellow => "Yellow",
            NamedColor::Purple => "Purple",
            NamedColor::Orange => "Orange",
            NamedColor::Pink => "Pink",
            NamedColor::Brown => "Brown",
            NamedColor::Black => "Black",
            NamedColor::White => "White",
        }
    }

    /// sRGB components (CSS named-color values).
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Red => (255, 0, 0),
            NamedColor::Green => (0, 128, 0),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Yellow => (255, 255, 0),
            NamedColor::Purple => (128, 0, 128),
            NamedColor::Orange => (255, 165, 0),
            NamedColor::Pink => (255, 192, 203),
            NamedColor::Brown => (165, 42, 42),
            NamedColor::Black => (0, 0, 0),
            NamedColor::White => (255, 255, 255),
        }
    }

    /// Position in [`PALETTE`].
    pub fn palette_index(self) -> usize {
        PALETTE
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }
}

impl From<NamedColor> for Color {
    fn from(color: NamedColor) -> Self {
        let (r, g, b) = color.rgb();
        Color::from_rgba8(r, g, b, 255)
    }
}

/// Variant tag of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl ShapeKind {
    /// Display title for this kind of shape.
    pub fn title(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
        }
    }
}

/// Attributes shared by every shape: colors, label and the change notifier.
#[derive(Debug)]
pub struct ShapeBase {
    id: ShapeId,
    fill_color: NamedColor,
    label_text: String,
    label_color: NamedColor,
    pub(crate) notifier: ChangeNotifier<Property>,
}

impl Default for ShapeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeBase {
    /// Create base attributes with a fresh id and default colors.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            fill_color: NamedColor::Green,
            label_text: String::new(),
            label_color: NamedColor::Red,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn fill_color(&self) -> NamedColor {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: NamedColor) -> bool {
        self.notifier.set(&mut self.fill_color, color, Property::FillColor)
    }

    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    pub fn set_label_text(&mut self, text: impl Into<String>) -> bool {
        self.notifier
            .set(&mut self.label_text, text.into(), Property::LabelText)
    }

    pub fn label_color(&self) -> NamedColor {
        self.label_color
    }

    pub fn set_label_color(&mut self, color: NamedColor) -> bool {
        self.notifier
            .set(&mut self.label_color, color, Property::LabelColor)
    }

    /// The palette offered for fill and label colors.
    pub fn available_colors(&self) -> &'static [NamedColor; 10] {
        &PALETTE
    }

    /// Subscribe to attribute changes of the owning shape.
    pub fn subscribe(&mut self, listener: impl FnMut(&Property) + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

/// Enum wrapper for all shape types.
#[derive(Debug)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind().title()
    }

    pub fn base(&self) -> &ShapeBase {
        match self {
            Shape::Rectangle(s) => &s.base,
            Shape::Circle(s) => &s.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ShapeBase {
        match self {
            Shape::Rectangle(s) => &mut s.base,
            Shape::Circle(s) => &mut s.base,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.base().id()
    }

    /// Bounding width (stored for rectangles, derived for circles).
    pub fn width(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.width(),
            Shape::Circle(s) => s.width(),
        }
    }

    /// Bounding height (stored for rectangles, derived for circles).
    pub fn height(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.height(),
            Shape::Circle(s) => s.height(),
        }
    }

    pub fn available_colors(&self) -> &'static [NamedColor; 10] {
        self.base().available_colors()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Property) + 'static) -> SubscriptionId {
        self.base_mut().subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.base_mut().unsubscribe(id)
    }

    /// Outline of the shape centred at `center`, for drawing.
    pub fn outline(&self, center: Point) -> BezPath {
        match self {
            Shape::Rectangle(s) => s.outline(center),
            Shape::Circle(s) => s.outline(center),
        }
    }

    pub fn as_rectangle_mut(&mut self) -> Option<&mut Rectangle> {
        match self {
            Shape::Rectangle(s) => Some(s),
            Shape::Circle(_) => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match self {
            Shape::Circle(s) => Some(s),
            Shape::Rectangle(_) => None,
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
