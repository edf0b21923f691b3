//! Rectangle shape.

use super::{Property, ShapeBase};
use crate::convert::degrees_to_radians;
use kurbo::{Affine, BezPath, Point, Rect, Shape as KurboShape};

/// A rectangle with independent width, height and rotation.
#[derive(Debug)]
pub struct Rectangle {
    pub(crate) base: ShapeBase,
    width: f64,
    height: f64,
    rotation_degrees: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new()
    }
}

impl Rectangle {
    pub const DEFAULT_WIDTH: f64 = 100.0;
    pub const DEFAULT_HEIGHT: f64 = 100.0;

    /// Create a 100x100 unrotated rectangle.
    pub fn new() -> Self {
        Self {
            base: ShapeBase::new(),
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            rotation_degrees: 0.0,
        }
    }

    pub fn base(&self) -> &ShapeBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) -> bool {
        self.base.notifier.set_f64(&mut self.width, width, Property::Width)
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) -> bool {
        self.base
            .notifier
            .set_f64(&mut self.height, height, Property::Height)
    }

    /// Rotation around the centre, in degrees.
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn set_rotation_degrees(&mut self, degrees: f64) -> bool {
        self.base
            .notifier
            .set_f64(&mut self.rotation_degrees, degrees, Property::RotationDegrees)
    }

    /// Outline centred at `center`, rotated around it.
    pub fn outline(&self, center: Point) -> BezPath {
        let mut path = Rect::from_center_size(center, (self.width, self.height)).to_path(0.1);
        if self.rotation_degrees != 0.0 {
            path.apply_affine(Affine::rotate_about(
                degrees_to_radians(self.rotation_degrees),
                center,
            ));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record(rect: &mut Rectangle) -> Rc<RefCell<Vec<Property>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        rect.base_mut().subscribe(move |p| sink.borrow_mut().push(*p));
        log
    }

    #[test]
    fn test_rectangle_defaults() {
        let rect = Rectangle::new();
        assert!((rect.width() - 100.0).abs() < f64::EPSILON);
        assert!((rect.height() - 100.0).abs() < f64::EPSILON);
        assert!(rect.rotation_degrees().abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_value_is_silent() {
        let mut rect = Rectangle::new();
        let log = record(&mut rect);
        assert!(!rect.set_width(100.0));
        assert!(!rect.set_height(100.0));
        assert!(!rect.set_rotation_degrees(0.0));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_nan_rewrite_is_silent() {
        let mut rect = Rectangle::new();
        let log = record(&mut rect);
        assert!(rect.set_width(f64::NAN));
        assert!(!rect.set_width(f64::NAN));
        assert!(!rect.set_rotation_degrees(-0.0));
        assert!(rect.width().is_nan());
        assert_eq!(*log.borrow(), vec![Property::Width]);
    }

    #[test]
    fn test_each_attribute_notifies_itself() {
        let mut rect = Rectangle::new();
        let log = record(&mut rect);
        assert!(rect.set_width(120.0));
        assert!(rect.set_height(80.0));
        assert!(rect.set_rotation_degrees(45.0));
        assert_eq!(
            *log.borrow(),
            vec![Property::Width, Property::Height, Property::RotationDegrees]
        );
    }

    #[test]
    fn test_negative_values_accepted() {
        let mut rect = Rectangle::new();
        assert!(rect.set_width(-10.0));
        assert!(rect.set_rotation_degrees(-90.0));
        assert!((rect.width() + 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_outline_bounds() {
        let rect = Rectangle::new();
        let bounds = rect.outline(Point::new(200.0, 150.0)).bounding_box();
        assert!((bounds.x0 - 150.0).abs() < 1e-9);
        assert!((bounds.y0 - 100.0).abs() < 1e-9);
        assert!((bounds.width() - 100.0).abs() < 1e-9);
        assert!((bounds.height() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotated_outline_keeps_center() {
        let mut rect = Rectangle::new();
        rect.set_width(200.0);
        rect.set_rotation_degrees(90.0);
        let bounds = rect.outline(Point::new(0.0, 0.0)).bounding_box();
        assert!((bounds.width() - 100.0).abs() < 1e-6);
        assert!((bounds.height() - 200.0).abs() < 1e-6);
        assert!(bounds.center().x.abs() < 1e-6);
    }
}
