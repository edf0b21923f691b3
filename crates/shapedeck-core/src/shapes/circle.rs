//! Circle shape with independent horizontal and vertical compression.

use super::{Property, ShapeBase};
use crate::convert::half;
use kurbo::{BezPath, Ellipse, Point, Shape as KurboShape};

/// A circle of a given radius, squashed along each axis by a compression
/// factor. Width and height are derived and never stored.
#[derive(Debug)]
pub struct Circle {
    pub(crate) base: ShapeBase,
    radius: f64,
    horizontal_compression: f64,
    vertical_compression: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self::new()
    }
}

impl Circle {
    pub const DEFAULT_RADIUS: f64 = 100.0;

    /// Create an uncompressed circle of radius 100.
    pub fn new() -> Self {
        Self {
            base: ShapeBase::new(),
            radius: Self::DEFAULT_RADIUS,
            horizontal_compression: 1.0,
            vertical_compression: 1.0,
        }
    }

    pub fn base(&self) -> &ShapeBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the radius. A change also republishes `Width` and `Height`.
    pub fn set_radius(&mut self, radius: f64) -> bool {
        let changed = self
            .base
            .notifier
            .set_f64(&mut self.radius, radius, Property::Radius);
        if changed {
            self.base.notifier.notify(&Property::Width);
            self.base.notifier.notify(&Property::Height);
        }
        changed
    }

    pub fn horizontal_compression(&self) -> f64 {
        self.horizontal_compression
    }

    /// Set the horizontal factor. A change also republishes `Width`.
    pub fn set_horizontal_compression(&mut self, factor: f64) -> bool {
        let changed = self.base.notifier.set_f64(
            &mut self.horizontal_compression,
            factor,
            Property::HorizontalCompression,
        );
        if changed {
            self.base.notifier.notify(&Property::Width);
        }
        changed
    }

    pub fn vertical_compression(&self) -> f64 {
        self.vertical_compression
    }

    /// Set the vertical factor. A change also republishes `Height`.
    pub fn set_vertical_compression(&mut self, factor: f64) -> bool {
        let changed = self.base.notifier.set_f64(
            &mut self.vertical_compression,
            factor,
            Property::VerticalCompression,
        );
        if changed {
            self.base.notifier.notify(&Property::Height);
        }
        changed
    }

    pub fn width(&self) -> f64 {
        self.radius * self.horizontal_compression
    }

    pub fn height(&self) -> f64 {
        self.radius * self.vertical_compression
    }

    /// Ellipse inscribed in the derived width and height, centred at `center`.
    pub fn outline(&self, center: Point) -> BezPath {
        Ellipse::new(center, (half(self.width()), half(self.height())), 0.0).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record(circle: &mut Circle) -> Rc<RefCell<Vec<Property>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        circle
            .base_mut()
            .subscribe(move |p| sink.borrow_mut().push(*p));
        log
    }

    #[test]
    fn test_circle_defaults() {
        let circle = Circle::new();
        assert!((circle.radius() - 100.0).abs() < f64::EPSILON);
        assert!((circle.horizontal_compression() - 1.0).abs() < f64::EPSILON);
        assert!((circle.vertical_compression() - 1.0).abs() < f64::EPSILON);
        assert!((circle.width() - 100.0).abs() < f64::EPSILON);
        assert!((circle.height() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_radius_republishes_both_dimensions() {
        let mut circle = Circle::new();
        let log = record(&mut circle);

        assert!(circle.set_radius(50.0));
        assert_eq!(
            *log.borrow(),
            vec![Property::Radius, Property::Width, Property::Height]
        );
        assert!((circle.width() - 50.0).abs() < f64::EPSILON);
        assert!((circle.height() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_horizontal_compression_only_touches_width() {
        let mut circle = Circle::new();
        let log = record(&mut circle);

        assert!(circle.set_horizontal_compression(0.5));
        assert_eq!(
            *log.borrow(),
            vec![Property::HorizontalCompression, Property::Width]
        );
        assert!((circle.width() - 50.0).abs() < f64::EPSILON);
        assert!((circle.height() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vertical_compression_only_touches_height() {
        let mut circle = Circle::new();
        let log = record(&mut circle);

        assert!(circle.set_vertical_compression(2.0));
        assert_eq!(
            *log.borrow(),
            vec![Property::VerticalCompression, Property::Height]
        );
        assert!((circle.height() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unchanged_writes_are_silent() {
        let mut circle = Circle::new();
        let log = record(&mut circle);
        assert!(!circle.set_radius(100.0));
        assert!(!circle.set_horizontal_compression(1.0));
        assert!(!circle.set_vertical_compression(1.0));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_nan_radius_rewrite_is_silent() {
        let mut circle = Circle::new();
        let log = record(&mut circle);
        assert!(circle.set_radius(f64::NAN));
        assert!(!circle.set_radius(f64::NAN));
        assert!(!circle.set_horizontal_compression(1.0));
        assert!(circle.width().is_nan());
        assert_eq!(
            *log.borrow(),
            vec![Property::Radius, Property::Width, Property::Height]
        );
    }

    #[test]
    fn test_derived_follows_new_radius() {
        let mut circle = Circle::new();
        circle.set_horizontal_compression(0.5);
        circle.set_vertical_compression(3.0);
        circle.set_radius(20.0);
        assert!((circle.width() - 10.0).abs() < f64::EPSILON);
        assert!((circle.height() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_and_negative_factors() {
        let mut circle = Circle::new();
        circle.set_horizontal_compression(0.0);
        circle.set_vertical_compression(-1.0);
        assert!(circle.width().abs() < f64::EPSILON);
        assert!((circle.height() + 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_outline_follows_derived_size() {
        let mut circle = Circle::new();
        circle.set_horizontal_compression(2.0);
        let bounds = circle.outline(Point::new(0.0, 0.0)).bounding_box();
        // Bezier approximation of the ellipse stays within the path tolerance.
        assert!((bounds.width() - 200.0).abs() < 0.5);
        assert!((bounds.height() - 100.0).abs() < 0.5);
    }
}
