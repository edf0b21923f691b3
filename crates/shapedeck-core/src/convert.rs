//! One-way display conversions.

/// Half of a dimension, used to centre a shape on an anchor point.
pub fn half(value: f64) -> f64 {
    value / 2.0
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half() {
        assert!((half(100.0) - 50.0).abs() < f64::EPSILON);
        assert!((half(-3.0) + 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
    }
}
