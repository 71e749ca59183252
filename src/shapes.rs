use crate::utils::PI;

/// Capability set every shape variant must satisfy: a pure area computation
/// and a side-effecting console description.
pub trait Shape {
    fn area(&self) -> f64;
    fn draw(&self);
}

pub struct Circle {
    radius: f64,
}

impl Circle {
    /// The radius is taken as-is with no sign check, matching the C++ demo.
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn draw(&self) {
        println!("Drawing circle with radius: {}", self.radius);
    }
}

/// Sums the areas of a heterogeneous set of shapes via dynamic dispatch.
pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|shape| shape.area()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_circle_area_radius_five() {
        let circle = Circle::new(5.0);
        assert!((circle.area() - 78.53981633974999).abs() < EPSILON);
    }

    #[test]
    fn test_circle_area_zero_radius() {
        let circle = Circle::new(0.0);
        assert_eq!(circle.area(), 0.0);
    }

    #[test]
    fn test_negative_radius_accepted_without_validation() {
        // No sign check at construction; squaring makes the area of
        // radius -1 come out as +PI.
        let circle = Circle::new(-1.0);
        assert_eq!(circle.radius(), -1.0);
        assert!((circle.area() - PI).abs() < EPSILON);
    }

    #[test]
    fn test_area_is_recomputed_not_stored() {
        let circle = Circle::new(2.0);
        let first = circle.area();
        let second = circle.area();
        assert_eq!(first, second);
        assert!((first - PI * 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_dynamic_dispatch_through_box() {
        let shape: Box<dyn Shape> = Box::new(Circle::new(1.0));
        assert!((shape.area() - PI).abs() < EPSILON);
    }

    #[test]
    fn test_total_area_sums_all_shapes() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(1.0)),
            Box::new(Circle::new(2.0)),
        ];
        assert!((total_area(&shapes) - (PI + PI * 4.0)).abs() < EPSILON);
    }

    #[test]
    fn test_total_area_empty_is_zero() {
        let shapes: Vec<Box<dyn Shape>> = Vec::new();
        assert_eq!(total_area(&shapes), 0.0);
    }
}
