//! Open/closed: `AreaCalculator` works with any `Shape`, so adding a shape never
//! touches the calculator.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::transcript::Transcript;
use std::f64::consts::PI;

pub trait Shape {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Default)]
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn calculate_area(&self, shape: &dyn Shape) -> f64 {
        shape.area()
    }

    pub fn total_area(&self, shapes: &[&dyn Shape]) -> f64 {
        shapes.iter().map(|shape| self.calculate_area(*shape)).sum()
    }
}

pub struct OpenClosedDemo;

impl Demo for OpenClosedDemo {
    fn name(&self) -> &'static str {
        "open-closed"
    }

    fn summary(&self) -> &'static str {
        "area calculator extended by new shapes, never modified"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        let circle = Circle::new(5.0);
        let rectangle = Rectangle::new(4.0, 6.0);
        let calculator = AreaCalculator;
        out.line(format!("Circle Area: {}", calculator.calculate_area(&circle)));
        out.line(format!(
            "Rectangle Area: {}",
            calculator.calculate_area(&rectangle)
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Square(f64);

    impl Shape for Square {
        fn area(&self) -> f64 {
            self.0 * self.0
        }
    }

    #[test]
    fn test_circle_area() {
        let area = AreaCalculator.calculate_area(&Circle::new(5.0));
        assert_eq!(area, 78.53981633974483);
        assert_eq!(area.to_string(), "78.53981633974483");
    }

    #[test]
    fn test_rectangle_area() {
        let area = AreaCalculator.calculate_area(&Rectangle::new(4.0, 6.0));
        assert_eq!(area, 24.0);
        assert_eq!(area.to_string(), "24");
    }

    #[test]
    fn test_new_shape_needs_no_calculator_change() {
        let square = Square(3.0);
        let rectangle = Rectangle::new(2.0, 5.0);
        assert_eq!(AreaCalculator.total_area(&[&square, &rectangle]), 19.0);
        assert_eq!(AreaCalculator.total_area(&[]), 0.0);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        OpenClosedDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            ["Circle Area: 78.53981633974483", "Rectangle Area: 24"]
        );
    }

    proptest! {
        #[test]
        fn prop_rectangle_area_is_width_times_height(w in 0.0f64..1.0e4, h in 0.0f64..1.0e4) {
            prop_assert_eq!(Rectangle::new(w, h).area(), w * h);
        }
    }
}
