//! Area and perimeter of plane shapes.
use crate::geometry::triangle::{check_sides, heron_area};
use crate::require;
use crate::solve_result::SolveResult;
use log::info;
use std::f64::consts::PI;

#[derive(Clone, Debug, PartialEq)]
pub enum PlaneShape {
    /// area from base and height when both are given, otherwise from three sides
    Triangle {
        base: Option<f64>,
        height: Option<f64>,
        sides: [Option<f64>; 3],
    },
    Rectangle {
        width: Option<f64>,
        length: Option<f64>,
    },
    Circle {
        radius: Option<f64>,
    },
    Trapezoid {
        top: Option<f64>,
        bottom: Option<f64>,
        height: Option<f64>,
    },
    RegularPolygon {
        sides: Option<u32>,
        side_length: Option<f64>,
    },
}

impl PlaneShape {
    pub fn name(&self) -> &'static str {
        match self {
            PlaneShape::Triangle { .. } => "triangle",
            PlaneShape::Rectangle { .. } => "rectangle",
            PlaneShape::Circle { .. } => "circle",
            PlaneShape::Trapezoid { .. } => "trapezoid",
            PlaneShape::RegularPolygon { .. } => "regular polygon",
        }
    }
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

fn nonpositive(shape: &PlaneShape) -> SolveResult<f64> {
    SolveResult::domain_error(format!("{} lengths must be positive", shape.name()))
}

fn polygon_sides(n: Option<u32>) -> SolveResult<f64> {
    match n {
        None => SolveResult::NotEnoughInput,
        Some(n) if n < 3 => SolveResult::domain_error(format!("a polygon needs 3 sides, got {}", n)),
        Some(n) => SolveResult::Value(n as f64),
    }
}

pub fn area(shape: &PlaneShape) -> SolveResult<f64> {
    match shape {
        PlaneShape::Triangle {
            base,
            height,
            sides,
        } => {
            if let (Some(b), Some(h)) = (base, height) {
                if !b.is_nan() && !h.is_nan() {
                    if !all_positive(&[*b, *h]) {
                        return nonpositive(shape);
                    }
                    return SolveResult::Value(b * h / 2.0);
                }
            }
            let [a, b, c] = require!(sides[0], sides[1], sides[2]);
            info!("no base/height pair, triangle area by Heron's formula");
            heron_area(a, b, c)
        }
        PlaneShape::Rectangle { width, length } => {
            let [w, l] = require!(*width, *length);
            if !all_positive(&[w, l]) {
                return nonpositive(shape);
            }
            SolveResult::Value(w * l)
        }
        PlaneShape::Circle { radius } => {
            let [r] = require!(*radius);
            if !all_positive(&[r]) {
                return nonpositive(shape);
            }
            SolveResult::Value(PI * r * r)
        }
        PlaneShape::Trapezoid {
            top,
            bottom,
            height,
        } => {
            let [t, b, h] = require!(*top, *bottom, *height);
            if !all_positive(&[t, b, h]) {
                return nonpositive(shape);
            }
            SolveResult::Value((t + b) * h / 2.0)
        }
        PlaneShape::RegularPolygon { sides, side_length } => {
            let [s] = require!(*side_length);
            polygon_sides(*sides).and_then(|n| {
                if !all_positive(&[s]) {
                    return nonpositive(shape);
                }
                SolveResult::Value(n * s * s / (4.0 * (PI / n).tan()))
            })
        }
    }
}

pub fn perimeter(shape: &PlaneShape) -> SolveResult<f64> {
    match shape {
        PlaneShape::Triangle { sides, .. } => {
            let [a, b, c] = require!(sides[0], sides[1], sides[2]);
            match check_sides(a, b, c) {
                Ok(()) => SolveResult::Value(a + b + c),
                Err(msg) => SolveResult::domain_error(msg),
            }
        }
        PlaneShape::Rectangle { width, length } => {
            let [w, l] = require!(*width, *length);
            if !all_positive(&[w, l]) {
                return nonpositive(shape);
            }
            SolveResult::Value(2.0 * (w + l))
        }
        PlaneShape::Circle { radius } => {
            let [r] = require!(*radius);
            if !all_positive(&[r]) {
                return nonpositive(shape);
            }
            SolveResult::Value(2.0 * PI * r)
        }
        PlaneShape::Trapezoid {
            top,
            bottom,
            height,
        } => {
            // isosceles trapezoid, both legs are equal
            let [t, b, h] = require!(*top, *bottom, *height);
            if !all_positive(&[t, b, h]) {
                return nonpositive(shape);
            }
            let leg = (((b - t) / 2.0).powi(2) + h * h).sqrt();
            SolveResult::Value(t + b + 2.0 * leg)
        }
        PlaneShape::RegularPolygon { sides, side_length } => {
            let [s] = require!(*side_length);
            polygon_sides(*sides).and_then(|n| {
                if !all_positive(&[s]) {
                    return nonpositive(shape);
                }
                SolveResult::Value(n * s)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triangle_prefers_base_and_height() {
        let t = PlaneShape::Triangle {
            base: Some(10.0),
            height: Some(3.0),
            sides: [Some(3.0), Some(4.0), Some(5.0)],
        };
        assert_eq!(area(&t), SolveResult::Value(15.0));
        assert_eq!(perimeter(&t), SolveResult::Value(12.0));
    }

    #[test]
    fn test_triangle_heron_fallback() {
        let t = PlaneShape::Triangle {
            base: Some(10.0),
            height: None,
            sides: [Some(3.0), Some(4.0), Some(5.0)],
        };
        assert_eq!(area(&t), SolveResult::Value(6.0));
        let bad = PlaneShape::Triangle {
            base: None,
            height: None,
            sides: [Some(1.0), Some(1.0), Some(5.0)],
        };
        assert!(matches!(area(&bad), SolveResult::Error(_)));
        assert!(matches!(perimeter(&bad), SolveResult::Error(_)));
    }

    #[test]
    fn test_rectangle_and_circle() {
        let r = PlaneShape::Rectangle {
            width: Some(2.0),
            length: Some(3.5),
        };
        assert_eq!(area(&r), SolveResult::Value(7.0));
        assert_eq!(perimeter(&r), SolveResult::Value(11.0));
        let c = PlaneShape::Circle { radius: Some(2.0) };
        assert_relative_eq!(area(&c).into_value().unwrap(), 4.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(perimeter(&c).into_value().unwrap(), 4.0 * PI, epsilon = 1e-12);
        let neg = PlaneShape::Circle { radius: Some(-1.0) };
        assert!(matches!(area(&neg), SolveResult::Error(_)));
    }

    #[test]
    fn test_trapezoid() {
        let t = PlaneShape::Trapezoid {
            top: Some(2.0),
            bottom: Some(8.0),
            height: Some(4.0),
        };
        assert_eq!(area(&t), SolveResult::Value(20.0));
        // legs are √(3² + 4²) = 5
        assert_relative_eq!(perimeter(&t).into_value().unwrap(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_regular_polygon() {
        // square of side 2
        let sq = PlaneShape::RegularPolygon {
            sides: Some(4),
            side_length: Some(2.0),
        };
        assert_relative_eq!(area(&sq).into_value().unwrap(), 4.0, epsilon = 1e-12);
        assert_eq!(perimeter(&sq), SolveResult::Value(8.0));
        let digon = PlaneShape::RegularPolygon {
            sides: Some(2),
            side_length: Some(2.0),
        };
        assert!(matches!(area(&digon), SolveResult::Error(_)));
        let missing = PlaneShape::RegularPolygon {
            sides: None,
            side_length: Some(2.0),
        };
        assert_eq!(area(&missing), SolveResult::NotEnoughInput);
    }
}
