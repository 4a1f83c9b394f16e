//! y = a·f(b·(x - c)) + d for f in sin, cos, tan with x in degrees.
use crate::numerical::sampler::{Point, sample};
use crate::solve_result::SolveResult;
use crate::trigonometry::equations::TrigFunction;

#[derive(Clone, Debug, PartialEq)]
pub struct TrigGraph {
    pub function: TrigFunction,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for TrigGraph {
    fn default() -> Self {
        TrigGraph {
            function: TrigFunction::Sin,
            a: 1.0,
            b: 1.0,
            c: 0.0,
            d: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphProperties {
    pub period: f64,
    /// None for tan
    pub amplitude: Option<f64>,
    pub phase_shift: f64,
    pub vertical_shift: f64,
    pub max: Option<f64>,
    pub min: Option<f64>,
}

impl TrigGraph {
    pub fn properties(&self) -> SolveResult<GraphProperties> {
        if self.b == 0.0 {
            return SolveResult::domain_error("b = 0 makes the function constant, it has no period");
        }
        let bounded = self.function != TrigFunction::Tan;
        let amplitude = self.a.abs();
        SolveResult::Value(GraphProperties {
            period: self.function.period() / self.b.abs(),
            amplitude: bounded.then_some(amplitude),
            phase_shift: self.c,
            vertical_shift: self.d,
            max: bounded.then_some(self.d + amplitude),
            min: bounded.then_some(self.d - amplitude),
        })
    }

    /// the curve in the syntax of the expression parser, x in degrees
    pub fn expression(&self) -> String {
        format!(
            "({})*{}(({})*(x - ({}))*pi/180) + ({})",
            self.a, self.function, self.b, self.c, self.d
        )
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * self.function.apply(self.b * (x - self.c)) + self.d
    }

    /// samples the curve over `domain` degrees, points outside `codomain` become holes
    pub fn sample(&self, domain: (f64, f64), codomain: (f64, f64)) -> SolveResult<Vec<Option<Point>>> {
        sample(&self.expression(), domain, codomain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_properties() {
        let g = TrigGraph {
            a: -2.0,
            b: 2.0,
            d: 1.0,
            ..Default::default()
        };
        let p = g.properties().into_value().unwrap();
        assert_eq!(p.period, 180.0);
        assert_eq!(p.amplitude, Some(2.0));
        assert_eq!(p.max, Some(3.0));
        assert_eq!(p.min, Some(-1.0));
        let tan = TrigGraph {
            function: TrigFunction::Tan,
            b: 0.5,
            ..Default::default()
        };
        let p = tan.properties().into_value().unwrap();
        assert_eq!(p.period, 360.0);
        assert_eq!(p.amplitude, None);
        let flat = TrigGraph {
            b: 0.0,
            ..Default::default()
        };
        assert!(matches!(flat.properties(), SolveResult::Error(_)));
    }

    #[test]
    fn test_expression_matches_evaluate() {
        let g = TrigGraph {
            function: TrigFunction::Cos,
            a: 3.0,
            b: 2.0,
            c: 30.0,
            d: -1.0,
        };
        let points = g.sample((-180.0, 180.0), (-10.0, 10.0)).into_value().unwrap();
        for p in points.iter().flatten() {
            assert_relative_eq!(p.y, g.evaluate(p.x), epsilon = 1e-9);
        }
        assert_eq!(points.iter().flatten().count(), points.len());
    }
}
