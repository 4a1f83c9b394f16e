//! Runs the sections of a task document through the solver engines.
//!
//! Every section title names one calculator, its keys fill the input record of that
//! calculator. A section that cannot be turned into an input record (unknown title, a
//! number that is not a number ...) becomes an error report; the other sections still run.
use crate::Utils::logger::save_samples_to_csv;
use crate::Utils::plots::plot_samples;
use crate::Utils::report::{TaskReport, fmt_list, fmt_num, fmt_opt};
use crate::Utils::task_parser::{Section, parse_tasks};
use crate::algebra::equations::{
    LinearSystem2, QuadraticEquation, RationalEquation, Roots, solve_linear_system, solve_quadratic,
    solve_quadratic_complex, solve_rational,
};
use crate::algebra::inequalities::{InequalityInput, InequalityKind, InequalitySign, solve_inequality};
use crate::algebra::matrix::{Matrix, MatrixOperation, MatrixOutcome};
use crate::algebra::polynomial::{Polynomial, Term};
use crate::algebra::sequences::{SequenceInput, SequenceKind, nth_term, sum};
use crate::calculus::derivative::differentiate;
use crate::calculus::integral::{integrate_definite, integrate_indefinite};
use crate::calculus::limits::{LimitInput, evaluate_limit};
use crate::calculus::optimization::find_extrema;
use crate::geometry::area::{PlaneShape, area, perimeter};
use crate::geometry::circle::{CircleInput, circle_relations};
use crate::geometry::congruence::check_congruence;
use crate::geometry::similarity::{compare_sides, homothety, scale_ratios};
use crate::geometry::solids::{Solid, surface_area, volume};
use crate::geometry::triangle::TriangleSpec;
use crate::numerical::sampler::{Point, grid, sample};
use crate::solve_result::SolveResult;
use crate::trigonometry::equations::{TrigEquation, TrigEquationKind, TrigFunction, solve_in_range};
use crate::trigonometry::graph::TrigGraph;
use crate::trigonometry::identities::{IdentityInput, evaluate_identities};
use crate::trigonometry::triangle_solver::{solve_triangle, triangle_area};
use log::{info, warn};
use nalgebra::DMatrix;
use num_complex::Complex;
use std::str::FromStr;

type Rows = Vec<(String, String)>;

fn row(quantity: &str, value: String) -> (String, String) {
    (quantity.to_string(), value)
}

/// value, error message or tag of a secondary result
fn describe(res: SolveResult<f64>) -> String {
    match res {
        SolveResult::Value(v) => fmt_num(v),
        SolveResult::Error(e) => e.to_string(),
        other => other.tag().to_string(),
    }
}

fn fmt_complex(z: Complex<f64>) -> String {
    let sign = if z.im < 0.0 { "-" } else { "+" };
    format!("{} {} {}i", fmt_num(z.re), sign, fmt_num(z.im.abs()))
}

fn fmt_points(points: &[Point]) -> String {
    if points.is_empty() {
        return "none".to_string();
    }
    points
        .iter()
        .map(|p| format!("({}, {})", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn flag(s: &Section, key: &str) -> bool {
    s.fields
        .get(key)
        .and_then(|v| v.first())
        .and_then(|v| v.as_boolean())
        .unwrap_or(false)
}

fn required_text(s: &Section, key: &str) -> Result<String, String> {
    s.text(key)
        .ok_or_else(|| format!("{}: key '{}' is required", s.title, key))
}

/// up to three values, the missing tail is None
fn triple(s: &Section, key: &str) -> Result<[Option<f64>; 3], String> {
    let mut out = [None; 3];
    if let Some(values) = s.floats(key)? {
        if values.len() > 3 {
            return Err(format!("{}: '{}' takes at most 3 values", s.title, key));
        }
        for (slot, v) in out.iter_mut().zip(values) {
            *slot = Some(v);
        }
    }
    Ok(out)
}

fn pair(s: &Section, key: &str) -> Result<Option<(f64, f64)>, String> {
    match s.floats(key)? {
        None => Ok(None),
        Some(v) if v.len() == 2 => Ok(Some((v[0], v[1]))),
        Some(_) => Err(format!("{}: '{}' takes exactly 2 values", s.title, key)),
    }
}

fn read_polynomial(s: &Section) -> Result<Polynomial, String> {
    read_polynomial_from(s, "coefficients", "powers")
}

fn read_polynomial_from(s: &Section, coefficients_key: &str, powers_key: &str) -> Result<Polynomial, String> {
    let Some(coefficients) = s.floats(coefficients_key)? else {
        return Ok(Polynomial::default());
    };
    let powers: Vec<u32> = match s.floats(powers_key)? {
        Some(powers) => {
            if powers.len() != coefficients.len() {
                return Err(format!(
                    "{}: {} coefficients but {} powers",
                    s.title,
                    coefficients.len(),
                    powers.len()
                ));
            }
            powers
                .iter()
                .map(|&p| {
                    if p >= 0.0 && p.fract() == 0.0 && p <= u32::MAX as f64 {
                        Ok(p as u32)
                    } else {
                        Err(format!("{}: power {} is not a natural number", s.title, p))
                    }
                })
                .collect::<Result<Vec<u32>, String>>()?
        }
        // highest power first, down to the constant term
        None => (0..coefficients.len() as u32).rev().collect(),
    };
    Ok(Polynomial::new(
        coefficients
            .into_iter()
            .zip(powers)
            .map(|(c, p)| Term::new(c, p))
            .collect(),
    ))
}

fn read_matrix(s: &Section, key: &str, rows: (i64, i64)) -> Result<Option<Matrix>, String> {
    let Some(values) = s.floats(key)? else {
        return Ok(None);
    };
    let (r, c) = rows;
    let shape = match (usize::try_from(r), usize::try_from(c)) {
        (Ok(r), Ok(c)) => r
            .checked_mul(c)
            .filter(|&n| n == values.len())
            .map(|_| (r, c)),
        _ => None,
    };
    let Some((r, c)) = shape else {
        return Err(format!(
            "{}: {} values do not fill a {}x{} matrix",
            s.title,
            values.len(),
            r,
            c
        ));
    };
    Ok(Some(Matrix::from_dmatrix(DMatrix::from_row_slice(
        r, c, &values,
    ))))
}

fn matrix_rows(m: &Matrix) -> Rows {
    m.to_rows()
        .iter()
        .enumerate()
        .map(|(i, r)| row(&format!("row {}", i + 1), format!("[{}]", fmt_list(r))))
        .collect()
}

fn quadratic(s: &Section) -> Result<TaskReport, String> {
    let eq = QuadraticEquation {
        a: s.float("a")?,
        b: s.float("b")?,
        c: s.float("c")?,
    };
    if flag(s, "complex") {
        return Ok(TaskReport::from_result(
            &s.title,
            solve_quadratic_complex(&eq),
            |(z1, z2)| vec![row("x1", fmt_complex(z1)), row("x2", fmt_complex(z2))],
        ));
    }
    Ok(TaskReport::from_result(&s.title, solve_quadratic(&eq), |roots| match roots {
        Roots::Single(x) => vec![row("x", fmt_num(x))],
        Roots::Two(x1, x2) => vec![row("x1", fmt_num(x1)), row("x2", fmt_num(x2))],
    }))
}

fn linear_system(s: &Section) -> Result<TaskReport, String> {
    let system = LinearSystem2 {
        a1: s.float("a1")?,
        b1: s.float("b1")?,
        c1: s.float("c1")?,
        a2: s.float("a2")?,
        b2: s.float("b2")?,
        c2: s.float("c2")?,
    };
    Ok(TaskReport::from_result(&s.title, solve_linear_system(&system), |sol| {
        vec![row("x", fmt_num(sol.x)), row("y", fmt_num(sol.y))]
    }))
}

fn rational_equation(s: &Section) -> Result<TaskReport, String> {
    let eq = RationalEquation {
        numerator: s.text("numerator").unwrap_or_default(),
        denominator: s.text("denominator").unwrap_or_default(),
    };
    Ok(TaskReport::from_result(&s.title, solve_rational(&eq), |roots| {
        vec![row("x", fmt_list(&roots))]
    }))
}

fn inequality(s: &Section, kind: InequalityKind) -> Result<TaskReport, String> {
    let Some(sign) = s.text("sign") else {
        return Ok(TaskReport::from_result(&s.title, SolveResult::<()>::NotEnoughInput, |_| vec![]));
    };
    let sign = InequalitySign::from_str(&sign)
        .map_err(|_| format!("{}: '{}' is not one of >, <, >=, <=", s.title, sign))?;
    let input = InequalityInput {
        kind,
        a: s.float("a")?,
        b: s.float("b")?,
        c: s.float("c")?,
        d: s.float("d")?,
        sign,
    };
    Ok(TaskReport::from_result(&s.title, solve_inequality(&input), |set| {
        vec![row("x ∈", set.to_string())]
    }))
}

fn matrix(s: &Section) -> Result<TaskReport, String> {
    let op = required_text(s, "op")?;
    let op = MatrixOperation::from_str(&op)
        .map_err(|_| format!("{}: unknown operation '{}'", s.title, op))?;
    let (Some(rows), Some(cols)) = (s.integer("rows")?, s.integer("cols")?) else {
        return Ok(TaskReport::from_result(&s.title, SolveResult::<()>::NotEnoughInput, |_| vec![]));
    };
    let b_shape = (
        s.integer("b_rows")?.unwrap_or(rows),
        s.integer("b_cols")?.unwrap_or(cols),
    );
    let Some(a) = read_matrix(s, "a", (rows, cols))? else {
        return Ok(TaskReport::from_result(&s.title, SolveResult::<()>::NotEnoughInput, |_| vec![]));
    };
    let b = read_matrix(s, "b", b_shape)?;
    Ok(TaskReport::from_result(&s.title, op.calculate(&a, b.as_ref()), |outcome| match outcome {
        MatrixOutcome::Matrix(m) => matrix_rows(&m),
        MatrixOutcome::Determinant(d) => vec![row("det", fmt_num(d))],
    }))
}

fn polynomial(s: &Section) -> Result<TaskReport, String> {
    let p = read_polynomial(s)?;
    match s.text("op").as_deref() {
        Some("factorize") => {
            return Ok(TaskReport::from_result(&s.title, p.factorize(), |_| vec![]));
        }
        Some("roots") => return Ok(TaskReport::from_result(&s.title, p.roots(), |_| vec![])),
        Some("divide") => {
            let divisor = read_polynomial_from(s, "divisor", "divisor_powers")?;
            return Ok(TaskReport::from_result(&s.title, p.divide(&divisor), |_| vec![]));
        }
        _ => {}
    }
    let at = s.float("at")?;
    let res = if p.is_empty() {
        SolveResult::NotEnoughInput
    } else {
        SolveResult::Value(p)
    };
    Ok(TaskReport::from_result(&s.title, res, |p| {
        let mut rows = vec![row("p(x)", p.to_string())];
        if let Some(x) = at {
            rows.push(row(&format!("p({})", fmt_num(x)), fmt_num(p.evaluate(x))));
        }
        rows
    }))
}

fn derivative(s: &Section) -> Result<TaskReport, String> {
    let p = read_polynomial(s)?;
    let at = s.float("at")?;
    Ok(TaskReport::from_result(&s.title, differentiate(&p), |d| {
        let mut rows = vec![row("f'(x)", d.to_string())];
        if let Some(x) = at {
            rows.push(row(&format!("f'({})", fmt_num(x)), fmt_num(d.evaluate(x))));
        }
        rows
    }))
}

fn integral(s: &Section) -> Result<TaskReport, String> {
    let p = read_polynomial(s)?;
    if s.has("lower") || s.has("upper") {
        let (lower, upper) = (s.float("lower")?, s.float("upper")?);
        return Ok(TaskReport::from_result(
            &s.title,
            integrate_definite(&p, lower, upper),
            |v| vec![row("∫ f(x) dx", fmt_num(v))],
        ));
    }
    Ok(TaskReport::from_result(&s.title, integrate_indefinite(&p), |big_f| {
        vec![row("F(x)", format!("{} + C", big_f))]
    }))
}

fn limit(s: &Section) -> Result<TaskReport, String> {
    let input = LimitInput {
        expression: s.text("expression").unwrap_or_default(),
        point: s.float("point")?,
    };
    Ok(TaskReport::from_result(&s.title, evaluate_limit(&input), |v| {
        vec![row("limit", fmt_num(v))]
    }))
}

fn extrema(s: &Section) -> Result<TaskReport, String> {
    let p = read_polynomial(s)?;
    let domain = match (s.float("start")?, s.float("end")?) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => None,
    };
    Ok(TaskReport::from_result(&s.title, find_extrema(&p, domain), |e| {
        vec![
            row("maxima", fmt_points(&e.maxima)),
            row("minima", fmt_points(&e.minima)),
            row("stationary", fmt_points(&e.stationary)),
            row("inflection", fmt_points(&e.inflections)),
        ]
    }))
}

fn sequence(s: &Section) -> Result<TaskReport, String> {
    let kind = required_text(s, "kind")?;
    let kind = SequenceKind::from_str(&kind)
        .map_err(|_| format!("{}: '{}' is neither arithmetic nor geometric", s.title, kind))?;
    let n = match s.integer("n")? {
        Some(n) if n < 0 => return Err(format!("{}: n = {} is negative", s.title, n)),
        n => n.map(|n| n as u64),
    };
    let input = SequenceInput {
        kind,
        first: s.float("first")?,
        step: s.float("step")?,
        n,
    };
    let res = nth_term(&input).and_then(|term| sum(&input).map(|total| (term, total)));
    Ok(TaskReport::from_result(&s.title, res, |(term, total)| {
        vec![row("a_n", fmt_num(term)), row("S_n", fmt_num(total))]
    }))
}

fn plane_area(s: &Section) -> Result<TaskReport, String> {
    let shape = match required_text(s, "shape")?.as_str() {
        "triangle" => PlaneShape::Triangle {
            base: s.float("base")?,
            height: s.float("height")?,
            sides: triple(s, "sides")?,
        },
        "rectangle" => PlaneShape::Rectangle {
            width: s.float("width")?,
            length: s.float("length")?,
        },
        "circle" => PlaneShape::Circle {
            radius: s.float("radius")?,
        },
        "trapezoid" => PlaneShape::Trapezoid {
            top: s.float("top")?,
            bottom: s.float("bottom")?,
            height: s.float("height")?,
        },
        "polygon" => {
            let sides = match s.integer("n")? {
                Some(n) => Some(u32::try_from(n).map_err(|_| {
                    format!("{}: n = {} is not a valid number of sides", s.title, n)
                })?),
                None => None,
            };
            PlaneShape::RegularPolygon {
                sides,
                side_length: s.float("side")?,
            }
        }
        other => return Err(format!("{}: unknown shape '{}'", s.title, other)),
    };
    let mut report = TaskReport::from_result(&s.title, area(&shape), |a| vec![row("area", fmt_num(a))]);
    if report.outcome == "value" {
        report.rows.push(row("perimeter", describe(perimeter(&shape))));
    }
    Ok(report)
}

fn solid(s: &Section) -> Result<TaskReport, String> {
    let solid = match required_text(s, "shape")?.as_str() {
        "cube" | "box" => Solid::Cube {
            width: s.float("width")?,
            height: s.float("height")?,
            depth: s.float("depth")?,
        },
        "sphere" => Solid::Sphere {
            radius: s.float("radius")?,
        },
        "pyramid" => Solid::Pyramid {
            width: s.float("width")?,
            depth: s.float("depth")?,
            height: s.float("height")?,
        },
        "cylinder" => Solid::Cylinder {
            radius: s.float("radius")?,
            height: s.float("height")?,
        },
        other => return Err(format!("{}: unknown solid '{}'", s.title, other)),
    };
    let mut report =
        TaskReport::from_result(&s.title, volume(&solid), |v| vec![row("volume", fmt_num(v))]);
    if report.outcome == "value" {
        report.rows.push(row("surface area", describe(surface_area(&solid))));
    }
    Ok(report)
}

fn circle(s: &Section) -> Result<TaskReport, String> {
    let input = CircleInput {
        radius: s.float("radius")?,
        chord: s.float("chord")?,
        tangent: s.float("tangent")?,
        arc_angle: s.float("arc_angle")?,
        central_angle: s.float("central_angle")?,
    };
    Ok(TaskReport::from_result(&s.title, circle_relations(&input), |rel| {
        rel.entries()
            .into_iter()
            .map(|(name, v)| row(name, fmt_num(v)))
            .collect()
    }))
}

fn congruence(s: &Section) -> Result<TaskReport, String> {
    let t1 = TriangleSpec {
        sides: triple(s, "sides1")?,
        angles: triple(s, "angles1")?,
    };
    let t2 = TriangleSpec {
        sides: triple(s, "sides2")?,
        angles: triple(s, "angles2")?,
    };
    let verdict = |holds: Option<bool>| match holds {
        Some(true) => "holds".to_string(),
        Some(false) => "fails".to_string(),
        None => "not enough data".to_string(),
    };
    Ok(TaskReport::from_result(&s.title, check_congruence(&t1, &t2), |c| {
        vec![
            row("SAS", verdict(c.sas)),
            row("ASA", verdict(c.asa)),
            row("SSS", verdict(c.sss)),
            row("congruent", c.is_congruent().to_string()),
            row("by", c.satisfied().iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")),
        ]
    }))
}

fn similarity(s: &Section) -> Result<TaskReport, String> {
    let ratio = s.float("ratio")?;
    let mut rows = Rows::new();
    if let SolveResult::Value(r) = scale_ratios(ratio) {
        rows.push(row("perimeter ratio", fmt_num(r.perimeter_ratio)));
        rows.push(row("area ratio", fmt_num(r.area_ratio)));
    }
    if let SolveResult::Value(cmp) = compare_sides(triple(s, "sides1")?, triple(s, "sides2")?) {
        rows.push(row("side ratios", fmt_list(&cmp.ratios)));
        rows.push(row("mean ratio", fmt_num(cmp.mean_ratio)));
        rows.push(row("similar", cmp.is_similar.to_string()));
    }
    if let SolveResult::Value((x, y)) = homothety(pair(s, "center")?, pair(s, "point")?, ratio) {
        rows.push(row("image", format!("({}, {})", fmt_num(x), fmt_num(y))));
    }
    let res = if rows.is_empty() {
        SolveResult::NotEnoughInput
    } else {
        SolveResult::Value(rows)
    };
    Ok(TaskReport::from_result(&s.title, res, |rows| rows))
}

fn trig_triangle(s: &Section) -> Result<TaskReport, String> {
    let triangle = TriangleSpec {
        sides: [s.float("a")?, s.float("b")?, s.float("c")?],
        angles: [s.float("alpha")?, s.float("beta")?, s.float("gamma")?],
    };
    Ok(TaskReport::from_result(&s.title, solve_triangle(&triangle), |t| {
        let names = [("a", "alpha"), ("b", "beta"), ("c", "gamma")];
        let mut rows = Rows::new();
        for (i, (side, angle)) in names.iter().enumerate() {
            rows.push(row(side, fmt_opt(t.side(i))));
            rows.push(row(angle, fmt_opt(t.angle(i))));
        }
        rows.push(row("area", describe(triangle_area(&t))));
        rows
    }))
}

fn trig_identity(s: &Section) -> Result<TaskReport, String> {
    let input = IdentityInput {
        alpha: s.float("alpha")?,
        beta: s.float("beta")?,
    };
    Ok(TaskReport::from_result(&s.title, evaluate_identities(&input), |r| {
        let mut rows = vec![
            row("sin", fmt_num(r.basic.sin)),
            row("cos", fmt_num(r.basic.cos)),
            row("tan", fmt_opt(r.basic.tan)),
            row("cot", fmt_opt(r.basic.cot)),
            row("sec", fmt_opt(r.basic.sec)),
            row("csc", fmt_opt(r.basic.csc)),
            row("sin 2α", fmt_num(r.double.sin2)),
            row("cos 2α", fmt_num(r.double.cos2)),
            row("tan 2α", fmt_opt(r.double.tan2)),
            row("sin α/2", fmt_num(r.half.sin_half)),
            row("cos α/2", fmt_num(r.half.cos_half)),
            row("tan α/2", fmt_opt(r.half.tan_half)),
        ];
        if let Some(sd) = r.sum_difference {
            rows.push(row("sin(α+β)", fmt_num(sd.sin_sum)));
            rows.push(row("sin(α-β)", fmt_num(sd.sin_diff)));
            rows.push(row("cos(α+β)", fmt_num(sd.cos_sum)));
            rows.push(row("cos(α-β)", fmt_num(sd.cos_diff)));
            rows.push(row("tan(α+β)", fmt_opt(sd.tan_sum)));
            rows.push(row("tan(α-β)", fmt_opt(sd.tan_diff)));
        }
        rows
    }))
}

fn trig_function(s: &Section) -> Result<TrigFunction, String> {
    let name = s.text("func").unwrap_or_else(|| "sin".to_string());
    TrigFunction::from_str(&name).map_err(|_| format!("{}: unknown function '{}'", s.title, name))
}

fn trig_equation(s: &Section) -> Result<TaskReport, String> {
    let kind = match s.text("kind") {
        Some(kind) => TrigEquationKind::from_str(&kind)
            .map_err(|_| format!("{}: unknown equation kind '{}'", s.title, kind))?,
        None => TrigEquationKind::Basic,
    };
    let eq = TrigEquation {
        function: trig_function(s)?,
        kind,
        a: s.float("a")?,
        b: s.float("b")?,
        c: s.float("c")?,
        start: s.float("start")?,
        end: s.float("end")?,
    };
    Ok(TaskReport::from_result(&s.title, solve_in_range(&eq), |xs| {
        vec![row("x (degrees)", fmt_list(&xs))]
    }))
}

fn trig_graph(s: &Section) -> Result<TaskReport, String> {
    let graph = TrigGraph {
        function: trig_function(s)?,
        a: s.float("a")?.unwrap_or(1.0),
        b: s.float("b")?.unwrap_or(1.0),
        c: s.float("c")?.unwrap_or(0.0),
        d: s.float("d")?.unwrap_or(0.0),
    };
    let expression = graph.expression();
    Ok(TaskReport::from_result(&s.title, graph.properties(), |p| {
        vec![
            row("y", expression),
            row("period", fmt_num(p.period)),
            row("amplitude", fmt_opt(p.amplitude)),
            row("phase shift", fmt_num(p.phase_shift)),
            row("vertical shift", fmt_num(p.vertical_shift)),
            row("max", fmt_opt(p.max)),
            row("min", fmt_opt(p.min)),
        ]
    }))
}

fn sample_task(s: &Section) -> Result<TaskReport, String> {
    let Some(expression) = s.text("expression") else {
        return Ok(TaskReport::from_result(&s.title, SolveResult::<()>::NotEnoughInput, |_| vec![]));
    };
    let domain = pair(s, "domain")?.unwrap_or((f64::NAN, f64::NAN));
    let codomain = pair(s, "codomain")?.unwrap_or((-f64::MAX, f64::MAX));
    let res = sample(&expression, domain, codomain);
    if let SolveResult::Value(points) = &res {
        if let Some(csv) = s.text("csv") {
            save_samples_to_csv(points, &grid(domain, points.len() - 1), &csv)
                .map_err(|e| format!("{}: cannot write {}: {}", s.title, csv, e))?;
            info!("samples of {} written to {}", expression, csv);
        }
        if let Some(png) = s.text("png") {
            let ys = points.iter().flatten().map(|p| p.y);
            let lo = ys.clone().fold(f64::INFINITY, f64::min);
            let hi = ys.fold(f64::NEG_INFINITY, f64::max);
            let plot_range = if codomain.0 > -f64::MAX && codomain.1 < f64::MAX {
                codomain
            } else if lo < hi {
                (lo, hi)
            } else {
                (lo - 1.0, hi + 1.0)
            };
            plot_samples(&expression, points, domain, plot_range, &png)
                .map_err(|e| format!("{}: cannot plot to {}: {}", s.title, png, e))?;
        }
    }
    Ok(TaskReport::from_result(&s.title, res, |points| {
        let present: Vec<f64> = points.iter().flatten().map(|p| p.y).collect();
        let holes = points.len() - present.len();
        let mut rows = vec![
            row("points", points.len().to_string()),
            row("holes", holes.to_string()),
        ];
        if !present.is_empty() {
            let lo = present.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            rows.push(row("y min", fmt_num(lo)));
            rows.push(row("y max", fmt_num(hi)));
        }
        rows
    }))
}

fn dispatch(s: &Section) -> Result<TaskReport, String> {
    match s.title.as_str() {
        "quadratic" => quadratic(s),
        "linear_system" => linear_system(s),
        "rational_equation" => rational_equation(s),
        "linear_inequality" => inequality(s, InequalityKind::Linear),
        "quadratic_inequality" => inequality(s, InequalityKind::Quadratic),
        "absolute_inequality" => inequality(s, InequalityKind::Absolute),
        "rational_inequality" => inequality(s, InequalityKind::Rational),
        "matrix" => matrix(s),
        "polynomial" => polynomial(s),
        "derivative" => derivative(s),
        "integral" => integral(s),
        "limit" => limit(s),
        "extrema" => extrema(s),
        "sequence" => sequence(s),
        "area" => plane_area(s),
        "solid" => solid(s),
        "circle" => circle(s),
        "congruence" => congruence(s),
        "similarity" => similarity(s),
        "trig_triangle" => trig_triangle(s),
        "trig_identity" => trig_identity(s),
        "trig_equation" => trig_equation(s),
        "trig_graph" => trig_graph(s),
        "sample" => sample_task(s),
        other => Err(format!("unknown task '{}'", other)),
    }
}

/// runs one section, a section that cannot be set up becomes an error report
pub fn run_section(section: &Section) -> TaskReport {
    match dispatch(section) {
        Ok(report) => {
            info!("{}: {}", section.title, report.outcome);
            report
        }
        Err(msg) => {
            warn!("{}", msg);
            TaskReport::failed(&section.title, &msg)
        }
    }
}

/// parses the document and runs every section in order
pub fn run_document(input: &str) -> Result<Vec<TaskReport>, String> {
    Ok(parse_tasks(input)?.iter().map(run_section).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn value_of(report: &TaskReport, quantity: &str) -> String {
        report
            .rows
            .iter()
            .find(|(q, _)| q == quantity)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| panic!("no '{}' in {:?}", quantity, report))
    }

    #[test]
    fn test_document_runs_in_order() {
        let doc = r#"
            quadratic
             a: 1 b: 0 c: -4
            linear_system
             a1: 1 b1: 1 c1: 3 a2: 1 b2: -1 c2: 1
            trig_equation
             func: sin a: 1 b: 0 c: 0.5 start: 0 end: 360
            sequence
             kind: geometric first: 5 step: 1 n: 4
        "#;
        let reports = run_document(doc).unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(value_of(&reports[0], "x1"), "-2");
        assert_eq!(value_of(&reports[0], "x2"), "2");
        assert_eq!(value_of(&reports[1], "x"), "2");
        assert_eq!(value_of(&reports[1], "y"), "1");
        assert_eq!(value_of(&reports[2], "x (degrees)"), "30, 150");
        assert_eq!(value_of(&reports[3], "S_n"), "20");
    }

    #[test]
    fn test_outcome_tags() {
        let reports = run_document(
            "quadratic a: 1 b: 0 c: 4\nquadratic a: 1 b: 0\nlimit expression: x point: 0",
        )
        .unwrap();
        assert_eq!(reports[0].outcome, "no solution");
        assert_eq!(reports[1].outcome, "not enough input");
        assert_eq!(reports[2].outcome, "not yet implemented");
    }

    #[test]
    fn test_bad_sections_do_not_stop_the_rest() {
        let reports =
            run_document("volcano height: 3\nquadratic a: one b: 0 c: 1\nquadratic a: 1 b: 2 c: 1")
                .unwrap();
        assert_eq!(reports[0].outcome, "error");
        assert!(reports[0].rows[0].1.contains("unknown task"));
        assert_eq!(reports[1].outcome, "error");
        assert_eq!(value_of(&reports[2], "x"), "-1");
    }

    #[test]
    fn test_matrix_task() {
        let reports = run_document(
            "matrix op: determinant rows: 2 cols: 2 a: 1, 2, 3, 4\n\
             matrix op: multiply rows: 2 cols: 3 a: 1, 2, 3, 4, 5, 6 b_rows: 3 b_cols: 1 b: 1, 1, 1\n\
             matrix op: add rows: 2 cols: 2 a: 1, 2, 3, 4 b_rows: 1 b_cols: 2 b: 1, 1",
        )
        .unwrap();
        assert_eq!(value_of(&reports[0], "det"), "-2");
        assert_eq!(value_of(&reports[1], "row 2"), "[15]");
        assert_eq!(reports[2].outcome, "error");
    }

    #[test]
    fn test_out_of_range_sizes_are_errors() {
        let reports = run_document(
            "matrix op: determinant rows: 4611686018427387904 cols: 4 a: 1, 2, 3, 4\n\
             matrix op: determinant rows: -2 cols: -2 a: 1, 2, 3, 4\n\
             area shape: polygon n: 4294967299 side: 1\n\
             area shape: polygon n: -3 side: 1\n\
             area shape: polygon n: 4 side: 1",
        )
        .unwrap();
        assert_eq!(reports[0].outcome, "error");
        assert!(reports[0].rows[0].1.contains("do not fill"));
        assert_eq!(reports[1].outcome, "error");
        assert_eq!(reports[2].outcome, "error");
        assert!(reports[2].rows[0].1.contains("number of sides"));
        assert_eq!(reports[3].outcome, "error");
        assert_eq!(reports[4].outcome, "value");
    }

    #[test]
    fn test_inequality_and_calculus_tasks() {
        let reports = run_document(
            "quadratic_inequality a: 1 b: 0 c: -4 sign: <\n\
             derivative coefficients: 3, 2, -1\n\
             integral coefficients: 3 powers: 2 lower: 0 upper: 2\n\
             extrema coefficients: 1, 0, -3, 0",
        )
        .unwrap();
        assert_eq!(value_of(&reports[0], "x ∈"), "(-2, 2)");
        assert_eq!(value_of(&reports[1], "f'(x)"), "6x + 2");
        assert_eq!(value_of(&reports[2], "∫ f(x) dx"), "8");
        assert_eq!(value_of(&reports[3], "maxima"), "(-1, 2)");
        assert_eq!(value_of(&reports[3], "minima"), "(1, -2)");
    }

    #[test]
    fn test_geometry_tasks() {
        let reports = run_document(
            "area shape: triangle sides: 3, 4, 5\n\
             solid shape: cube width: 2 height: 3 depth: 4\n\
             trig_triangle a: 3 b: 4 c: 5\n\
             congruence sides1: 3, 4, 5 sides2: 3, 4, 5",
        )
        .unwrap();
        assert_eq!(value_of(&reports[0], "area"), "6");
        assert_eq!(value_of(&reports[0], "perimeter"), "12");
        assert_eq!(value_of(&reports[1], "surface area"), "52");
        assert_eq!(value_of(&reports[2], "gamma"), "90");
        assert_eq!(value_of(&reports[3], "SSS"), "holds");
    }

    #[test]
    fn test_sample_task_writes_csv() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("curve.csv");
        let doc = format!(
            "sample expression: 1/x domain: -10, 10 codomain: -1000, 1000 csv: {}",
            csv.display()
        );
        let reports = run_document(&doc).unwrap();
        assert_eq!(value_of(&reports[0], "points"), "1001");
        assert_eq!(value_of(&reports[0], "holes"), "1");
        let text = std::fs::read_to_string(&csv).unwrap();
        assert_eq!(text.lines().count(), 1002);
    }
}
