//! # Symbolic Engine Module
//!
//! Expression tree used by the sampler. A textual function of one variable is parsed
//! (see `parse_expr`) into an [`Expr`] and then either evaluated point by point with
//! [`Expr::eval1D`] or turned once into a closure with [`Expr::lambdify1D`].
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses Box<Expr> for nested expressions
//! 2. **Operator Overloading**: std::ops traits (Add, Sub, Mul, Div, Neg) build trees with natural syntax
//! 3. **Checked evaluation**: every node returns `Result<f64, String>`, so a division by zero or
//!    `sqrt(-1)` at one point is reported for that point only
//! 4. **Sandbox**: the tree can only hold arithmetic, elementary functions and variables,
//!    there is nothing else a parsed text can do
//! 5. **Non-standard Function Names**: mathematical notation (tg, ctg, arctg) is used for
//!    trigonometric variants, the parser accepts both notations

#![allow(non_camel_case_types)]

use std::f64::consts::PI;
use std::fmt;

/// Core symbolic expression enum representing mathematical expressions as an abstract syntax tree.
///
/// # Examples
/// ```rust
/// use RustedSolvers::symbolic::symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// assert_eq!(expr.eval1D("x", 1.0), Ok(3.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x")
    Var(String),
    /// Numerical constant value
    Const(f64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    /// Decimal logarithm: log10(x)
    Lg(Box<Expr>),
    sqrt(Box<Expr>),
    abs(Box<Expr>),
    sin(Box<Expr>),
    cos(Box<Expr>),
    /// Tangent function: tan(x) - uses mathematical notation 'tg'
    tg(Box<Expr>),
    /// Cotangent function: cot(x) - uses mathematical notation 'ctg'
    ctg(Box<Expr>),
    arcsin(Box<Expr>),
    arccos(Box<Expr>),
    /// Arctangent function: arctan(x) - uses mathematical notation 'arctg'
    arctg(Box<Expr>),
    /// Arccotangent function: arccot(x) - uses mathematical notation 'arcctg'
    arcctg(Box<Expr>),
}

/// Closure produced by [`Expr::lambdify1D`]
pub type CheckedFn1D = Box<dyn Fn(f64) -> Result<f64, String> + Send + Sync>;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::Lg(expr) => write!(f, "log10({})", expr),
            Expr::sqrt(expr) => write!(f, "sqrt({})", expr),
            Expr::abs(expr) => write!(f, "abs({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tg(expr) => write!(f, "tg({})", expr),
            Expr::ctg(expr) => write!(f, "ctg({})", expr),
            Expr::arcsin(expr) => write!(f, "arcsin({})", expr),
            Expr::arccos(expr) => write!(f, "arccos({})", expr),
            Expr::arctg(expr) => write!(f, "arctg({})", expr),
            Expr::arcctg(expr) => write!(f, "arcctg({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), self.boxed())
    }
}

/// rejects NaN and infinities produced by a node
fn checked(op: &str, value: f64) -> Result<f64, String> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{} is undefined here", op))
    }
}

impl Expr {
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// parses a string into an expression, see `parse_expr` for the grammar
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        crate::symbolic::parse_expr::parse_expression_func(input)
    }

    /// Builds the function node for a (lowercase) name, None for unknown names.
    /// Both the programming names (tan, atan) and mathematical notation (tg, arctg) are accepted.
    pub fn function_from_name(name: &str, arg: Expr) -> Option<Expr> {
        let arg = arg.boxed();
        let expr = match name {
            "exp" => Expr::Exp(arg),
            "ln" | "log" => Expr::Ln(arg),
            "log10" | "lg" => Expr::Lg(arg),
            "sqrt" => Expr::sqrt(arg),
            "abs" => Expr::abs(arg),
            "sin" => Expr::sin(arg),
            "cos" => Expr::cos(arg),
            "tan" | "tg" => Expr::tg(arg),
            "cot" | "ctg" => Expr::ctg(arg),
            "asin" | "arcsin" => Expr::arcsin(arg),
            "acos" | "arccos" => Expr::arccos(arg),
            "atan" | "arctan" | "arctg" => Expr::arctg(arg),
            "acot" | "arccot" | "arcctg" => Expr::arcctg(arg),
            _ => return None,
        };
        Some(expr)
    }

    pub fn contains_variable(&self, var_name: &str) -> bool {
        self.all_arguments_are_variables()
            .iter()
            .any(|name| name == var_name)
    }

    /// names of all variables of the expression, sorted and without duplicates
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.sort();
        vars.dedup();
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<String>) {
        match self {
            Expr::Var(name) => vars.push(name.clone()),
            Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                lhs.collect_variables(vars);
                rhs.collect_variables(vars);
            }
            Expr::Exp(e)
            | Expr::Ln(e)
            | Expr::Lg(e)
            | Expr::sqrt(e)
            | Expr::abs(e)
            | Expr::sin(e)
            | Expr::cos(e)
            | Expr::tg(e)
            | Expr::ctg(e)
            | Expr::arcsin(e)
            | Expr::arccos(e)
            | Expr::arctg(e)
            | Expr::arcctg(e) => e.collect_variables(vars),
        }
    }

    /// Evaluates the expression with `var` set to `x`.
    ///
    /// Returns an error for division by zero, arguments outside of the domain of a function
    /// and non-finite intermediate results. Any other variable is an error as well.
    pub fn eval1D(&self, var: &str, x: f64) -> Result<f64, String> {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Ok(x)
                } else {
                    Err(format!("unknown variable {}", name))
                }
            }
            Expr::Const(val) => Ok(*val),
            Expr::Add(lhs, rhs) => checked("+", lhs.eval1D(var, x)? + rhs.eval1D(var, x)?),
            Expr::Sub(lhs, rhs) => checked("-", lhs.eval1D(var, x)? - rhs.eval1D(var, x)?),
            Expr::Mul(lhs, rhs) => checked("*", lhs.eval1D(var, x)? * rhs.eval1D(var, x)?),
            Expr::Div(lhs, rhs) => {
                let num = lhs.eval1D(var, x)?;
                let den = rhs.eval1D(var, x)?;
                if den == 0.0 {
                    return Err("division by zero".to_string());
                }
                checked("/", num / den)
            }
            Expr::Pow(base, exp) => checked("^", base.eval1D(var, x)?.powf(exp.eval1D(var, x)?)),
            Expr::Exp(e) => checked("exp", e.eval1D(var, x)?.exp()),
            Expr::Ln(e) => {
                let v = e.eval1D(var, x)?;
                if v <= 0.0 {
                    return Err(format!("ln of non-positive value {}", v));
                }
                Ok(v.ln())
            }
            Expr::Lg(e) => {
                let v = e.eval1D(var, x)?;
                if v <= 0.0 {
                    return Err(format!("log10 of non-positive value {}", v));
                }
                Ok(v.log10())
            }
            Expr::sqrt(e) => {
                let v = e.eval1D(var, x)?;
                if v < 0.0 {
                    return Err(format!("sqrt of negative value {}", v));
                }
                Ok(v.sqrt())
            }
            Expr::abs(e) => Ok(e.eval1D(var, x)?.abs()),
            Expr::sin(e) => Ok(e.eval1D(var, x)?.sin()),
            Expr::cos(e) => Ok(e.eval1D(var, x)?.cos()),
            Expr::tg(e) => checked("tg", e.eval1D(var, x)?.tan()),
            Expr::ctg(e) => {
                let t = e.eval1D(var, x)?.tan();
                if t == 0.0 {
                    return Err("ctg at a multiple of pi".to_string());
                }
                checked("ctg", 1.0 / t)
            }
            Expr::arcsin(e) => {
                let v = e.eval1D(var, x)?;
                if v.abs() > 1.0 {
                    return Err(format!("arcsin of {} outside [-1, 1]", v));
                }
                Ok(v.asin())
            }
            Expr::arccos(e) => {
                let v = e.eval1D(var, x)?;
                if v.abs() > 1.0 {
                    return Err(format!("arccos of {} outside [-1, 1]", v));
                }
                Ok(v.acos())
            }
            Expr::arctg(e) => Ok(e.eval1D(var, x)?.atan()),
            Expr::arcctg(e) => Ok(PI / 2.0 - e.eval1D(var, x)?.atan()),
        }
    }

    /// Converts a single-variable expression into a reusable checked closure.
    ///
    /// Fails when the expression mentions any variable other than `arg`, so the closure
    /// itself can only fail on domain errors.
    /// # Examples
    /// ```rust
    /// use RustedSolvers::symbolic::symbolic_engine::Expr;
    /// let f = Expr::parse_expression("1/x").unwrap().lambdify1D("x").unwrap();
    /// assert_eq!(f(2.0), Ok(0.5));
    /// assert!(f(0.0).is_err());
    /// ```
    pub fn lambdify1D(&self, arg: &str) -> Result<CheckedFn1D, String> {
        let foreign: Vec<String> = self
            .all_arguments_are_variables()
            .into_iter()
            .filter(|name| name != arg)
            .collect();
        if !foreign.is_empty() {
            return Err(format!(
                "expression may only depend on {}, found {:?}",
                arg, foreign
            ));
        }
        let expr = self.clone();
        let arg = arg.to_string();
        Ok(Box::new(move |x| expr.eval1D(&arg, x)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn x() -> Expr {
        Expr::Var("x".to_string())
    }

    #[test]
    fn test_ops_build_trees() {
        let expr = x() + Expr::Const(2.0);
        assert_eq!(
            expr,
            Expr::Add(Box::new(x()), Box::new(Expr::Const(2.0)))
        );
        let neg = -x();
        assert_eq!(
            neg,
            Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(x()))
        );
    }

    #[test]
    fn test_eval_polynomial() {
        let expr = x().pow(Expr::Const(2.0)) - x() * Expr::Const(3.0) + Expr::Const(1.0);
        assert_relative_eq!(expr.eval1D("x", 2.0).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eval_domain_errors() {
        assert!(Expr::sqrt(x().boxed()).eval1D("x", -1.0).is_err());
        assert!(Expr::Ln(x().boxed()).eval1D("x", 0.0).is_err());
        assert!(Expr::arcsin(x().boxed()).eval1D("x", 1.5).is_err());
        assert!((Expr::Const(1.0) / x()).eval1D("x", 0.0).is_err());
        assert!(Expr::Exp(x().boxed()).eval1D("x", 1000.0).is_err());
    }

    #[test]
    fn test_unknown_variable() {
        let expr = x() + Expr::Var("y".to_string());
        assert!(expr.eval1D("x", 1.0).is_err());
        assert!(expr.lambdify1D("x").is_err());
    }

    #[test]
    fn test_function_names() {
        assert_eq!(
            Expr::function_from_name("atan", x()),
            Some(Expr::arctg(x().boxed()))
        );
        assert_eq!(Expr::function_from_name("system", x()), None);
    }

    #[test]
    fn test_arcctg() {
        let f = Expr::arcctg(x().boxed()).lambdify1D("x").unwrap();
        assert_relative_eq!(f(1.0).unwrap(), PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let expr = Expr::sin(x().boxed()) * Expr::Const(2.0);
        assert_eq!(expr.to_string(), "(sin(x) * 2)");
    }
}
