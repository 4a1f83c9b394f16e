#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedSolvers::symbolic::symbolic_engine::Expr;
/// let input = "x^2 - 4*x + sqrt(x)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let parsed_function = parsed_expression.lambdify1D("x").unwrap();
/// println!("{}, Rust function: {:?}  \n", input, parsed_function(4.0));
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the expression tree built by the parser
/// 2) evaluates it with per-point domain checks
/// 3) turns a symbolic expression into a Rust closure of one argument
///# Example#
/// ```
/// use RustedSolvers::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("sqrt(x)").unwrap();
/// assert_eq!(f.eval1D("x", 9.0), Ok(3.0));
/// assert!(f.eval1D("x", -9.0).is_err());
/// ```
pub mod symbolic_engine;
