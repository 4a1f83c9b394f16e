use crate::symbolic::symbolic_engine::Expr;
/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedSolvers::symbolic::symbolic_engine::Expr;
/// let input = "2*sin(x)^2 - 1/x";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let f = parsed_expression.lambdify1D("x").unwrap();
/// println!("{}, value at 1: {:?}", input, f(1.0));
/// ```
//  grammar (recursive descent, each level calls the next one):
//      sum     := product (('+' | '-') product)*
//      product := unary (('*' | '/') unary)*
//      unary   := ('-' | '+') unary | power
//      power   := primary ('^' unary)?          right associative, -x^2 = -(x^2)
//      primary := number | name '(' sum ')' | name | '(' sum ')'
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, digit0, digit1, multispace0, one_of},
    combinator::{all_consuming, map, map_opt, map_res, opt, recognize},
    error::Error,
    multi::many0,
    sequence::{delimited, pair, preceded},
};

/// wraps a parser so it ignores surrounding whitespace
fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

/// unsigned decimal number with optional fraction and exponent: 2, 2.5, .5, 1e-3
fn number(input: &str) -> IResult<&str, Expr> {
    let mantissa = alt((
        recognize((digit1, opt((char('.'), digit0)))),
        recognize((char('.'), digit1)),
    ));
    let exponent = opt((one_of("eE"), opt(one_of("+-")), digit1));
    map_res(recognize((mantissa, exponent)), |s: &str| {
        s.parse::<f64>().map(Expr::Const)
    })
    .parse(input)
}

/// identifier, the optional `Math.` prefix of JavaScript style input is dropped
fn name(input: &str) -> IResult<&str, String> {
    let ident = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    map(preceded(opt(tag("Math.")), ident), |s: &str| s.to_string()).parse(input)
}

/// function call like sin(x), unknown function names do not match
fn call(input: &str) -> IResult<&str, Expr> {
    map_opt(
        pair(name, delimited(ws(char('(')), sum, char(')'))),
        |(name, arg)| Expr::function_from_name(&name.to_lowercase(), arg),
    )
    .parse(input)
}

/// constants pi and e, everything else is a variable
fn symbol(input: &str) -> IResult<&str, Expr> {
    map(name, |name| match name.as_str() {
        "pi" | "PI" => Expr::Const(std::f64::consts::PI),
        "e" | "E" => Expr::Const(std::f64::consts::E),
        _ => Expr::Var(name),
    })
    .parse(input)
}

fn primary(input: &str) -> IResult<&str, Expr> {
    ws(alt((
        number,
        call,
        symbol,
        delimited(char('('), sum, char(')')),
    )))
    .parse(input)
}

fn power(input: &str) -> IResult<&str, Expr> {
    let (input, base) = primary(input)?;
    let (input, exponent) = opt(preceded(char('^'), unary)).parse(input)?;
    match exponent {
        Some(exponent) => Ok((input, base.pow(exponent))),
        None => Ok((input, base)),
    }
}

fn unary(input: &str) -> IResult<&str, Expr> {
    alt((
        map(preceded(ws(char('-')), unary), |e| -e),
        preceded(ws(char('+')), unary),
        power,
    ))
    .parse(input)
}

/// left fold of a chain of operators of one precedence level
fn fold_chain(first: Expr, rest: Vec<(char, Expr)>) -> Expr {
    rest.into_iter().fold(first, |acc, (op, rhs)| match op {
        '+' => acc + rhs,
        '-' => acc - rhs,
        '*' => acc * rhs,
        _ => acc / rhs,
    })
}

fn product(input: &str) -> IResult<&str, Expr> {
    let (input, first) = unary(input)?;
    let (input, rest) = many0(pair(ws(one_of("*/")), unary)).parse(input)?;
    Ok((input, fold_chain(first, rest)))
}

fn sum(input: &str) -> IResult<&str, Expr> {
    let (input, first) = product(input)?;
    let (input, rest) = many0(pair(ws(one_of("+-")), product)).parse(input)?;
    Ok((input, fold_chain(first, rest)))
}

/// Parses the whole input into an expression tree; trailing garbage is an error.
pub fn parse_expression_func(input: &str) -> Result<Expr, String> {
    if input.trim().is_empty() {
        return Err("empty expression".to_string());
    }
    match all_consuming(ws(sum)).parse(input) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(format!(
            "invalid expression '{}' near '{}'",
            input, e.input
        )),
        Err(nom::Err::Incomplete(_)) => Err(format!("incomplete expression '{}'", input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Box<Expr> {
        Box::new(Expr::Var("x".to_string()))
    }

    #[test]
    fn test_parse_constant() {
        let expr = parse_expression_func("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
        let expr = parse_expression_func("1.5e2").unwrap();
        assert_eq!(expr, Expr::Const(150.0));
    }

    #[test]
    fn test_parse_variable() {
        let expr = parse_expression_func("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = parse_expression_func("x + 2").unwrap();
        assert_eq!(expr, Expr::Add(x(), Box::new(Expr::Const(2.0))));
    }

    #[test]
    fn test_parse_division() {
        let expr = parse_expression_func("1/x").unwrap();
        assert_eq!(expr, Expr::Div(Box::new(Expr::Const(1.0)), x()));
    }

    #[test]
    fn test_left_associativity() {
        // x - 2 - 1 == (x - 2) - 1
        let expr = parse_expression_func("x - 2 - 1").unwrap();
        let expected = Expr::Sub(
            Box::new(Expr::Sub(x(), Box::new(Expr::Const(2.0)))),
            Box::new(Expr::Const(1.0)),
        );
        assert_eq!(expr, expected);
        assert_eq!(expr.eval1D("x", 5.0), Ok(2.0));
    }

    #[test]
    fn test_power_binds_tighter_than_unary_minus() {
        let expr = parse_expression_func("-x^2").unwrap();
        assert_eq!(expr.eval1D("x", 3.0), Ok(-9.0));
        let expr = parse_expression_func("2^3^2").unwrap();
        assert_eq!(expr.eval1D("x", 0.0), Ok(512.0));
        let expr = parse_expression_func("2^-1").unwrap();
        assert_eq!(expr.eval1D("x", 0.0), Ok(0.5));
    }

    #[test]
    fn test_parse_brackets() {
        let expr = parse_expression_func("(x + 1) * (x - 1)").unwrap();
        assert_eq!(expr.eval1D("x", 3.0), Ok(8.0));
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(
            parse_expression_func("sin(x)").unwrap(),
            Expr::sin(x())
        );
        assert_eq!(
            parse_expression_func("tan(x)").unwrap(),
            Expr::tg(x())
        );
        assert_eq!(
            parse_expression_func("Math.sqrt(x)").unwrap(),
            Expr::sqrt(x())
        );
        assert_eq!(
            parse_expression_func("sin(cos(x))").unwrap(),
            Expr::sin(Box::new(Expr::cos(x())))
        );
    }

    #[test]
    fn test_parse_constants_pi_e() {
        let expr = parse_expression_func("2*pi").unwrap();
        assert_eq!(expr.eval1D("x", 0.0), Ok(2.0 * std::f64::consts::PI));
        let expr = parse_expression_func("ln(e)").unwrap();
        assert!((expr.eval1D("x", 0.0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_expression() {
        assert!(parse_expression_func("(x +").is_err());
        assert!(parse_expression_func("(x + y").is_err());
        assert!(parse_expression_func("x +* 2").is_err());
        assert!(parse_expression_func("").is_err());
        assert!(parse_expression_func("alert(x)").is_err());
        assert!(parse_expression_func("x; y").is_err());
    }
}
