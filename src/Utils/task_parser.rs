//! Parser of task documents: a sequence of sections, each a title followed by `key: v1, v2`
//! pairs.
//! ```text
//! // comment lines start with //, #, % or ;
//! quadratic
//!  a: 1 b: 0 c: -4
//! trig_equation
//!  func: sin a: 1 b: 0 c: 0.5 start: 0 end: 360
//! ```
//! Sections keep the order of the document and a title may repeat.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::Display;

/// single scalar of a value list
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn as_string(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// integers are numbers too
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

/// one task of the document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub title: String,
    pub fields: HashMap<String, Vec<Value>>,
}

impl Section {
    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// all values of `key` as numbers; absent key → Ok(None)
    pub fn floats(&self, key: &str) -> Result<Option<Vec<f64>>, String> {
        match self.fields.get(key) {
            None => Ok(None),
            Some(values) => values
                .iter()
                .map(|v| {
                    v.as_float().ok_or_else(|| {
                        format!("{}: '{}' of key '{}' is not a number", self.title, v, key)
                    })
                })
                .collect::<Result<Vec<f64>, String>>()
                .map(Some),
        }
    }

    /// first value of `key` as a number
    pub fn float(&self, key: &str) -> Result<Option<f64>, String> {
        Ok(self.floats(key)?.and_then(|v| v.first().copied()))
    }

    pub fn integer(&self, key: &str) -> Result<Option<i64>, String> {
        match self.fields.get(key).and_then(|v| v.first()) {
            None => Ok(None),
            Some(v) => v.as_integer().map(Some).ok_or_else(|| {
                format!("{}: '{}' of key '{}' is not an integer", self.title, v, key)
            }),
        }
    }

    /// first value of `key` as text, numbers are rendered back to text
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .and_then(|v| v.first())
            .map(|v| v.to_string())
    }

    /// all values of `key` joined with ", ", for expressions that contain commas
    pub fn joined(&self, key: &str) -> Option<String> {
        self.fields.get(key).map(|values| {
            values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
    }
}

fn identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    map(parser, String::from).parse(input)
}

/// section title, the whitespace after it is dropped
fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, title) = identifier(input)?;
    Ok((input.trim_start(), title))
}

fn parse_key(input: &str) -> IResult<&str, String> {
    identifier(input)
}

/// value up to the next comma, blank or semicolon; tried as integer, float, bool, then text
fn parse_value(input: &str) -> IResult<&str, Value> {
    let raw = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';'));
    map(raw, |s: &str| {
        if let Ok(val) = s.parse::<i64>() {
            Value::Integer(val)
        } else if let Ok(val) = s.parse::<f64>() {
            Value::Float(val)
        } else if let Ok(val) = s.parse::<bool>() {
            Value::Boolean(val)
        } else {
            Value::String(s.to_string())
        }
    })
    .parse(input)
}

fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let (input, _) = space0(input)?;
    let separator_comma = delimited(space0, tag(","), space0);
    separated_list0(separator_comma, parse_value).parse(input)
}

fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let (input, result) =
        separated_pair(parse_key, colon_separator, parse_value_list).parse(input)?;
    Ok((input.trim_start(), result))
}

fn parse_section(input: &str) -> IResult<&str, Section> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let (input, pairs) = many1(terminated(parse_key_value_pair, space0)).parse(input)?;
    let mut fields = HashMap::new();
    for (key, values) in pairs {
        fields.insert(key, values);
    }
    Ok((input, Section { title, fields }))
}

/// drops blank lines and comment lines (starting with //, #, % or ;)
pub fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

pub fn parse_document(input: &str) -> IResult<&str, Vec<Section>> {
    many1(delimited(multispace0, parse_section, multispace0)).parse(input)
}

/// Parses a whole task document; text left over after the last section is an error.
pub fn parse_tasks(input: &str) -> Result<Vec<Section>, String> {
    let filtered = filter_comments(input);
    if filtered.trim().is_empty() {
        return Ok(Vec::new());
    }
    match parse_document(&filtered) {
        Ok((remaining, sections)) => {
            if !remaining.trim().is_empty() {
                return Err(format!(
                    "Failed to parse entire document. Remaining: '{}'",
                    remaining
                ));
            }
            Ok(sections)
        }
        Err(e) => Err(format!("Parsing error: {:?}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title() {
        let (remaining, title) = parse_title("quadratic\n a: 1").unwrap();
        assert_eq!(title, "quadratic");
        assert_eq!(remaining, "a: 1");
        let (remaining, title) = parse_title("trig_equation func: sin").unwrap();
        assert_eq!(title, "trig_equation");
        assert_eq!(remaining, "func: sin");
    }

    #[test]
    fn test_parse_key() {
        let (remaining, key) = parse_key("a1: 2").unwrap();
        assert_eq!(key, "a1");
        assert_eq!(remaining, ": 2");
    }

    #[test]
    fn test_parse_value() {
        let (remaining, value) = parse_value("sin, next").unwrap();
        assert_eq!(value, Value::String("sin".to_string()));
        assert_eq!(remaining, ", next");
        let (_, value) = parse_value("-4 b").unwrap();
        assert_eq!(value, Value::Integer(-4));
        let (_, value) = parse_value("0.5").unwrap();
        assert_eq!(value, Value::Float(0.5));
        let (_, value) = parse_value("1e-3").unwrap();
        assert_eq!(value, Value::Float(0.001));
        let (_, value) = parse_value("true").unwrap();
        assert_eq!(value, Value::Boolean(true));
    }

    #[test]
    fn test_parse_key_value_pair() {
        let (remaining, (key, values)) = parse_key_value_pair("coefficients : 3 , 2, -1").unwrap();
        assert_eq!(key, "coefficients");
        assert_eq!(
            values,
            vec![Value::Integer(3), Value::Integer(2), Value::Integer(-1)]
        );
        assert_eq!(remaining, "");
        let (_, (key, values)) = parse_key_value_pair("end:").unwrap();
        assert_eq!(key, "end");
        assert!(values.is_empty());
    }

    #[test]
    fn test_section_stops_at_next_title() {
        let input = "quadratic a: 1 b: 0 c: -4\nlinear_system a1: 1";
        let (remaining, section) = parse_section(input).unwrap();
        assert_eq!(section.title, "quadratic");
        assert_eq!(section.fields.len(), 3);
        assert_eq!(remaining, "linear_system a1: 1");
    }

    #[test]
    fn test_parse_tasks_keeps_order_and_repeats() {
        let doc = r#"
            // two quadratics and an equation
            quadratic
             a: 1 b: 0 c: -4
            # second one
            quadratic
             a: 1 b: 2 c: 1
            trig_equation
             func: sin a: 1 b: 0 c: 0.5 start: 0 end: 360
        "#;
        let tasks = parse_tasks(doc).unwrap();
        let titles: Vec<&str> = tasks.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["quadratic", "quadratic", "trig_equation"]);
        assert_eq!(tasks[1].float("b").unwrap(), Some(2.0));
        assert_eq!(tasks[2].text("func"), Some("sin".to_string()));
        assert_eq!(tasks[2].float("missing").unwrap(), None);
    }

    #[test]
    fn test_typed_accessors_report_bad_values() {
        let tasks = parse_tasks("sequence kind: geometric first: x n: 2.5").unwrap();
        assert!(tasks[0].float("first").is_err());
        assert!(tasks[0].integer("n").is_err());
        assert!(tasks[0].has("kind"));
    }

    #[test]
    fn test_empty_and_malformed_documents() {
        assert_eq!(parse_tasks("// nothing here\n\n").unwrap(), Vec::new());
        assert!(parse_tasks("quadratic").is_err());
        assert!(parse_tasks("quadratic a: 1 ???").is_err());
    }

    #[test]
    fn test_joined_values() {
        let tasks = parse_tasks("sample expression: x^2 domain: -2, 2").unwrap();
        assert_eq!(tasks[0].joined("domain"), Some("-2, 2".to_string()));
        assert_eq!(tasks[0].floats("domain").unwrap(), Some(vec![-2.0, 2.0]));
    }
}
