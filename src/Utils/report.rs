//! Pretty-printing of task results as tables.
use crate::solve_result::SolveResult;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Tabled)]
pub struct ResultRow {
    pub task: String,
    pub quantity: String,
    pub value: String,
}

/// result of one task of a document: the tag of the outcome and the computed quantities
#[derive(Clone, Debug, PartialEq)]
pub struct TaskReport {
    pub title: String,
    pub outcome: String,
    pub rows: Vec<(String, String)>,
}

impl TaskReport {
    /// a value turns into rows by `to_rows`, every other outcome into one row describing it
    pub fn from_result<T>(
        title: &str,
        result: SolveResult<T>,
        to_rows: impl FnOnce(T) -> Vec<(String, String)>,
    ) -> Self {
        let outcome = result.tag().to_string();
        let rows = match result {
            SolveResult::Value(v) => to_rows(v),
            SolveResult::Unsupported(feature) => {
                vec![("result".to_string(), format!("{} is not yet implemented", feature))]
            }
            SolveResult::Error(e) => vec![("result".to_string(), e.to_string())],
            other => vec![("result".to_string(), other.tag().to_string())],
        };
        TaskReport {
            title: title.to_string(),
            outcome,
            rows,
        }
    }

    /// task that could not even be set up (unknown title, malformed value)
    pub fn failed(title: &str, msg: &str) -> Self {
        TaskReport {
            title: title.to_string(),
            outcome: "error".to_string(),
            rows: vec![("result".to_string(), msg.to_string())],
        }
    }

    /// record for the solution store: the outcome plus one string entry per quantity
    pub fn to_toml(&self) -> toml::Table {
        let mut quantities = toml::Table::new();
        for (quantity, value) in &self.rows {
            quantities.insert(quantity.clone(), toml::Value::String(value.clone()));
        }
        let mut data = toml::Table::new();
        data.insert("outcome".to_string(), toml::Value::String(self.outcome.clone()));
        data.insert("quantities".to_string(), toml::Value::Table(quantities));
        data
    }

    pub fn table_rows(&self) -> Vec<ResultRow> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, (quantity, value))| ResultRow {
                task: if i == 0 { self.title.clone() } else { String::new() },
                quantity: quantity.clone(),
                value: value.clone(),
            })
            .collect()
    }
}

/// all reports in one table
pub fn render_reports(reports: &[TaskReport]) -> String {
    let rows: Vec<ResultRow> = reports.iter().flat_map(|r| r.table_rows()).collect();
    let mut table = Table::new(&rows);
    table.with(Style::modern_rounded());
    table.to_string()
}

/// at most 6 decimals, trailing zeros dropped
pub fn fmt_num(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let s = format!("{:.6}", x);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn fmt_opt(x: Option<f64>) -> String {
    x.map_or("undefined".to_string(), fmt_num)
}

pub fn fmt_list(xs: &[f64]) -> String {
    xs.iter().map(|x| fmt_num(*x)).collect::<Vec<_>>().join(", ")
}
