//! Output formatting for the CLI.

use std::num::NonZeroUsize;

use bisecta_expr::ParseError;
use bisecta_solvers::equation::bisection::{BracketError, HEADERS, Table, round};
use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::{
    error::Result,
    run::{Outcome, Report, Request},
    settings::OutputFormat,
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    #[must_use]
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the report of a finished run.
    ///
    /// # Errors
    ///
    /// Fails only if JSON serialization fails.
    pub fn format_report(&self, request: &Request, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(request, report),
            OutputFormat::Table => Ok(self.format_report_table(request, report)),
        }
    }

    /// Format a compile failure.
    ///
    /// # Errors
    ///
    /// Fails only if JSON serialization fails.
    pub fn format_parse_error(&self, err: &ParseError) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "outcome": { "kind": "parse_error", "reason": err.to_string() }
            }))?),
            OutputFormat::Table => Ok(self.error(&format!("Syntax error in the function: {err}"))),
        }
    }

    fn format_report_json(&self, request: &Request, report: &Report) -> Result<String> {
        let table = Table::new(&report.trace, request.decimals);

        let json = serde_json::json!({
            "function": report.function,
            "var": request.var,
            "interval": request.bounds,
            "tol": request.tol,
            "max_iter": request.max_iters,
            "outcome": outcome_json(&report.outcome),
            "endpoints": report.endpoints,
            "trace": report.trace,
            "table": {
                "headers": table.headers(),
                "rows": table.rows(),
            },
        });

        Ok(serde_json::to_string_pretty(&json)?)
    }

    fn format_report_table(&self, request: &Request, report: &Report) -> String {
        let decimals = request.decimals;
        let var = &request.var;
        let mut lines = vec![self.success(&format!(
            "Function recognized: f({var}) = {}",
            report.function
        ))];

        if let Some(endpoints) = &report.endpoints {
            lines.push(self.info(&format!(
                "Initial condition met: f(a) and f(b) have opposite signs. (f(a)={}, f(b)={})",
                round(endpoints.left_value, decimals),
                round(endpoints.right_value, decimals),
            )));
        }

        match &report.outcome {
            Outcome::ExactRoot { x } => {
                lines.push(self.success(&format!("Exact root found: {}", round(*x, decimals))));
                lines.push(self.info(&format!("Iterations: {}", report.trace.len())));
            }
            Outcome::ApproximateRoot { x, .. } => {
                lines.push(self.success(&format!(
                    "Approximate root found: {} (error < {})",
                    round(*x, decimals),
                    request.tol
                )));
                lines.push(self.info(&format!("Iterations: {}", report.trace.len())));
            }
            Outcome::MaxIterationsReached { x } => {
                lines.push(self.warning(&format!(
                    "Reached the limit of {} iterations. No root was found.",
                    request.max_iters
                )));
                lines.push(self.info(&format!("Last approximation: {}", round(*x, decimals))));
            }
            Outcome::UndefinedEncountered { x, iter } => {
                lines.push(self.error(&format!(
                    "Undefined value at {var} = {} during iteration {iter}. The method cannot continue.",
                    round(*x, decimals)
                )));
            }
            Outcome::InvalidBracket { reason } => {
                lines.extend(self.bracket_error(reason, decimals));
            }
            Outcome::EvaluationFailure { reason } => {
                lines.push(self.error(&format!("Invalid parameters: {reason}")));
            }
        }

        if !report.trace.is_empty() {
            lines.push(String::new());
            lines.push(self.colorize("Iteration table", "cyan"));
            lines.push(iteration_table(&Table::new(&report.trace, decimals)));
        }

        lines.join("\n")
    }

    fn bracket_error(&self, reason: &BracketError, decimals: NonZeroUsize) -> Vec<String> {
        match reason {
            BracketError::EndpointUndefined {
                left_value,
                right_value,
                ..
            } => {
                let show = |value: &Option<f64>| {
                    value.map_or_else(|| "undefined".to_string(), |v| round(v, decimals))
                };
                vec![self.error(&format!(
                    "The function cannot be evaluated at the interval bounds [a, b]. (f(a)={}, f(b)={})",
                    show(left_value),
                    show(right_value),
                ))]
            }
            BracketError::SameSign {
                left,
                right,
                left_value,
                right_value,
            } => vec![
                self.error("Initial condition not met: f(a) and f(b) must have opposite signs."),
                format!("f(a) = f({left}) = {}", round(*left_value, decimals)),
                format!("f(b) = f({right}) = {}", round(*right_value, decimals)),
            ],
            BracketError::NonFinite | BracketError::ZeroWidth => {
                vec![self.error(&format!("Invalid interval: {reason}"))]
            }
        }
    }

    /// Format a success message.
    #[must_use]
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {message}"), "green")
    }

    /// Format an error message.
    #[must_use]
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {message}"), "red")
    }

    /// Format an info message.
    #[must_use]
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {message}"), "blue")
    }

    /// Format a warning message.
    #[must_use]
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {message}"), "yellow")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn iteration_table(table: &Table) -> String {
    let mut builder = Builder::default();
    builder.push_record(HEADERS);
    for row in table.rows() {
        builder.push_record(row.clone());
    }

    builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string()
}

fn outcome_json(outcome: &Outcome) -> serde_json::Value {
    let kind = outcome.kind();
    match outcome {
        Outcome::ExactRoot { x } | Outcome::MaxIterationsReached { x } => {
            serde_json::json!({ "kind": kind, "x": x })
        }
        Outcome::ApproximateRoot { x, error } => {
            serde_json::json!({ "kind": kind, "x": x, "error": error })
        }
        Outcome::UndefinedEncountered { x, iter } => {
            serde_json::json!({ "kind": kind, "x": x, "iter": iter })
        }
        Outcome::InvalidBracket { reason } => {
            serde_json::json!({ "kind": kind, "reason": reason.to_string() })
        }
        Outcome::EvaluationFailure { reason } => {
            serde_json::json!({ "kind": kind, "reason": reason })
        }
    }
}
