//! Result rendering: boxed tables or JSON.

use clap::ValueEnum;
use pricer_core::types::GreekSet;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Output format of every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Two-column table accumulated row by row.
#[derive(Debug, Default)]
pub struct Table {
    title: String,
    rows: Vec<(String, String)>,
}

impl Table {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, label: impl Into<String>, value: impl ToString) -> &mut Self {
        self.rows.push((label.into(), value.to_string()));
        self
    }

    pub fn number(&mut self, label: impl Into<String>, value: f64) -> &mut Self {
        self.row(label, format!("{:.8}", value))
    }

    /// Adds one row per present Greek.
    pub fn greeks(&mut self, greeks: &GreekSet) -> &mut Self {
        let named = [
            ("Delta", greeks.delta),
            ("Gamma", greeks.gamma),
            ("Vega", greeks.vega),
            ("Theta", greeks.theta),
            ("Rho (domestic)", greeks.rho_domestic),
            ("Rho (foreign)", greeks.rho_foreign),
            ("Vanna", greeks.vanna),
            ("Volga", greeks.volga),
            ("Time decay", greeks.time_decay),
        ];
        for (name, value) in named {
            match value {
                Some(v) => self.number(name, v),
                None => self.row(name, "n/a"),
            };
        }
        self
    }

    pub fn render(&self) -> String {
        let left = self
            .rows
            .iter()
            .map(|(l, _)| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.title.chars().count());
        let right = self
            .rows
            .iter()
            .map(|(_, v)| v.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!("┌{}┐\n", "─".repeat(left + right + 5)));
        out.push_str(&format!("│ {:<width$} │\n", self.title, width = left + right + 3));
        out.push_str(&format!("├{}┬{}┤\n", "─".repeat(left + 2), "─".repeat(right + 2)));
        for (label, value) in &self.rows {
            out.push_str(&format!("│ {:<left$} │ {:>right$} │\n", label, value));
        }
        out.push_str(&format!("└{}┴{}┘", "─".repeat(left + 2), "─".repeat(right + 2)));
        out
    }
}

/// Prints `value` as JSON, or the table built by `table` otherwise.
pub fn emit<T: Serialize>(format: OutputFormat, value: &T, table: impl FnOnce() -> Table) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => println!("{}", table().render()),
    }
    Ok(())
}
