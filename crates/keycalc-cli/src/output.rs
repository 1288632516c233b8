//! Rendering of calculator state for the terminal

use console::{style, Style};
use keycalc::prelude::{HistoryEntry, HistoryLog, Keypad, Snapshot, Theme, ERROR_TEXT};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document per line
    Json,
}

/// Renders snapshots, keypads and evaluation outcomes as strings
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    use_color: bool,
}

impl Renderer {
    /// Create a renderer
    #[must_use]
    pub const fn new(format: OutputFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    /// Renders the full display surface of a session
    pub fn snapshot(&self, snapshot: &Snapshot) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => json_line(snapshot),
            OutputFormat::Text => Ok(self.snapshot_text(snapshot)),
        }
    }

    fn snapshot_text(&self, snapshot: &Snapshot) -> String {
        let palette = snapshot.theme.palette();
        let mut out = format!(
            "{} {} ({})\n",
            palette.toggle_icon, snapshot.theme, palette.background
        );
        out.push_str(&format!(
            "input:  {}\n",
            self.display_style(snapshot.theme).apply_to(&snapshot.input)
        ));
        out.push_str(&format!("result: {}\n", self.result_text(&snapshot.result)));
        out.push_str(&self.history_text(&snapshot.history));
        out
    }

    /// Renders the one-line display (input and result) after a key run
    pub fn status(&self, snapshot: &Snapshot) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => json_line(&serde_json::json!({
                "input": snapshot.input,
                "result": snapshot.result,
            })),
            OutputFormat::Text if snapshot.result.is_empty() => Ok(format!(
                "{}\n",
                self.display_style(snapshot.theme).apply_to(&snapshot.input)
            )),
            OutputFormat::Text => Ok(format!(
                "{} = {}\n",
                self.display_style(snapshot.theme).apply_to(&snapshot.input),
                self.result_text(&snapshot.result)
            )),
        }
    }

    /// Renders a rejected key report
    pub fn rejection(&self, message: &str) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => json_line(&serde_json::json!({ "error": message })),
            OutputFormat::Text => Ok(format!("Error: {message}\n")),
        }
    }

    /// Renders the history log alone
    pub fn history(&self, history: &HistoryLog) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", history.to_json()?)),
            OutputFormat::Text => Ok(self.history_text(history.all())),
        }
    }

    fn history_text(&self, entries: &[HistoryEntry]) -> String {
        if entries.is_empty() {
            return "history: (empty)\n".to_string();
        }
        let mut out = format!("history ({}):\n", entries.len());
        for entry in entries {
            let (expression, result) = entry.columns();
            out.push_str(&format!(
                "  {} = {}\n",
                expression,
                self.paint(style(result).bold())
            ));
        }
        out
    }

    /// Renders the outcome of a one-shot evaluation
    pub fn evaluation(&self, expression: &str, outcome: &str) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => json_line(&serde_json::json!({
                "expression": expression,
                "result": outcome,
                "ok": outcome != ERROR_TEXT,
            })),
            OutputFormat::Text => Ok(format!("{}\n", self.result_text(outcome))),
        }
    }

    /// Renders the keypad grid
    pub fn keypad(&self, keypad: &Keypad) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Vec<String>> = keypad
                    .rows()
                    .map(|row| row.iter().map(ToString::to_string).collect())
                    .collect();
                json_line(&rows)
            }
            OutputFormat::Text => {
                let mut out = String::new();
                for row in keypad.rows() {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|key| format!("[{}]", self.paint(style(key).bold())))
                        .collect();
                    out.push_str(&cells.join(" "));
                    out.push('\n');
                }
                Ok(out)
            }
        }
    }

    fn result_text(&self, result: &str) -> String {
        if result == ERROR_TEXT {
            self.paint(style(result).red().bold())
        } else {
            self.paint(style(result).green().bold())
        }
    }

    fn display_style(&self, theme: Theme) -> Style {
        let base = if theme.is_dark() {
            Style::new().white().on_black()
        } else {
            Style::new().black().on_white()
        };
        base.force_styling(self.use_color)
    }

    fn paint<D: std::fmt::Display>(&self, styled: console::StyledObject<D>) -> String {
        styled.force_styling(self.use_color).to_string()
    }
}

/// Serializes `value` as a single line terminated by `\n`
fn json_line<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    let mut line = serde_json::to_string(value)?;
    line.push('\n');
    Ok(line)
}
