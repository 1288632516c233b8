//! Line-oriented interactive session

use std::io::{BufRead, Write};

use keycalc::prelude::{CalculatorDriver, Session};

use crate::error::CliResult;
use crate::output::Renderer;

/// A word typed on its own line that is not a run of keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Flip the light/dark theme
    Theme,
    /// Print the history log
    History,
    /// Print the full display
    Show,
    /// Leave the session
    Quit,
}

impl ReplCommand {
    /// Recognises a command word (case-insensitive)
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "theme" => Some(Self::Theme),
            "history" => Some(Self::History),
            "show" => Some(Self::Show),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Runs an interactive session until `quit` or end of input
///
/// Each non-command line is pressed key by key. A rejected key is reported
/// on `output` and the rest of that line is dropped; the session goes on.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    renderer: &Renderer,
) -> CliResult<()> {
    for line in input.lines() {
        let line = line?;
        match ReplCommand::parse(&line) {
            Some(ReplCommand::Quit) => break,
            Some(ReplCommand::Theme) => {
                session.on_theme_toggle();
                tracing::info!(theme = %session.theme(), "theme toggled");
                write_block(output, &renderer.snapshot(&session.snapshot())?)?;
            }
            Some(ReplCommand::History) => {
                write_block(output, &renderer.history(session.history())?)?;
            }
            Some(ReplCommand::Show) => {
                write_block(output, &renderer.snapshot(&session.snapshot())?)?;
            }
            None => {
                let keys: String = line.chars().filter(|ch| !ch.is_whitespace()).collect();
                if keys.is_empty() {
                    continue;
                }
                if let Err(e) = session.type_keys(&keys) {
                    write_block(output, &renderer.rejection(&e.to_string())?)?;
                }
                write_block(output, &renderer.status(&session.snapshot())?)?;
            }
        }
        output.flush()?;
    }
    Ok(())
}

/// Writes a rendered block, terminating it with a newline if it lacks one
fn write_block<W: Write>(output: &mut W, rendered: &str) -> CliResult<()> {
    output.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        output.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn run_script_as(format: OutputFormat, script: &str) -> (Session, String) {
        let mut session = Session::new();
        let mut out = Vec::new();
        let renderer = Renderer::new(format, false);
        run(&mut session, script.as_bytes(), &mut out, &renderer).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    fn run_script(script: &str) -> (Session, String) {
        run_script_as(OutputFormat::Text, script)
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(ReplCommand::parse("theme"), Some(ReplCommand::Theme));
        assert_eq!(ReplCommand::parse(" HISTORY "), Some(ReplCommand::History));
        assert_eq!(ReplCommand::parse("exit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("7+8="), None);
    }

    #[test]
    fn test_key_lines() {
        let (session, out) = run_script("7+8\n=\n");
        assert_eq!(session.result(), "15");
        assert_eq!(out, "7+8\n7+8 = 15\n");
    }

    #[test]
    fn test_whitespace_ignored() {
        let (session, _) = run_script("1 + 2 =\n\n");
        assert_eq!(session.result(), "3");
    }

    #[test]
    fn test_unknown_key_reported_and_session_continues() {
        let (session, out) = run_script("1x2\n+3=\n");
        assert!(out.starts_with("Error: Unknown key: 'x'\n1\n"));
        assert_eq!(session.input(), "1+3");
        assert_eq!(session.result(), "4");
    }

    #[test]
    fn test_error_result() {
        let (session, out) = run_script("6/0=\n");
        assert_eq!(out, "6/0 = Error\n");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_theme_and_history_commands() {
        let (session, out) = run_script("2*3=\ntheme\nhistory\n");
        assert!(session.theme().is_dark());
        assert!(out.contains("sun dark"));
        assert!(out.ends_with("history (1):\n  2*3 = 6\n"));
    }

    #[test]
    fn test_json_output_is_line_delimited() {
        let (_, out) = run_script_as(OutputFormat::Json, "1+1=\nhistory\nshow\n2\nx\n");
        let docs: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(docs.len(), 6);
        assert_eq!(docs[0]["result"], "2");
        assert_eq!(docs[1][0]["expression"], "1+1");
        assert_eq!(docs[1][0]["result"], "2");
        assert_eq!(docs[2]["history"][0]["result"], "2");
        assert_eq!(docs[3]["input"], "1+12");
        assert_eq!(docs[4]["error"], "Unknown key: 'x'");
        assert_eq!(docs[5]["input"], "1+12");
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run_script("1\nquit\n2\n");
        assert_eq!(session.input(), "1");
    }
}
