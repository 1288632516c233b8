//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// keycalc: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format (text, json)
    #[arg(long, default_value = "text", env = "KEYCALC_FORMAT", global = true)]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keypad buttons in order and show the final display
    ///
    /// Every character of every argument is one key: 0-9, + - * /, C, =.
    /// Whitespace is ignored.
    Press(PressArgs),

    /// Evaluate one expression and print the result or "Error"
    Eval(EvalArgs),

    /// Interactive session reading keys from stdin
    ///
    /// Each line is a run of keys. The words `theme`, `history`, `show`
    /// and `quit` (or `exit`) are commands.
    Repl,

    /// Print the keypad layout
    Keypad,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Key sequences, e.g. `7+8=`
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Start in the dark theme
    #[arg(long)]
    pub dark: bool,
}

impl PressArgs {
    /// All keys from all arguments, whitespace removed
    #[must_use]
    pub fn key_sequence(&self) -> String {
        self.keys
            .iter()
            .flat_map(|arg| arg.chars())
            .filter(|ch| !ch.is_whitespace())
            .collect()
    }
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Expression to evaluate, e.g. `2+3*4`
    pub expression: String,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document per line
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_press_command() {
            let cli = Cli::parse_from(["keycalc", "press", "7+8="]);
            match cli.command {
                Commands::Press(args) => {
                    assert_eq!(args.key_sequence(), "7+8=");
                    assert!(!args.dark);
                }
                _ => panic!("expected Press command"),
            }
        }

        #[test]
        fn test_press_joins_arguments() {
            let cli = Cli::parse_from(["keycalc", "press", "1 +", "2", "=", "--dark"]);
            match cli.command {
                Commands::Press(args) => {
                    assert_eq!(args.key_sequence(), "1+2=");
                    assert!(args.dark);
                }
                _ => panic!("expected Press command"),
            }
        }

        #[test]
        fn test_press_requires_keys() {
            assert!(Cli::try_parse_from(["keycalc", "press"]).is_err());
        }

        #[test]
        fn test_parse_eval_command() {
            let cli = Cli::parse_from(["keycalc", "eval", "2+3*4"]);
            match cli.command {
                Commands::Eval(args) => assert_eq!(args.expression, "2+3*4"),
                _ => panic!("expected Eval command"),
            }
        }

        #[test]
        fn test_parse_repl_and_keypad() {
            assert!(matches!(
                Cli::parse_from(["keycalc", "repl"]).command,
                Commands::Repl
            ));
            assert!(matches!(
                Cli::parse_from(["keycalc", "keypad"]).command,
                Commands::Keypad
            ));
        }

        #[test]
        fn test_global_flags() {
            let cli = Cli::parse_from([
                "keycalc", "-vv", "--color", "never", "--format", "json", "keypad",
            ]);
            assert_eq!(cli.verbose, 2);
            assert!(matches!(cli.color, ColorArg::Never));
            assert!(matches!(cli.format, FormatArg::Json));
        }

        #[test]
        fn test_quiet_flag() {
            let cli = Cli::parse_from(["keycalc", "eval", "1", "-q"]);
            assert!(cli.quiet);
        }
    }

    mod conversion_tests {
        use super::*;
        use crate::config::ColorChoice;
        use crate::output::OutputFormat;

        #[test]
        fn test_color_arg_into_choice() {
            assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
            assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
            assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        }

        #[test]
        fn test_format_arg_into_format() {
            assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
            assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        }
    }
}
