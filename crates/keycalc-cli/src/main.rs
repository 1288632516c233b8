//! keycalc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! keycalc press 7+8=          # Press keys, show the display
//! keycalc eval "2+3*4"        # One-shot evaluation
//! keycalc repl                # Interactive session on stdin
//! keycalc --format json keypad
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use keycalc::prelude::{CalculatorDriver, Evaluator, Keypad, Session, Theme, ERROR_TEXT};
use keycalc_cli::{
    logging, repl, Cli, CliConfig, CliError, CliResult, ColorChoice, Commands, EvalArgs,
    OutputFormat, PressArgs, Renderer, Verbosity,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    logging::init_logging(config.verbosity, config.color.should_color());

    let renderer = Renderer::new(config.format, config.color.should_color());

    match cli.command {
        Commands::Press(args) => run_press(&config, &renderer, &args),
        Commands::Eval(args) => run_eval(&config, &renderer, &args),
        Commands::Repl => run_repl(&renderer),
        Commands::Keypad => emit(&config, &renderer.keypad(&Keypad::standard())?),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();
    let format: OutputFormat = cli.format.into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_format(format)
}

fn run_press(config: &CliConfig, renderer: &Renderer, args: &PressArgs) -> CliResult<()> {
    let keys = args.key_sequence();
    if keys.is_empty() {
        return Err(CliError::invalid_argument("no keys to press"));
    }

    let theme = if args.dark { Theme::Dark } else { Theme::Light };
    let mut session = Session::with_theme(theme);
    session.type_keys(&keys)?;
    tracing::info!(keys = %keys, result = session.result(), "keys pressed");

    emit(config, &renderer.snapshot(&session.snapshot())?)
}

fn run_eval(config: &CliConfig, renderer: &Renderer, args: &EvalArgs) -> CliResult<()> {
    let outcome = Evaluator::new()
        .evaluate(&args.expression)
        .unwrap_or_else(|e| {
            tracing::info!(expression = %args.expression, error = %e, "evaluation failed");
            ERROR_TEXT.to_string()
        });

    emit(config, &renderer.evaluation(&args.expression, &outcome)?)
}

fn run_repl(renderer: &Renderer) -> CliResult<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    repl::run(&mut session, stdin.lock(), &mut stdout, renderer)
}

/// Writes rendered output to stdout unless in quiet mode
fn emit(config: &CliConfig, rendered: &str) -> CliResult<()> {
    if config.verbosity.is_quiet() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
