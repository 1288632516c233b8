//! keycalc CLI library
//!
//! Terminal front end for the [`keycalc`] keypad calculator: argument
//! parsing, configuration, rendering and the interactive loop. The binary
//! in `main.rs` only wires these together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod repl;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, FormatArg, PressArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Renderer};
