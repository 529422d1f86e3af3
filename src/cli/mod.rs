//! CLI module for namewright
//!
//! This module provides the command-line interface over the naming engine.
//!
//! ## Commands
//!
//! - `suggest <CONTEXT.json>` - Print ranked name candidates for a declaration site
//! - `check --kind K --name N` - Check a declared name against the applicable naming rule
//! - `rules` - Print the parsed rule set in its serialized JSON form
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use namewright_core::lang::accessibility::{self, Accessibility};
use namewright_core::lang::modifiers::{self, ModifierId};
use namewright_core::lang::symbol_kinds::{self, SymbolKind};

use crate::version::NAMEWRIGHT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a failure error from a library diagnostic, rendered with its code and help.
    pub fn diagnostic<E>(err: E) -> Self
    where
        E: miette::Diagnostic + Send + Sync + 'static,
    {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Naming-convention checker and declaration name suggester
#[derive(Parser, Debug)]
#[command(name = "namewright")]
#[command(version = NAMEWRIGHT_VERSION)]
#[command(about = "Naming-convention checker and declaration name suggester", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest names for a declaration site described as JSON
    Suggest {
        /// Declaration context file
        #[arg(value_name = "CONTEXT.json")]
        context: PathBuf,
        /// Naming configuration file (editorconfig-style key = value)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Print candidates as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a declared name against the applicable naming rule
    Check {
        /// Symbol kind (class, method, field, ...)
        #[arg(long, value_parser = parse_kind)]
        kind: SymbolKind,
        /// The declared name
        #[arg(long)]
        name: String,
        /// Declared visibility (public, private, ...)
        #[arg(long, value_parser = parse_visibility)]
        visibility: Option<Accessibility>,
        /// Comma-separated modifiers (static,async,...)
        #[arg(long, value_delimiter = ',', value_parser = parse_modifier)]
        modifiers: Vec<ModifierId>,
        /// Naming configuration file (editorconfig-style key = value)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the parsed rule set as serialized JSON
    Rules {
        /// Naming configuration file (editorconfig-style key = value)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn parse_kind(value: &str) -> Result<SymbolKind, String> {
    symbol_kinds::from_str(value).ok_or_else(|| format!("unknown symbol kind `{value}`"))
}

fn parse_visibility(value: &str) -> Result<Accessibility, String> {
    accessibility::from_str(value).ok_or_else(|| format!("unknown visibility `{value}`"))
}

fn parse_modifier(value: &str) -> Result<ModifierId, String> {
    modifiers::from_str(value).ok_or_else(|| format!("unknown modifier `{value}`"))
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Suggest { context, config, json } => commands::suggest(&context, config.as_deref(), json),
        Command::Check {
            kind,
            name,
            visibility,
            modifiers,
            config,
        } => commands::check(kind, &name, visibility, &modifiers, config.as_deref()),
        Command::Rules { config } => commands::rules(config.as_deref()),
    }
}

// ============================================================================
// Tests
// ============================================================================
