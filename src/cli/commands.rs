//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use namewright_core::lang::accessibility::Accessibility;
use namewright_core::lang::modifiers::ModifierId;
use namewright_core::lang::severity;
use namewright_core::lang::symbol_kinds::{self, SymbolKind};

use super::{CliError, CliResult, ExitCode};
use crate::naming::{NamingConfig, SymbolDescriptor, read_naming_config, serialized};
use crate::suggest::{Candidate, DeclarationContext, DeclarationNameCompletion};

/// Load naming configuration, or the defaults when no file is given.
fn load_config(path: Option<&Path>) -> CliResult<NamingConfig> {
    match path {
        Some(path) => read_naming_config(path).map_err(CliError::diagnostic),
        None => Ok(NamingConfig::default()),
    }
}

fn load_context(path: &Path) -> CliResult<DeclarationContext> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading '{}': {}", path.display(), e)))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::failure(format!("Error parsing declaration context '{}': {}", path.display(), e)))
}

// ============================================================================
// suggest
// ============================================================================

/// Print ranked name candidates for the declaration site in `context_path`.
pub fn suggest(context_path: &Path, config_path: Option<&Path>, json: bool) -> CliResult<ExitCode> {
    let config = load_config(config_path)?;
    let context = load_context(context_path)?;
    let candidates = DeclarationNameCompletion::from_config(config).provide(&context);

    if json {
        let rendered = serde_json::to_string_pretty(&candidates)
            .map_err(|e| CliError::failure(format!("Error rendering candidates: {}", e)))?;
        println!("{rendered}");
    } else {
        for line in format_candidates(&candidates) {
            println!("{line}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn format_candidates(candidates: &[Candidate]) -> Vec<String> {
    candidates
        .iter()
        .map(|c| format!("{}\t{}", c.text, symbol_kinds::as_str(c.kind)))
        .collect()
}

// ============================================================================
// check
// ============================================================================

/// Check `name` against the rule governing a symbol; violations exit with failure.
pub fn check(
    kind: SymbolKind,
    name: &str,
    visibility: Option<Accessibility>,
    modifiers: &[ModifierId],
    config_path: Option<&Path>,
) -> CliResult<ExitCode> {
    let config = load_config(config_path)?;
    let mut symbol = SymbolDescriptor::new(kind).with_modifiers(modifiers.iter().copied().collect());
    if let Some(visibility) = visibility {
        symbol = symbol.with_accessibility(visibility);
    }

    let preferences = &config.preferences;
    let Some(rule) = preferences.get_applicable_rule(&symbol) else {
        println!("no naming rule applies to {symbol}");
        return Ok(ExitCode::SUCCESS);
    };

    match preferences.check_name(&symbol, name) {
        None => {
            println!(
                "`{name}` follows rule `{}` (style `{}`)",
                rule.specification.name, rule.style.name
            );
            Ok(ExitCode::SUCCESS)
        }
        Some(violation) => {
            println!(
                "{}: `{}` violates rule `{}` (style `{}`)",
                severity::as_str(violation.severity),
                violation.name,
                violation.rule_name,
                violation.style_name
            );
            if !violation.fixes.is_empty() {
                println!("  suggested: {}", violation.fixes.join(", "));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

// ============================================================================
// rules
// ============================================================================

/// Print the parsed rule set in its serialized JSON form.
pub fn rules(config_path: Option<&Path>) -> CliResult<ExitCode> {
    let config = load_config(config_path)?;
    let json = serialized::to_json(&config.preferences).map_err(CliError::diagnostic)?;
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}
