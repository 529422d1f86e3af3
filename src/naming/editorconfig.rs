//! Read naming rules from editorconfig-style `key = value` text.
//!
//! Three key families describe a rule set. Each family is keyed by a user-chosen group name:
//!
//! ```text
//! dotnet_naming_rule.<rule>.symbols                       = <symbols group>
//! dotnet_naming_rule.<rule>.style                         = <style group>
//! dotnet_naming_rule.<rule>.severity                      = none | silent | suggestion | warning | error
//! dotnet_naming_symbols.<symbols>.applicable_kinds        = class, field, ... | *
//! dotnet_naming_symbols.<symbols>.applicable_accessibilities = public, private, ... | *
//! dotnet_naming_symbols.<symbols>.required_modifiers      = static, readonly, ... | *
//! dotnet_naming_style.<style>.capitalization              = pascal_case | camel_case | ...
//! dotnet_naming_style.<style>.required_prefix             = <text>
//! dotnet_naming_style.<style>.required_suffix             = <text>
//! dotnet_naming_style.<style>.word_separator              = <text>
//! ```
//!
//! ## Notes
//! - The `dotnet_` prefix is optional. Keys are case-insensitive; values are trimmed.
//! - Blank lines, `#`/`;` comments and `[section]` headers are skipped.
//! - Rules keep the order in which each rule's first key appears.
//! - Nothing here is fatal: unknown tokens are ignored, and rules that cannot be completed
//!   (missing `symbols`/`style`, unknown capitalization) are dropped with a warning.
//! - `show_name_suggestions = false` turns name suggestions off.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use namewright_core::lang::capitalization::{self, Capitalization};
use namewright_core::lang::severity::{self, Severity};
use namewright_core::lang::{accessibility, modifiers, symbol_kinds};
use thiserror::Error;

use super::preferences::{NamingStylePreferences, PreferencesError};
use super::rule::NamingRule;
use super::specification::SymbolSpecification;
use super::style::NamingStyle;

const KEY_PREFIX: &str = "dotnet_";
const SHOW_NAME_SUGGESTIONS: &str = "show_name_suggestions";

/// Errors produced while loading a naming configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read naming configuration '{}'", path.display())]
    #[diagnostic(code(namewright::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Preferences(#[from] PreferencesError),
}

/// Everything the configuration text says about naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConfig {
    pub preferences: NamingStylePreferences,
    pub show_name_suggestions: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            preferences: NamingStylePreferences::empty(),
            show_name_suggestions: true,
        }
    }
}

#[derive(Debug, Default)]
struct RawRule {
    symbols: Option<String>,
    style: Option<String>,
    severity: Option<String>,
}

#[derive(Debug, Default)]
struct RawSymbols {
    kinds: Option<String>,
    accessibilities: Option<String>,
    modifiers: Option<String>,
}

#[derive(Debug, Default)]
struct RawStyle {
    capitalization: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
    separator: Option<String>,
}

/// Key/value entries grouped by family, before any validation.
#[derive(Debug, Default)]
struct RawConfig {
    rule_order: Vec<String>,
    rules: HashMap<String, RawRule>,
    symbols: HashMap<String, RawSymbols>,
    styles: HashMap<String, RawStyle>,
    show_name_suggestions: Option<bool>,
}

impl RawConfig {
    fn rule(&mut self, name: &str) -> &mut RawRule {
        if !self.rules.contains_key(name) {
            self.rule_order.push(name.to_string());
        }
        self.rules.entry(name.to_string()).or_default()
    }

    fn set(&mut self, key: &str, value: &str, line_no: usize) {
        if key == SHOW_NAME_SUGGESTIONS {
            match value.to_ascii_lowercase().as_str() {
                "true" => self.show_name_suggestions = Some(true),
                "false" => self.show_name_suggestions = Some(false),
                other => tracing::warn!(line = line_no, value = other, "ignoring non-boolean show_name_suggestions"),
            }
            return;
        }

        let mut parts = key.splitn(3, '.');
        let (Some(family), Some(group), Some(property)) = (parts.next(), parts.next(), parts.next()) else {
            tracing::debug!(line = line_no, key, "ignoring unrelated key");
            return;
        };
        let value = value.to_string();
        let slot = match family {
            "naming_rule" => {
                let rule = self.rule(group);
                match property {
                    "symbols" => &mut rule.symbols,
                    "style" => &mut rule.style,
                    "severity" => &mut rule.severity,
                    _ => return unknown_property(line_no, key),
                }
            }
            "naming_symbols" => {
                let symbols = self.symbols.entry(group.to_string()).or_default();
                match property {
                    "applicable_kinds" => &mut symbols.kinds,
                    "applicable_accessibilities" => &mut symbols.accessibilities,
                    "required_modifiers" => &mut symbols.modifiers,
                    _ => return unknown_property(line_no, key),
                }
            }
            "naming_style" => {
                let style = self.styles.entry(group.to_string()).or_default();
                match property {
                    "capitalization" => &mut style.capitalization,
                    "required_prefix" => &mut style.prefix,
                    "required_suffix" => &mut style.suffix,
                    "word_separator" => &mut style.separator,
                    _ => return unknown_property(line_no, key),
                }
            }
            _ => {
                tracing::debug!(line = line_no, key, "ignoring unrelated key");
                return;
            }
        };
        *slot = Some(value);
    }
}

fn unknown_property(line_no: usize, key: &str) {
    tracing::debug!(line = line_no, key, "ignoring unknown naming property");
}

/// Parse naming configuration text.
///
/// ## Errors
/// - [`ConfigError::Preferences`] only if the assembled rule set is inconsistent, which the
///   reader never produces on its own.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn parse_naming_config(text: &str) -> Result<NamingConfig, ConfigError> {
    let raw = collect_entries(text);
    let mut builder = PreferencesBuilder::default();

    for rule_name in &raw.rule_order {
        let Some(rule) = raw.rules.get(rule_name) else {
            continue;
        };
        let Some(symbols_name) = rule.symbols.as_deref() else {
            tracing::warn!(rule = %rule_name, "dropping naming rule without a `symbols` key");
            continue;
        };
        let Some(style_name) = rule.style.as_deref() else {
            tracing::warn!(rule = %rule_name, "dropping naming rule without a `style` key");
            continue;
        };
        let symbols_name = symbols_name.to_ascii_lowercase();
        let style_name = style_name.to_ascii_lowercase();

        let Some(style_index) = builder.style(&style_name, raw.styles.get(&style_name)) else {
            tracing::warn!(rule = %rule_name, style = %style_name, "dropping naming rule: style has no known capitalization");
            continue;
        };
        let spec_index = builder.specification(&symbols_name, raw.symbols.get(&symbols_name));

        let severity = match rule.severity.as_deref() {
            None => Severity::default(),
            Some(token) => severity::from_str(token).unwrap_or_else(|| {
                tracing::warn!(rule = %rule_name, severity = token, "unknown severity; using suggestion");
                Severity::default()
            }),
        };

        let naming_rule = NamingRule::new(
            &builder.specifications[spec_index],
            &builder.styles[style_index],
            severity,
        );
        builder.rules.push(naming_rule);
    }

    tracing::debug!(rules = builder.rules.len(), "parsed naming configuration");
    let preferences = NamingStylePreferences::new(builder.specifications, builder.styles, builder.rules)?;
    Ok(NamingConfig {
        preferences,
        show_name_suggestions: raw.show_name_suggestions.unwrap_or(true),
    })
}

/// Read and parse a naming configuration file.
///
/// ## Errors
/// - [`ConfigError::Io`] if the file cannot be read.
pub fn read_naming_config(path: &Path) -> Result<NamingConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_naming_config(&text)
}

fn collect_entries(text: &str) -> RawConfig {
    let mut raw = RawConfig::default();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') || line.starts_with('[') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            tracing::warn!(line = line_no, "ignoring line without `=`");
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let key = key.strip_prefix(KEY_PREFIX).unwrap_or(&key);
        raw.set(key, value.trim(), line_no);
    }
    raw
}

/// Deduplicates specifications and styles by group name while rules are assembled.
#[derive(Default)]
struct PreferencesBuilder {
    specifications: Vec<SymbolSpecification>,
    styles: Vec<NamingStyle>,
    rules: Vec<NamingRule>,
    specification_index: HashMap<String, usize>,
    style_index: HashMap<String, Option<usize>>,
}

impl PreferencesBuilder {
    fn specification(&mut self, name: &str, raw: Option<&RawSymbols>) -> usize {
        if let Some(&index) = self.specification_index.get(name) {
            return index;
        }
        let mut spec = SymbolSpecification::new(name);
        if let Some(raw) = raw {
            if let Some(kinds) = &raw.kinds {
                spec.applicable_kinds = symbol_kinds::parse_list(kinds);
            }
            if let Some(list) = &raw.accessibilities {
                spec.applicable_accessibilities = accessibility::parse_list(list);
            }
            if let Some(list) = &raw.modifiers {
                spec.required_modifiers = modifiers::parse_required(list);
            }
        }
        self.specifications.push(spec);
        let index = self.specifications.len() - 1;
        self.specification_index.insert(name.to_string(), index);
        index
    }

    /// `None` when the style has no recognizable capitalization.
    fn style(&mut self, name: &str, raw: Option<&RawStyle>) -> Option<usize> {
        if let Some(&index) = self.style_index.get(name) {
            return index;
        }
        let index = raw.and_then(|raw| {
            let capitalization: Capitalization = capitalization::from_str(raw.capitalization.as_deref()?)?;
            let style = NamingStyle::new(name, capitalization)
                .with_prefix(raw.prefix.clone().unwrap_or_default())
                .with_suffix(raw.suffix.clone().unwrap_or_default())
                .with_word_separator(raw.separator.clone().unwrap_or_default());
            self.styles.push(style);
            Some(self.styles.len() - 1)
        });
        self.style_index.insert(name.to_string(), index);
        index
    }
}
