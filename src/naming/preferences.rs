//! Ordered naming-rule sets.
//!
//! [`NamingStylePreferences`] owns the specifications, styles and rules of one configuration.
//! Lookup is a linear scan in configured order and the first matching rule wins.
//!
//! ## Notes
//! - Dangling rule references are rejected at construction, never at lookup.
//! - Instances are immutable after construction and are shared across threads as `Arc`.
//! - [`NamingStylePreferences::builtin`] holds the fallback conventions used for suggestions
//!   when no configured rule matches a category.

use std::collections::HashSet;
use std::sync::LazyLock;

use miette::Diagnostic;
use namewright_core::lang::capitalization::Capitalization;
use namewright_core::lang::severity::Severity;
use namewright_core::lang::symbol_kinds::SymbolKind;
use thiserror::Error;
use uuid::Uuid;

use super::rule::{NamingRule, NamingViolation, ResolvedRule};
use super::specification::{SymbolDescriptor, SymbolSpecification};
use super::style::NamingStyle;

/// Construction-time errors for [`NamingStylePreferences`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum PreferencesError {
    #[error("naming rule #{index} references unknown symbol specification {id}")]
    #[diagnostic(
        code(namewright::preferences::unknown_specification),
        help("every rule must reference a specification listed in the same rule set")
    )]
    UnknownSpecification { index: usize, id: Uuid },

    #[error("naming rule #{index} references unknown naming style {id}")]
    #[diagnostic(
        code(namewright::preferences::unknown_style),
        help("every rule must reference a naming style listed in the same rule set")
    )]
    UnknownStyle { index: usize, id: Uuid },

    #[error("symbol specification id {id} is used more than once")]
    #[diagnostic(code(namewright::preferences::duplicate_specification))]
    DuplicateSpecification { id: Uuid },

    #[error("naming style id {id} is used more than once")]
    #[diagnostic(code(namewright::preferences::duplicate_style))]
    DuplicateStyle { id: Uuid },
}

/// An ordered rule set with its specifications and styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingStylePreferences {
    specifications: Vec<SymbolSpecification>,
    styles: Vec<NamingStyle>,
    rules: Vec<NamingRule>,
    /// `(specification index, style index)` per rule.
    resolved: Vec<(usize, usize)>,
}

impl NamingStylePreferences {
    /// Build a rule set, validating every reference.
    ///
    /// ## Errors
    /// - [`PreferencesError`] if ids are duplicated or a rule references an id that is not listed.
    pub fn new(
        specifications: Vec<SymbolSpecification>,
        styles: Vec<NamingStyle>,
        rules: Vec<NamingRule>,
    ) -> Result<Self, PreferencesError> {
        let mut seen = HashSet::new();
        if let Some(spec) = specifications.iter().find(|s| !seen.insert(s.id)) {
            return Err(PreferencesError::DuplicateSpecification { id: spec.id });
        }
        seen.clear();
        if let Some(style) = styles.iter().find(|s| !seen.insert(s.id)) {
            return Err(PreferencesError::DuplicateStyle { id: style.id });
        }

        let resolved = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| -> Result<(usize, usize), PreferencesError> {
                let spec = specifications
                    .iter()
                    .position(|s| s.id == rule.specification_id)
                    .ok_or(PreferencesError::UnknownSpecification {
                        index,
                        id: rule.specification_id,
                    })?;
                let style = styles
                    .iter()
                    .position(|s| s.id == rule.style_id)
                    .ok_or(PreferencesError::UnknownStyle {
                        index,
                        id: rule.style_id,
                    })?;
                Ok((spec, style))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            specifications,
            styles,
            rules,
            resolved,
        })
    }

    /// A rule set with no rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in conventions used when no configured rule matches.
    ///
    /// ## Notes
    /// - Fields, locals, parameters and local functions: camelCase.
    /// - Properties, events, type parameters and types: PascalCase.
    /// - Methods: PascalCase with a `Get` prefix.
    pub fn builtin() -> &'static NamingStylePreferences {
        &BUILTIN
    }

    pub fn specifications(&self) -> &[SymbolSpecification] {
        &self.specifications
    }

    pub fn styles(&self) -> &[NamingStyle] {
        &self.styles
    }

    pub fn rules(&self) -> &[NamingRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate the rules in configured order with their references resolved.
    pub fn resolved_rules(&self) -> impl Iterator<Item = ResolvedRule<'_>> + '_ {
        self.rules
            .iter()
            .zip(&self.resolved)
            .map(|(rule, &(spec, style))| ResolvedRule {
                specification: &self.specifications[spec],
                style: &self.styles[style],
                severity: rule.severity,
            })
    }

    /// Return the first rule whose specification selects `symbol`.
    pub fn get_applicable_rule(&self, symbol: &SymbolDescriptor) -> Option<ResolvedRule<'_>> {
        self.resolved_rules().find(|r| r.specification.applies_to(symbol))
    }

    /// The style governing `symbol`: the configured rule's, or the built-in convention.
    pub fn style_for(&self, symbol: &SymbolDescriptor) -> &NamingStyle {
        match self.get_applicable_rule(symbol) {
            Some(rule) => rule.style,
            None => BUILTIN
                .get_applicable_rule(symbol)
                .map(|rule| rule.style)
                .expect("INVARIANT: built-in naming rules cover every symbol kind"),
        }
    }

    /// Check a declared name against the rule governing it.
    ///
    /// ## Returns
    /// - `None` when no configured rule applies or the name complies.
    /// - A [`NamingViolation`] with compliant renderings otherwise.
    pub fn check_name(&self, symbol: &SymbolDescriptor, name: &str) -> Option<NamingViolation> {
        let rule = self.get_applicable_rule(symbol)?;
        if rule.style.is_compliant(name) {
            return None;
        }
        tracing::debug!(
            name,
            rule = %rule.specification.name,
            style = %rule.style.name,
            "name violates naming rule"
        );
        Some(NamingViolation {
            rule_name: rule.specification.name.clone(),
            style_name: rule.style.name.clone(),
            severity: rule.severity,
            name: name.to_string(),
            fixes: rule.style.make_compliant(name),
        })
    }

    /// Compliant renderings of `name` under the style governing `symbol`.
    pub fn make_compliant_name(&self, symbol: &SymbolDescriptor, name: &str) -> Vec<String> {
        self.style_for(symbol).make_compliant(name)
    }
}

static BUILTIN: LazyLock<NamingStylePreferences> = LazyLock::new(|| {
    let camel_spec = SymbolSpecification::new("fields, locals, parameters and local functions")
        .with_id(Uuid::from_u128(0x6e61_6d65_7772_6967_6874_0000_0000_0001))
        .with_kinds([
            SymbolKind::Field,
            SymbolKind::Local,
            SymbolKind::Parameter,
            SymbolKind::LocalFunction,
        ]);
    let method_spec = SymbolSpecification::new("methods")
        .with_id(Uuid::from_u128(0x6e61_6d65_7772_6967_6874_0000_0000_0002))
        .with_kinds([SymbolKind::Method]);
    let pascal_spec = SymbolSpecification::new("properties, events, types and type parameters")
        .with_id(Uuid::from_u128(0x6e61_6d65_7772_6967_6874_0000_0000_0003))
        .with_kinds([
            SymbolKind::Property,
            SymbolKind::Event,
            SymbolKind::TypeParameter,
            SymbolKind::Class,
            SymbolKind::Struct,
            SymbolKind::Interface,
            SymbolKind::Enum,
            SymbolKind::Delegate,
        ]);

    let camel = NamingStyle::new("camelCase", Capitalization::CamelCase)
        .with_id(Uuid::from_u128(0x6e61_6d65_7772_6967_6874_0000_0001_0001));
    let get_pascal = NamingStyle::new("GetPascalCase", Capitalization::PascalCase)
        .with_id(Uuid::from_u128(0x6e61_6d65_7772_6967_6874_0000_0001_0002))
        .with_prefix("Get");
    let pascal = NamingStyle::new("PascalCase", Capitalization::PascalCase)
        .with_id(Uuid::from_u128(0x6e61_6d65_7772_6967_6874_0000_0001_0003));

    let rules = vec![
        NamingRule::new(&camel_spec, &camel, Severity::None),
        NamingRule::new(&method_spec, &get_pascal, Severity::None),
        NamingRule::new(&pascal_spec, &pascal, Severity::None),
    ];

    NamingStylePreferences::new(
        vec![camel_spec, method_spec, pascal_spec],
        vec![camel, get_pascal, pascal],
        rules,
    )
    .expect("INVARIANT: built-in naming rules reference their own specifications and styles")
});

#[cfg(test)]
mod tests {
    use super::*;
    use namewright_core::lang::accessibility::Accessibility;
    use namewright_core::lang::symbol_kinds;

    fn public_class() -> SymbolDescriptor {
        SymbolDescriptor::new(SymbolKind::Class).with_accessibility(Accessibility::Public)
    }

    #[test]
    fn first_matching_rule_wins() {
        let public_classes = SymbolSpecification::new("public classes")
            .with_kinds([SymbolKind::Class])
            .with_accessibilities([Accessibility::Public]);
        let classes = SymbolSpecification::new("classes").with_kinds([SymbolKind::Class]);
        let upper = NamingStyle::new("upper", Capitalization::AllUpper);
        let pascal = NamingStyle::new("pascal", Capitalization::PascalCase);
        let rules = vec![
            NamingRule::new(&public_classes, &upper, Severity::Warning),
            NamingRule::new(&classes, &pascal, Severity::Error),
        ];
        let prefs = NamingStylePreferences::new(vec![public_classes, classes], vec![upper, pascal], rules).unwrap();

        let rule = prefs.get_applicable_rule(&public_class()).unwrap();
        assert_eq!(rule.style.name, "upper");
        assert_eq!(rule.severity, Severity::Warning);

        let private = SymbolDescriptor::new(SymbolKind::Class).with_accessibility(Accessibility::Private);
        assert_eq!(prefs.get_applicable_rule(&private).unwrap().style.name, "pascal");
        assert!(
            prefs
                .get_applicable_rule(&SymbolDescriptor::new(SymbolKind::Field))
                .is_none()
        );
    }

    #[test]
    fn dangling_references_fail_at_construction() {
        let spec = SymbolSpecification::new("all");
        let style = NamingStyle::new("pascal", Capitalization::PascalCase);
        let orphan = NamingStyle::new("orphan", Capitalization::CamelCase);

        let err = NamingStylePreferences::new(
            vec![spec.clone()],
            vec![style.clone()],
            vec![NamingRule::new(&spec, &orphan, Severity::Error)],
        )
        .unwrap_err();
        assert_eq!(err, PreferencesError::UnknownStyle { index: 0, id: orphan.id });

        let other = SymbolSpecification::new("other");
        let rules = vec![NamingRule::new(&other, &style, Severity::Error)];
        let err = NamingStylePreferences::new(vec![spec], vec![style], rules).unwrap_err();
        assert!(matches!(err, PreferencesError::UnknownSpecification { index: 0, .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let spec = SymbolSpecification::new("a");
        let twin = SymbolSpecification::new("b").with_id(spec.id);
        let err = NamingStylePreferences::new(vec![spec, twin], vec![], vec![]).unwrap_err();
        assert!(matches!(err, PreferencesError::DuplicateSpecification { .. }));
    }

    #[test]
    fn builtin_covers_every_kind() {
        let builtin = NamingStylePreferences::builtin();
        for &kind in symbol_kinds::ALL {
            assert!(
                builtin.get_applicable_rule(&SymbolDescriptor::new(kind)).is_some(),
                "no built-in rule for {kind:?}"
            );
        }
        let method = builtin.style_for(&SymbolDescriptor::new(SymbolKind::Method));
        assert_eq!(method.prefix, "Get");
        let local_function = builtin.style_for(&SymbolDescriptor::new(SymbolKind::LocalFunction));
        assert_eq!(local_function.capitalization, Capitalization::CamelCase);
    }

    #[test]
    fn style_for_falls_back_to_builtin() {
        let prefs = NamingStylePreferences::empty();
        let style = prefs.style_for(&SymbolDescriptor::new(SymbolKind::Property));
        assert_eq!(style.capitalization, Capitalization::PascalCase);
        assert!(prefs.check_name(&SymbolDescriptor::new(SymbolKind::Property), "whatever").is_none());
    }

    #[test]
    fn check_name_reports_fixes() {
        let spec = SymbolSpecification::new("private fields")
            .with_kinds([SymbolKind::Field])
            .with_accessibilities([Accessibility::Private]);
        let style = NamingStyle::new("underscore camel", Capitalization::CamelCase).with_prefix("_");
        let rules = vec![NamingRule::new(&spec, &style, Severity::Warning)];
        let prefs = NamingStylePreferences::new(vec![spec], vec![style], rules).unwrap();

        let field = SymbolDescriptor::new(SymbolKind::Field).with_accessibility(Accessibility::Private);
        assert!(prefs.check_name(&field, "_count").is_none());

        let violation = prefs.check_name(&field, "m_count").unwrap();
        assert_eq!(violation.rule_name, "private fields");
        assert_eq!(violation.severity, Severity::Warning);
        assert_eq!(violation.fixes, ["_mCount", "_count"]);
        assert_eq!(prefs.make_compliant_name(&field, "Count"), ["_count"]);
    }
}
