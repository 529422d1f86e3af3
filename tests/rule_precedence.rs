//! Rule lookup order: the first matching rule in configured order governs a declaration.

use namewright::naming::{
    DeclarationModifiers, NamingRule, NamingStyle, NamingStylePreferences, SymbolDescriptor, SymbolSpecification,
    parse_naming_config,
};
use namewright_core::lang::accessibility::Accessibility;
use namewright_core::lang::capitalization::Capitalization;
use namewright_core::lang::modifiers::ModifierId;
use namewright_core::lang::severity::Severity;
use namewright_core::lang::symbol_kinds::SymbolKind;

fn public_class() -> SymbolDescriptor {
    SymbolDescriptor::new(SymbolKind::Class).with_accessibility(Accessibility::Public)
}

#[test]
fn earlier_rule_wins_over_a_broader_later_rule() {
    let public_classes = SymbolSpecification::new("public classes")
        .with_kinds([SymbolKind::Class])
        .with_accessibilities([Accessibility::Public]);
    let all_classes = SymbolSpecification::new("all classes").with_kinds([SymbolKind::Class]);
    let pascal = NamingStyle::new("pascal", Capitalization::PascalCase);
    let upper = NamingStyle::new("upper", Capitalization::AllUpper).with_word_separator("_");

    let rules = vec![
        NamingRule::new(&public_classes, &pascal, Severity::Warning),
        NamingRule::new(&all_classes, &upper, Severity::Error),
    ];
    let prefs = NamingStylePreferences::new(vec![public_classes, all_classes], vec![pascal, upper], rules).unwrap();

    let rule = prefs.get_applicable_rule(&public_class()).unwrap();
    assert_eq!(rule.specification.name, "public classes");
    assert_eq!(rule.style.name, "pascal");
    assert_eq!(rule.severity, Severity::Warning);

    let private_class = SymbolDescriptor::new(SymbolKind::Class).with_accessibility(Accessibility::Private);
    assert_eq!(prefs.get_applicable_rule(&private_class).unwrap().style.name, "upper");
}

#[test]
fn reversing_the_order_reverses_the_outcome() {
    let config = "\
naming_rule.all_classes.symbols = all_classes
naming_rule.all_classes.style = upper
naming_rule.public_classes.symbols = public_classes
naming_rule.public_classes.style = pascal
naming_symbols.all_classes.applicable_kinds = class
naming_symbols.all_classes.applicable_accessibilities = *
naming_symbols.public_classes.applicable_kinds = class
naming_symbols.public_classes.applicable_accessibilities = public
naming_style.upper.capitalization = all_upper
naming_style.pascal.capitalization = pascal_case
";
    let prefs = parse_naming_config(config).unwrap().preferences;
    assert_eq!(prefs.get_applicable_rule(&public_class()).unwrap().style.name, "upper");
}

#[test]
fn required_modifiers_narrow_a_rule() {
    let config = "\
naming_rule.constants.symbols = constants
naming_rule.constants.style = shouting
naming_rule.constants.severity = error
naming_rule.fields.symbols = fields
naming_rule.fields.style = underscored
naming_symbols.constants.applicable_kinds = field
naming_symbols.constants.required_modifiers = const
naming_symbols.fields.applicable_kinds = field
naming_style.shouting.capitalization = all_upper
naming_style.shouting.word_separator = _
naming_style.underscored.capitalization = camel_case
naming_style.underscored.required_prefix = _
";
    let prefs = parse_naming_config(config).unwrap().preferences;

    let constant = SymbolDescriptor::new(SymbolKind::Field)
        .with_modifiers(DeclarationModifiers::empty().with(ModifierId::Const));
    let field = SymbolDescriptor::new(SymbolKind::Field);

    assert_eq!(prefs.get_applicable_rule(&constant).unwrap().style.name, "shouting");
    assert_eq!(prefs.get_applicable_rule(&field).unwrap().style.name, "underscored");

    assert!(prefs.check_name(&constant, "MAX_RETRIES").is_none());
    let violation = prefs.check_name(&constant, "maxRetries").unwrap();
    assert_eq!(violation.severity, Severity::Error);
    assert_eq!(violation.rule_name, "constants");
    assert_eq!(violation.fixes.first().map(String::as_str), Some("MAX_RETRIES"));

    assert!(prefs.check_name(&field, "_retryCount").is_none());
    assert!(prefs.check_name(&field, "retryCount").is_some());
}

#[test]
fn unmatched_symbols_fall_back_to_builtin_styles() {
    let prefs = NamingStylePreferences::empty();
    let method = SymbolDescriptor::new(SymbolKind::Method);
    assert!(prefs.get_applicable_rule(&method).is_none());
    assert!(prefs.check_name(&method, "whatever").is_none());
    assert_eq!(prefs.style_for(&method).prefix, "Get");
    assert_eq!(
        prefs.style_for(&SymbolDescriptor::new(SymbolKind::Local)).capitalization,
        Capitalization::CamelCase
    );
}

#[test]
fn unknown_tokens_are_ignored() {
    let config = "\
naming_rule.r.symbols = s
naming_rule.r.style = p
naming_symbols.s.applicable_kinds = class, widget, struct
naming_symbols.s.applicable_accessibilities = public, galactic
naming_style.p.capitalization = pascal_case
";
    let prefs = parse_naming_config(config).unwrap().preferences;
    let spec = &prefs.specifications()[0];
    assert_eq!(spec.applicable_kinds, [SymbolKind::Class, SymbolKind::Struct]);
    assert_eq!(spec.applicable_accessibilities, [Accessibility::Public]);
}
