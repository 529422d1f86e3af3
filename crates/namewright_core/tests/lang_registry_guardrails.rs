use std::collections::HashMap;
use std::fmt::Debug;

use namewright_core::lang::registry::TokenInfo;
use namewright_core::lang::types::{predefined, shapes};
use namewright_core::lang::{accessibility, capitalization, keywords, modifiers, severity, symbol_kinds};

/// Every canonical spelling and alias resolves back to its id, and no spelling is claimed twice
/// (compared case-insensitively, the way configuration tokens are matched).
fn assert_registry_sound<Id>(
    name: &str,
    table: &[TokenInfo<Id>],
    from_str: impl Fn(&str) -> Option<Id>,
    as_str: impl Fn(Id) -> &'static str,
) where
    Id: Copy + PartialEq + Debug,
{
    let mut seen: HashMap<String, Id> = HashMap::new();

    for info in table {
        assert_eq!(
            from_str(info.canonical),
            Some(info.id),
            "{name} canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(as_str(info.id), info.canonical, "{name} as_str mismatch for {:?}", info.id);

        for spelling in std::iter::once(&info.canonical).chain(info.aliases) {
            assert_eq!(
                from_str(*spelling),
                Some(info.id),
                "{name} spelling not resolvable: {spelling}"
            );
            if let Some(prev) = seen.insert(spelling.to_ascii_lowercase(), info.id) {
                panic!("duplicate {name} spelling {spelling:?}: {prev:?} and {:?}", info.id);
            }
        }
    }
}

#[test]
fn symbol_kind_spellings_unique_and_resolvable() {
    assert_registry_sound(
        "symbol kind",
        symbol_kinds::SYMBOL_KINDS,
        symbol_kinds::from_str,
        symbol_kinds::as_str,
    );
    assert_eq!(symbol_kinds::ALL.len(), symbol_kinds::SYMBOL_KINDS.len());
}

#[test]
fn accessibility_spellings_unique_and_resolvable() {
    assert_registry_sound(
        "accessibility",
        accessibility::ACCESSIBILITIES,
        accessibility::from_str,
        accessibility::as_str,
    );
    assert_eq!(accessibility::ALL.len(), accessibility::ACCESSIBILITIES.len());
}

#[test]
fn modifier_spellings_unique_and_resolvable() {
    let tokens: Vec<TokenInfo<modifiers::ModifierId>> = modifiers::MODIFIERS.iter().map(|m| m.token).collect();
    assert_registry_sound("modifier", &tokens, modifiers::from_str, modifiers::as_str);

    let requirable: Vec<_> = modifiers::MODIFIERS
        .iter()
        .filter(|m| m.requirable)
        .map(|m| m.token.canonical)
        .collect();
    assert_eq!(requirable, ["abstract", "async", "const", "readonly", "static"]);
}

#[test]
fn capitalization_and_severity_spellings_unique_and_resolvable() {
    assert_registry_sound(
        "capitalization",
        capitalization::CAPITALIZATIONS,
        capitalization::from_str,
        capitalization::as_str,
    );
    assert_registry_sound("severity", severity::SEVERITIES, severity::from_str, severity::as_str);
}

#[test]
fn predefined_types_resolve_by_keyword_and_runtime_name() {
    for info in predefined::PREDEFINED_TYPES {
        assert_eq!(predefined::from_str(info.keyword), Some(info.id));
        assert_eq!(predefined::from_str(info.runtime_name), Some(info.id));
        assert!(
            keywords::is_reserved(info.keyword),
            "predefined keyword {} missing from reserved words",
            info.keyword
        );
    }
}

#[test]
fn shape_names_are_unique() {
    let mut seen = HashMap::new();
    for info in shapes::SHAPES {
        assert_eq!(shapes::from_qualified_name(info.qualified_name), Some(info.shape));
        if let Some(prev) = seen.insert(info.simple_name(), info.qualified_name) {
            panic!(
                "simple name {} is ambiguous: {prev} and {}",
                info.simple_name(),
                info.qualified_name
            );
        }
    }
}
