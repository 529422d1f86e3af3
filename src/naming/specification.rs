//! Symbol specifications: predicates selecting which declarations a naming rule governs.
//!
//! ## Notes
//! - An empty kind list matches every kind; an empty accessibility list matches every
//!   visibility. A symbol with no known visibility (locals, parameters) passes any list.
//! - Every required modifier must be present on the symbol.

use std::fmt;

use namewright_core::lang::accessibility::{self, Accessibility};
use namewright_core::lang::modifiers::{self, ModifierId};
use namewright_core::lang::symbol_kinds::{self, SymbolKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Set of modifiers written on a declaration.
///
/// Serialized as a list of modifier tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<ModifierId>", into = "Vec<ModifierId>")]
pub struct DeclarationModifiers(u16);

impl DeclarationModifiers {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn with(self, modifier: ModifierId) -> Self {
        Self(self.0 | modifier.bit())
    }

    pub fn insert(&mut self, modifier: ModifierId) {
        self.0 |= modifier.bit();
    }

    pub const fn contains(self, modifier: ModifierId) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Modifiers in registry order.
    pub fn iter(self) -> impl Iterator<Item = ModifierId> {
        modifiers::MODIFIERS
            .iter()
            .map(|m| m.token.id)
            .filter(move |&id| self.contains(id))
    }
}

impl FromIterator<ModifierId> for DeclarationModifiers {
    fn from_iter<I: IntoIterator<Item = ModifierId>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<Vec<ModifierId>> for DeclarationModifiers {
    fn from(ids: Vec<ModifierId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<DeclarationModifiers> for Vec<ModifierId> {
    fn from(set: DeclarationModifiers) -> Self {
        set.iter().collect()
    }
}

impl fmt::Display for DeclarationModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for id in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(modifiers::as_str(id))?;
            first = false;
        }
        Ok(())
    }
}

/// The parts of a declaration a specification looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDescriptor {
    pub kind: SymbolKind,
    /// `None` for symbols without a declared visibility (locals, parameters, ...).
    pub accessibility: Option<Accessibility>,
    pub modifiers: DeclarationModifiers,
}

impl SymbolDescriptor {
    pub fn new(kind: SymbolKind) -> Self {
        Self {
            kind,
            accessibility: None,
            modifiers: DeclarationModifiers::empty(),
        }
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn with_modifiers(mut self, modifiers: DeclarationModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl fmt::Display for SymbolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(accessibility) = self.accessibility {
            write!(f, "{} ", accessibility::as_str(accessibility))?;
        }
        if !self.modifiers.is_empty() {
            write!(f, "{} ", self.modifiers)?;
        }
        f.write_str(symbol_kinds::as_str(self.kind))
    }
}

/// A named predicate over declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSpecification {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub applicable_kinds: Vec<SymbolKind>,
    #[serde(default)]
    pub applicable_accessibilities: Vec<Accessibility>,
    #[serde(default)]
    pub required_modifiers: Vec<ModifierId>,
}

impl SymbolSpecification {
    /// Create a specification with a fresh id that matches every declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            applicable_kinds: Vec::new(),
            applicable_accessibilities: Vec::new(),
            required_modifiers: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = SymbolKind>) -> Self {
        self.applicable_kinds = kinds.into_iter().collect();
        self
    }

    pub fn with_accessibilities(mut self, accessibilities: impl IntoIterator<Item = Accessibility>) -> Self {
        self.applicable_accessibilities = accessibilities.into_iter().collect();
        self
    }

    pub fn with_required_modifiers(mut self, modifiers: impl IntoIterator<Item = ModifierId>) -> Self {
        self.required_modifiers = modifiers.into_iter().collect();
        self
    }

    /// Check whether this specification selects `symbol`.
    pub fn applies_to(&self, symbol: &SymbolDescriptor) -> bool {
        let kind_ok = self.applicable_kinds.is_empty() || self.applicable_kinds.contains(&symbol.kind);
        let visibility_ok = match symbol.accessibility {
            Some(accessibility) => {
                self.applicable_accessibilities.is_empty() || self.applicable_accessibilities.contains(&accessibility)
            }
            None => true,
        };
        let modifiers_ok = self.required_modifiers.iter().all(|&m| symbol.modifiers.contains(m));
        kind_ok && visibility_ok && modifiers_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_specification_matches_everything() {
        let spec = SymbolSpecification::new("all");
        for &kind in symbol_kinds::ALL {
            assert!(spec.applies_to(&SymbolDescriptor::new(kind)));
        }
    }

    #[test]
    fn kind_and_visibility_filters() {
        let spec = SymbolSpecification::new("public types")
            .with_kinds([SymbolKind::Class, SymbolKind::Struct])
            .with_accessibilities([Accessibility::Public]);

        let public_class = SymbolDescriptor::new(SymbolKind::Class).with_accessibility(Accessibility::Public);
        let private_class = SymbolDescriptor::new(SymbolKind::Class).with_accessibility(Accessibility::Private);
        let public_field = SymbolDescriptor::new(SymbolKind::Field).with_accessibility(Accessibility::Public);

        assert!(spec.applies_to(&public_class));
        assert!(!spec.applies_to(&private_class));
        assert!(!spec.applies_to(&public_field));
        assert!(spec.applies_to(&SymbolDescriptor::new(SymbolKind::Struct)));
    }

    #[test]
    fn every_required_modifier_must_be_present() {
        let spec = SymbolSpecification::new("static readonly fields")
            .with_kinds([SymbolKind::Field])
            .with_required_modifiers([ModifierId::Static, ModifierId::ReadOnly]);

        let static_only = DeclarationModifiers::empty().with(ModifierId::Static);
        let both = static_only.with(ModifierId::ReadOnly);

        assert!(!spec.applies_to(&SymbolDescriptor::new(SymbolKind::Field).with_modifiers(static_only)));
        assert!(spec.applies_to(&SymbolDescriptor::new(SymbolKind::Field).with_modifiers(both)));
    }

    #[test]
    fn modifier_set_operations() {
        let mut set: DeclarationModifiers = [ModifierId::Async, ModifierId::Virtual].into_iter().collect();
        assert!(set.contains(ModifierId::Async));
        assert!(!set.contains(ModifierId::Static));
        set.insert(ModifierId::Static);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            [ModifierId::Async, ModifierId::Static, ModifierId::Virtual]
        );
        assert_eq!(set.to_string(), "async static virtual");
        assert!(DeclarationModifiers::default().is_empty());
    }

    #[test]
    fn descriptor_display() {
        let symbol = SymbolDescriptor::new(SymbolKind::Field)
            .with_accessibility(Accessibility::Private)
            .with_modifiers(DeclarationModifiers::empty().with(ModifierId::Static));
        assert_eq!(symbol.to_string(), "private static field");
    }
}
