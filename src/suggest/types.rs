//! The declaration-site model the suggester consumes.
//!
//! These types are the narrow contract with the semantic-model collaborator: a resolved type
//! reference (with generic arguments, base type and interfaces), the plausible symbol kinds at
//! the declaration site, what is already written there, and the sibling names in scope. All of
//! it is serde-serializable so a declaration site can be described as JSON.
//!
//! ## Examples
//! ```rust
//! use namewright::suggest::{NamedType, TypeRef};
//!
//! let tokens = TypeRef::named(
//!     NamedType::new("System.Collections.Generic.IEnumerable")
//!         .with_type_arguments([TypeRef::named(NamedType::new("System.Threading.CancellationToken"))]),
//! );
//! assert_eq!(
//!     tokens.identity(),
//!     "System.Collections.Generic.IEnumerable<System.Threading.CancellationToken>"
//! );
//! ```

use std::fmt::Write as _;
use std::sync::Arc;

use namewright_core::lang::accessibility::Accessibility;
use namewright_core::lang::symbol_kinds::SymbolKind;
use namewright_core::lang::types::predefined::{self, PredefinedTypeId};
use serde::{Deserialize, Serialize};

use crate::naming::{DeclarationModifiers, SymbolDescriptor};

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// A keyword-spelled type (`int`, `string`, ...).
    Predefined { id: PredefinedTypeId },
    /// A class, struct, interface, enum or delegate, possibly generic.
    Named(Arc<NamedType>),
    Array { element: Box<TypeRef> },
    /// `T?` for value types.
    Nullable { inner: Box<TypeRef> },
    /// A type reached through a `using Alias = Target;` alias.
    Alias { name: String, target: Box<TypeRef> },
    TypeParameter { name: String },
    Void,
    /// A type the semantic model could not resolve.
    Error,
}

impl TypeRef {
    pub fn predefined(id: PredefinedTypeId) -> Self {
        TypeRef::Predefined { id }
    }

    pub fn named(named: NamedType) -> Self {
        TypeRef::Named(Arc::new(named))
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
        }
    }

    pub fn nullable(inner: TypeRef) -> Self {
        TypeRef::Nullable { inner: Box::new(inner) }
    }

    pub fn alias(name: impl Into<String>, target: TypeRef) -> Self {
        TypeRef::Alias {
            name: name.into(),
            target: Box::new(target),
        }
    }

    pub fn type_parameter(name: impl Into<String>) -> Self {
        TypeRef::TypeParameter { name: name.into() }
    }

    /// A stable identity string: the fully qualified spelling with type arguments.
    ///
    /// ## Notes
    /// - Base types and interfaces are not part of the identity; two references with the same
    ///   qualified spelling are the same type.
    pub fn identity(&self) -> String {
        let mut out = String::new();
        self.write_identity(&mut out);
        out
    }

    fn write_identity(&self, out: &mut String) {
        match self {
            TypeRef::Predefined { id } => out.push_str(predefined::as_str(*id)),
            TypeRef::Named(named) => named.write_identity(out),
            TypeRef::Array { element } => {
                element.write_identity(out);
                out.push_str("[]");
            }
            TypeRef::Nullable { inner } => {
                inner.write_identity(out);
                out.push('?');
            }
            TypeRef::Alias { name, target } => {
                let _ = write!(out, "{name}=");
                target.write_identity(out);
            }
            TypeRef::TypeParameter { name } => {
                out.push('!');
                out.push_str(name);
            }
            TypeRef::Void => out.push_str("void"),
            TypeRef::Error => out.push_str("?error"),
        }
    }
}

/// Declaration category of a named type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

/// A class, struct, interface, enum or delegate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedType {
    /// Simple name, without namespace or generic arity.
    pub name: String,
    /// Dot-separated namespace; empty for the global namespace.
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub type_kind: TypeKind,
    #[serde(default)]
    pub type_arguments: Vec<TypeRef>,
    #[serde(default)]
    pub base_type: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
}

impl NamedType {
    /// Create a named type from a possibly namespace-qualified name (`System.IO.Stream`).
    pub fn new(qualified_name: &str) -> Self {
        let (namespace, name) = match qualified_name.rsplit_once('.') {
            Some((namespace, name)) => (namespace.to_string(), name.to_string()),
            None => (String::new(), qualified_name.to_string()),
        };
        Self {
            name,
            namespace,
            ..Self::default()
        }
    }

    /// Create an interface; same naming rules as [`NamedType::new`].
    pub fn interface(qualified_name: &str) -> Self {
        Self::new(qualified_name).with_kind(TypeKind::Interface)
    }

    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.type_kind = kind;
        self
    }

    pub fn with_type_arguments(mut self, arguments: impl IntoIterator<Item = TypeRef>) -> Self {
        self.type_arguments = arguments.into_iter().collect();
        self
    }

    pub fn with_base_type(mut self, base: TypeRef) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn with_interface(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// `Namespace.Name`, or just `Name` in the global namespace.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Qualified spelling with type arguments; see [`TypeRef::identity`].
    pub fn identity(&self) -> String {
        let mut out = String::new();
        self.write_identity(&mut out);
        out
    }

    fn write_identity(&self, out: &mut String) {
        if !self.namespace.is_empty() {
            out.push_str(&self.namespace);
            out.push('.');
        }
        out.push_str(&self.name);
        if !self.type_arguments.is_empty() {
            out.push('<');
            for (i, arg) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                arg.write_identity(out);
            }
            out.push('>');
        }
    }
}

/// What the semantic model knows about a declaration site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationContext {
    /// Symbol kinds the declaration could turn out to be, derived from its syntax position.
    pub possible_kinds: Vec<SymbolKind>,
    /// Modifiers already written (`async`, `static`, ...).
    #[serde(default)]
    pub modifiers: DeclarationModifiers,
    #[serde(default)]
    pub accessibility: Option<Accessibility>,
    /// The type written before the name; `None` when there is none (`var`, missing).
    #[serde(default, rename = "type")]
    pub declared_type: Option<TypeRef>,
    /// Names already declared in the same scope.
    #[serde(default)]
    pub sibling_names: Vec<String>,
    /// A name token is already present at the site.
    #[serde(default)]
    pub has_name: bool,
}

impl DeclarationContext {
    pub fn new(declared_type: TypeRef, possible_kinds: impl IntoIterator<Item = SymbolKind>) -> Self {
        Self {
            possible_kinds: possible_kinds.into_iter().collect(),
            declared_type: Some(declared_type),
            ..Self::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: DeclarationModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn with_sibling_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.sibling_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_existing_name(mut self) -> Self {
        self.has_name = true;
        self
    }

    /// A synthetic symbol of `kind` carrying what is already written at the site.
    pub fn symbol(&self, kind: SymbolKind) -> SymbolDescriptor {
        SymbolDescriptor {
            kind,
            accessibility: self.accessibility,
            modifiers: self.modifiers,
        }
    }
}

/// Icon shown next to a completion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Field,
    Property,
    Event,
    Method,
    Local,
    Parameter,
    TypeParameter,
    Type,
}

impl Glyph {
    /// Glyph for a symbol kind; local functions show the method glyph.
    pub fn for_kind(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Field => Glyph::Field,
            SymbolKind::Property => Glyph::Property,
            SymbolKind::Event => Glyph::Event,
            SymbolKind::Method | SymbolKind::LocalFunction => Glyph::Method,
            SymbolKind::Local => Glyph::Local,
            SymbolKind::Parameter => Glyph::Parameter,
            SymbolKind::TypeParameter => Glyph::TypeParameter,
            SymbolKind::Class
            | SymbolKind::Struct
            | SymbolKind::Interface
            | SymbolKind::Enum
            | SymbolKind::Delegate => Glyph::Type,
        }
    }
}

/// Description attached to every suggested name.
pub const SUGGESTED_NAME: &str = "Suggested name";

/// One suggested name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub text: String,
    pub kind: SymbolKind,
    pub glyph: Glyph,
    pub description: &'static str,
}

impl Candidate {
    pub fn new(text: String, kind: SymbolKind) -> Self {
        Self {
            text,
            kind,
            glyph: Glyph::for_kind(kind),
            description: SUGGESTED_NAME,
        }
    }
}
