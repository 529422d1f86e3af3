//! Turn a resolved type into the word sequences names can be built from.
//!
//! Rules, in priority order (several variants may be produced for one type):
//!
//! 1. Scalar predefined types (numbers, `bool`, `char`) produce nothing. `string`, `decimal`
//!    and `object` are named after their runtime names.
//! 2. Arrays and enumerable shapes produce the element type's variants, flagged plural.
//! 3. Awaitable shapes produce the awaited type's variants. When asked for, each of those is
//!    also offered as an `...Async` method phrase; plural variants are pluralized before
//!    `Async` is appended.
//! 4. Nullable wrappers unwrap one level. A nullable of a nullable is malformed: the single
//!    unwrap yields `Nullable`, followed by a plural `Nullable` fallback, and stops.
//! 5. Any other named type produces its own word-broken name. Interfaces following the `IName`
//!    convention also produce the name without the leading `I`.
//! 6. Aliases produce their surface name first, then the aliased type's variants. An alias of an
//!    unresolved type produces nothing.
//!
//! ## Notes
//! - A shape only applies to a generic type with exactly one type argument. Shapes reached through
//!   a base type or interface also keep the type's own name, ahead of the unwrapped variants.
//! - Enumerable shapes are applied before awaitable ones when a type inherits both.
//! - Recursion stops at a type already on the current path and at [`MAX_UNWRAP_DEPTH`]. A stopped
//!   type falls back to its own name.

use namewright_core::lang::types::predefined;
use namewright_core::lang::types::shapes::{self, GenericShape};
use namewright_core::plural::pluralize_last;
use namewright_core::{Word, WordBreaker};

use super::types::{NamedType, TypeKind, TypeRef};

/// Deepest chain of wrappers the decomposer unwraps.
pub const MAX_UNWRAP_DEPTH: usize = 8;

const ASYNC_WORD: &str = "Async";
const NULLABLE_FALLBACK: &str = "Nullable";

/// Context-dependent switches. Part of the decomposition cache key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecomposeOptions {
    /// Offer `...Async` phrases for awaited types (async method-like declaration sites).
    pub async_phrase: bool,
}

/// One word sequence a name can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariant<'a> {
    pub words: Vec<Word<'a>>,
    /// Names built from this variant are pluralized.
    pub plural: bool,
    /// Only offered to method-like declarations, and only as the whole phrase.
    pub method_phrase: bool,
}

impl NameVariant<'_> {
    pub fn into_owned(self) -> NameVariant<'static> {
        NameVariant {
            words: self.words.into_iter().map(Word::into_owned).collect(),
            plural: self.plural,
            method_phrase: self.method_phrase,
        }
    }

    /// The words joined without separators (`CancellationToken`).
    pub fn joined(&self) -> String {
        self.words.iter().map(Word::as_str).collect()
    }
}

/// Decompose `ty` into name variants, in emission order and without duplicates.
#[tracing::instrument(level = "debug", skip_all, fields(async_phrase = options.async_phrase))]
pub fn decompose(ty: &TypeRef, options: DecomposeOptions) -> Vec<NameVariant<'_>> {
    let mut decomposer = Decomposer {
        options,
        path: Vec::new(),
        out: Vec::new(),
    };
    decomposer.visit(ty, false, 0);

    let mut variants: Vec<NameVariant<'_>> = Vec::with_capacity(decomposer.out.len());
    for variant in decomposer.out {
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    tracing::debug!(count = variants.len(), "decomposed type");
    variants
}

struct Decomposer<'a> {
    options: DecomposeOptions,
    /// Identities of the named types currently being decomposed.
    path: Vec<String>,
    out: Vec<NameVariant<'a>>,
}

impl<'a> Decomposer<'a> {
    fn visit(&mut self, ty: &'a TypeRef, plural: bool, depth: usize) {
        if depth > MAX_UNWRAP_DEPTH {
            return;
        }
        match ty {
            TypeRef::Void | TypeRef::Error => {}
            TypeRef::Predefined { id } => {
                if predefined::is_nameable(*id) {
                    self.emit_name(predefined::runtime_name(*id), plural);
                }
            }
            TypeRef::TypeParameter { name } => self.emit_name(name, plural),
            TypeRef::Array { element } => self.visit(element, true, depth + 1),
            TypeRef::Nullable { inner } => self.unwrap_nullable(inner, plural, depth),
            TypeRef::Alias { name, target } => {
                if is_erroneous(target) {
                    return;
                }
                self.emit_name(name, plural);
                self.visit(target, plural, depth + 1);
            }
            TypeRef::Named(named) => self.visit_named(named, plural, depth),
        }
    }

    fn visit_named(&mut self, named: &'a NamedType, plural: bool, depth: usize) {
        let identity = named.identity();
        if depth >= MAX_UNWRAP_DEPTH || self.path.contains(&identity) {
            self.emit_own_name(named, plural);
            return;
        }

        self.path.push(identity);
        if let Some((shape, argument)) = direct_shape(named) {
            self.apply_shape(shape, argument, plural, depth);
        } else {
            let inherited = inherited_shapes(named);
            self.emit_own_name(named, plural);
            for (shape, argument) in inherited {
                self.apply_shape(shape, argument, plural, depth);
            }
        }
        self.path.pop();
    }

    fn apply_shape(&mut self, shape: GenericShape, argument: &'a TypeRef, plural: bool, depth: usize) {
        match shape {
            GenericShape::Enumerable => self.visit(argument, true, depth + 1),
            GenericShape::Awaitable => {
                let start = self.out.len();
                self.visit(argument, plural, depth + 1);
                if self.options.async_phrase {
                    let phrases: Vec<NameVariant<'a>> = self.out[start..]
                        .iter()
                        .filter(|v| !v.method_phrase)
                        .map(|v| {
                            let mut words = if v.plural {
                                pluralize_last(&v.words)
                            } else {
                                v.words.clone()
                            };
                            words.push(Word::new(ASYNC_WORD));
                            NameVariant {
                                words,
                                plural: false,
                                method_phrase: true,
                            }
                        })
                        .collect();
                    self.out.extend(phrases);
                }
            }
            GenericShape::Nullable => self.unwrap_nullable(argument, plural, depth),
        }
    }

    fn unwrap_nullable(&mut self, inner: &'a TypeRef, plural: bool, depth: usize) {
        if is_nullable(inner) {
            tracing::debug!("nested nullable; using fallback name");
            for plural in [plural, true] {
                self.out.push(NameVariant {
                    words: vec![Word::new(NULLABLE_FALLBACK)],
                    plural,
                    method_phrase: false,
                });
            }
            return;
        }
        self.visit(inner, plural, depth + 1);
    }

    fn emit_own_name(&mut self, named: &'a NamedType, plural: bool) {
        self.emit_name(&named.name, plural);
        if named.type_kind == TypeKind::Interface {
            if let Some(stripped) = strip_interface_prefix(&named.name) {
                self.emit_name(stripped, plural);
            }
        }
    }

    fn emit_name(&mut self, name: &'a str, plural: bool) {
        let words = WordBreaker::new(name).words();
        if !words.is_empty() {
            self.out.push(NameVariant {
                words,
                plural,
                method_phrase: false,
            });
        }
    }
}

/// `IGoo` becomes `Goo`; `Item` and `I` are left alone.
fn strip_interface_prefix(name: &str) -> Option<&str> {
    let rest = name.strip_prefix('I')?;
    rest.chars().next().filter(|c| c.is_uppercase()).map(|_| rest)
}

/// An unresolved type, possibly behind aliases.
fn is_erroneous(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Error => true,
        TypeRef::Alias { target, .. } => is_erroneous(target),
        _ => false,
    }
}

fn is_nullable(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Nullable { .. } => true,
        TypeRef::Named(named) => matches!(direct_shape(named), Some((GenericShape::Nullable, _))),
        _ => false,
    }
}

/// The shape of `named` itself, with its single type argument.
fn direct_shape(named: &NamedType) -> Option<(GenericShape, &TypeRef)> {
    let [argument] = named.type_arguments.as_slice() else {
        return None;
    };
    let shape = if named.namespace.is_empty() {
        shapes::from_simple_name(&named.name)
    } else {
        shapes::from_qualified_name(&named.qualified_name())
    }?;
    Some((shape, argument))
}

/// Enumerable and awaitable shapes reached through interfaces or the base-type chain.
///
/// At most one of each shape is kept (the nearest), enumerable first.
fn inherited_shapes(named: &NamedType) -> Vec<(GenericShape, &TypeRef)> {
    let mut found = Vec::new();
    collect_interface_shapes(&named.interfaces, &mut found);

    let mut base = named.base_type.as_ref();
    let mut steps = 0;
    while let Some(TypeRef::Named(base_named)) = base {
        if steps >= MAX_UNWRAP_DEPTH {
            break;
        }
        if let Some((shape, argument)) = direct_shape(base_named) {
            add_shape(&mut found, shape, argument);
        }
        collect_interface_shapes(&base_named.interfaces, &mut found);
        base = base_named.base_type.as_ref();
        steps += 1;
    }

    found.sort_by_key(|(shape, _)| match shape {
        GenericShape::Enumerable => 0,
        GenericShape::Awaitable => 1,
        GenericShape::Nullable => 2,
    });
    found
}

fn collect_interface_shapes<'a>(interfaces: &'a [TypeRef], found: &mut Vec<(GenericShape, &'a TypeRef)>) {
    for interface in interfaces {
        if let TypeRef::Named(named) = interface {
            if let Some((shape, argument)) = direct_shape(named) {
                add_shape(found, shape, argument);
            }
        }
    }
}

fn add_shape<'a>(found: &mut Vec<(GenericShape, &'a TypeRef)>, shape: GenericShape, argument: &'a TypeRef) {
    let inheritable = matches!(shape, GenericShape::Enumerable | GenericShape::Awaitable);
    if inheritable && !found.iter().any(|(s, _)| *s == shape) {
        found.push((shape, argument));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namewright_core::lang::types::predefined::PredefinedTypeId;

    fn named(name: &str) -> TypeRef {
        TypeRef::named(NamedType::new(name))
    }

    fn generic(name: &str, argument: TypeRef) -> TypeRef {
        TypeRef::named(NamedType::new(name).with_type_arguments([argument]))
    }

    fn enumerable(argument: TypeRef) -> TypeRef {
        generic("System.Collections.Generic.IEnumerable", argument)
    }

    fn task(argument: TypeRef) -> TypeRef {
        generic("System.Threading.Tasks.Task", argument)
    }

    fn summary(ty: &TypeRef, options: DecomposeOptions) -> Vec<(String, bool)> {
        decompose(ty, options)
            .iter()
            .map(|v| (v.joined(), v.plural))
            .collect()
    }

    fn texts(ty: &TypeRef) -> Vec<String> {
        decompose(ty, DecomposeOptions::default())
            .iter()
            .map(NameVariant::joined)
            .collect()
    }

    #[test]
    fn scalars_void_and_errors_produce_nothing() {
        for id in [PredefinedTypeId::Int, PredefinedTypeId::Bool, PredefinedTypeId::Char] {
            assert!(texts(&TypeRef::predefined(id)).is_empty());
        }
        assert!(texts(&TypeRef::Void).is_empty());
        assert!(texts(&TypeRef::Error).is_empty());
        assert_eq!(texts(&TypeRef::predefined(PredefinedTypeId::String)), ["String"]);
    }

    #[test]
    fn arrays_and_enumerables_are_plural() {
        let array = TypeRef::array(named("MyClass"));
        assert_eq!(summary(&array, DecomposeOptions::default()), [("MyClass".to_string(), true)]);

        let nested = enumerable(enumerable(named("Test")));
        assert_eq!(summary(&nested, DecomposeOptions::default()), [("Test".to_string(), true)]);

        let list = generic("System.Collections.Generic.List", named("CancellationToken"));
        assert_eq!(texts(&list), ["CancellationToken"]);
    }

    #[test]
    fn unknown_generics_and_wrong_arity_keep_their_own_name() {
        let dict = TypeRef::named(
            NamedType::new("System.Collections.Generic.Dictionary")
                .with_type_arguments([named("Key"), named("Value")]),
        );
        assert_eq!(texts(&dict), ["Dictionary"]);

        let two_args = TypeRef::named(
            NamedType::new("System.Collections.Generic.IEnumerable").with_type_arguments([named("A"), named("B")]),
        );
        assert_eq!(texts(&two_args), ["IEnumerable"]);
    }

    #[test]
    fn awaitables_unwrap_and_offer_async_phrases_on_request() {
        let ty = task(named("MyClass"));
        assert_eq!(texts(&ty), ["MyClass"]);

        let variants = decompose(&ty, DecomposeOptions { async_phrase: true });
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[1].joined(), "MyClassAsync");
        assert!(variants[1].method_phrase);
        assert!(!variants[0].method_phrase);
    }

    #[test]
    fn async_phrase_pluralizes_the_element_not_the_suffix() {
        let ty = task(enumerable(named("Customer")));
        let variants = decompose(&ty, DecomposeOptions { async_phrase: true });
        let phrases: Vec<(String, bool)> = variants
            .iter()
            .filter(|v| v.method_phrase)
            .map(|v| (v.joined(), v.plural))
            .collect();
        assert_eq!(phrases, [("CustomersAsync".to_string(), false)]);
    }

    #[test]
    fn nullable_unwraps_once() {
        let ty = TypeRef::nullable(named("Point"));
        assert_eq!(texts(&ty), ["Point"]);

        let wrapped = generic("System.Nullable", named("Point"));
        assert_eq!(texts(&wrapped), ["Point"]);
    }

    #[test]
    fn nested_nullable_falls_back_to_plural_nullable() {
        let int = TypeRef::predefined(PredefinedTypeId::Int);
        let ty = enumerable(generic("System.Nullable", TypeRef::nullable(int)));
        assert_eq!(summary(&ty, DecomposeOptions::default()), [("Nullable".to_string(), true)]);
    }

    #[test]
    fn bare_nested_nullable_offers_singular_then_plural() {
        let int = TypeRef::predefined(PredefinedTypeId::Int);
        let ty = generic("System.Nullable", TypeRef::nullable(int));
        assert_eq!(
            summary(&ty, DecomposeOptions::default()),
            [("Nullable".to_string(), false), ("Nullable".to_string(), true)]
        );
    }

    #[test]
    fn interfaces_also_offer_the_stripped_name() {
        let goo = TypeRef::named(NamedType::interface("IGoo"));
        assert_eq!(texts(&goo), ["IGoo", "Goo"]);

        let ii = TypeRef::named(NamedType::interface("II"));
        assert_eq!(texts(&ii), ["II", "I"]);

        let item = TypeRef::named(NamedType::interface("Item"));
        assert_eq!(texts(&item), ["Item"]);

        let class = named("IGoo");
        assert_eq!(texts(&class), ["IGoo"]);
    }

    #[test]
    fn aliases_lead_with_their_surface_name() {
        let ty = TypeRef::alias("MyType", TypeRef::predefined(PredefinedTypeId::String));
        assert_eq!(texts(&ty), ["MyType", "String"]);
    }

    #[test]
    fn aliases_of_unresolved_types_produce_nothing() {
        assert!(texts(&TypeRef::alias("Widget", TypeRef::Error)).is_empty());
        let nested = TypeRef::alias("Outer", TypeRef::alias("Inner", TypeRef::Error));
        assert!(texts(&nested).is_empty());
    }

    #[test]
    fn inherited_enumerable_keeps_the_own_name_first() {
        let container = TypeRef::named(
            NamedType::new("Container").with_interface(enumerable(named("Item"))),
        );
        assert_eq!(
            summary(&container, DecomposeOptions::default()),
            [("Container".to_string(), false), ("Item".to_string(), true)]
        );
    }

    #[test]
    fn inheritance_cycles_terminate() {
        // ContainerBase : IEnumerable<ContainerBase>, Container : ContainerBase
        let base_ref = TypeRef::named(NamedType::new("ContainerBase"));
        let container_base = NamedType::new("ContainerBase").with_interface(enumerable(base_ref));
        let container = TypeRef::named(NamedType::new("Container").with_base_type(TypeRef::named(container_base)));
        assert_eq!(texts(&container), ["Container", "ContainerBase"]);
    }

    #[test]
    fn inherited_awaitable_through_enumerable_element() {
        // EnumerableType : IEnumerable<TaskType>, TaskType : Task<TaskType>
        let task_type = NamedType::new("TaskType").with_base_type(task(named("TaskType")));
        let ty = TypeRef::named(NamedType::new("EnumerableType").with_interface(enumerable(TypeRef::named(task_type))));
        let variants = summary(&ty, DecomposeOptions::default());
        assert_eq!(variants[0], ("EnumerableType".to_string(), false));
        assert!(variants.contains(&("TaskType".to_string(), true)));
    }

    #[test]
    fn enumerable_is_applied_before_awaitable() {
        let ty = TypeRef::named(
            NamedType::new("Both")
                .with_base_type(task(named("Result")))
                .with_interface(enumerable(named("Row"))),
        );
        assert_eq!(texts(&ty), ["Both", "Row", "Result"]);
    }

    #[test]
    fn depth_limit_stops_pathological_nesting() {
        let mut ty = named("Leaf");
        for _ in 0..(MAX_UNWRAP_DEPTH * 2) {
            ty = generic("System.Threading.Tasks.Task", ty);
        }
        let out = texts(&ty);
        assert_eq!(out, ["Task"]);
    }
}
