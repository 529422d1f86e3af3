//! Ranked name candidates for a declaration site.
//!
//! ## Notes
//! - Categories are visited in a fixed priority: field, parameter, local, property, event, type
//!   parameter, type declarations, method, local function. Within a category, variants come in
//!   decomposition order and each variant's groupings in generation order.
//! - The first occurrence of a rendered name keeps its category.
//! - Single-letter names, names already declared in scope and `...Async` phrases outside async
//!   method-like sites are dropped.

use std::collections::HashSet;

use namewright_core::lang::keywords;
use namewright_core::lang::modifiers::ModifierId;
use namewright_core::lang::symbol_kinds::SymbolKind;
use namewright_core::{plural, word_groupings};

use super::cache::DecompositionCache;
use super::decompose::{DecomposeOptions, NameVariant, decompose};
use super::types::{Candidate, DeclarationContext};
use crate::naming::NamingStylePreferences;

const ASYNC_SUFFIX: &str = "Async";

/// Suggests names for declarations from their declared type.
///
/// Stateless apart from the borrowed preferences and optional cache; one instance can serve
/// any number of requests, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationNameSuggester<'p> {
    preferences: &'p NamingStylePreferences,
    cache: Option<&'p DecompositionCache>,
}

impl<'p> DeclarationNameSuggester<'p> {
    pub fn new(preferences: &'p NamingStylePreferences) -> Self {
        Self {
            preferences,
            cache: None,
        }
    }

    /// Reuse decompositions through `cache`.
    pub fn with_cache(mut self, cache: &'p DecompositionCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Produce the ordered, deduplicated candidate list for `context`.
    ///
    /// ## Returns
    /// - An empty list when the site already has a name, has no declared type, or the type has
    ///   nothing nameable about it.
    #[tracing::instrument(skip_all, fields(kinds = context.possible_kinds.len(), has_name = context.has_name))]
    pub fn suggest(&self, context: &DeclarationContext) -> Vec<Candidate> {
        if context.has_name {
            return Vec::new();
        }
        let Some(ty) = context.declared_type.as_ref() else {
            return Vec::new();
        };
        let kinds = ordered_kinds(&context.possible_kinds);
        if kinds.is_empty() {
            return Vec::new();
        }

        let options = DecomposeOptions {
            async_phrase: kinds.iter().any(|kind| kind.is_method_like()) && context.modifiers.contains(ModifierId::Async),
        };
        let candidates = match self.cache {
            Some(cache) => self.render(context, &kinds, &cache.get_or_compute(ty, options)),
            None => self.render(context, &kinds, &decompose(ty, options)),
        };
        tracing::debug!(count = candidates.len(), "suggested names");
        candidates
    }

    fn render(&self, context: &DeclarationContext, kinds: &[SymbolKind], variants: &[NameVariant<'_>]) -> Vec<Candidate> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates = Vec::new();

        for &kind in kinds {
            let style = self.preferences.style_for(&context.symbol(kind));
            let method_like = kind.is_method_like();

            for variant in variants {
                if variant.method_phrase && (!method_like || style.suffix.ends_with(ASYNC_SUFFIX)) {
                    continue;
                }
                let groupings = if variant.method_phrase {
                    vec![variant.words.as_slice()]
                } else {
                    word_groupings(&variant.words)
                };

                for words in groupings {
                    let rendered = if variant.plural {
                        style.render(&plural::pluralize_last(words))
                    } else {
                        style.render(words)
                    };
                    if rendered.chars().count() <= 1 || is_declared(context, &rendered) {
                        continue;
                    }
                    let text = keywords::escape_identifier(&rendered).into_owned();
                    if seen.insert(text.clone()) {
                        candidates.push(Candidate::new(text, kind));
                    }
                }
            }
        }
        candidates
    }
}

fn is_declared(context: &DeclarationContext, name: &str) -> bool {
    context
        .sibling_names
        .iter()
        .any(|sibling| keywords::unescape_identifier(sibling) == name)
}

fn category_priority(kind: SymbolKind) -> u8 {
    match kind {
        SymbolKind::Field => 0,
        SymbolKind::Parameter => 1,
        SymbolKind::Local => 2,
        SymbolKind::Property => 3,
        SymbolKind::Event => 4,
        SymbolKind::TypeParameter => 5,
        SymbolKind::Class | SymbolKind::Struct | SymbolKind::Interface | SymbolKind::Enum | SymbolKind::Delegate => 6,
        SymbolKind::Method => 7,
        SymbolKind::LocalFunction => 8,
    }
}

fn ordered_kinds(kinds: &[SymbolKind]) -> Vec<SymbolKind> {
    let mut ordered = kinds.to_vec();
    ordered.sort_by_key(|kind| category_priority(*kind));
    ordered.dedup();
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::DeclarationModifiers;
    use crate::suggest::types::{Glyph, NamedType, TypeRef};

    fn texts(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.text.as_str()).collect()
    }

    fn suggest(context: &DeclarationContext) -> Vec<Candidate> {
        DeclarationNameSuggester::new(NamingStylePreferences::builtin()).suggest(context)
    }

    fn my_class() -> TypeRef {
        TypeRef::named(NamedType::new("MyClass"))
    }

    #[test]
    fn member_site_orders_fields_then_properties_then_methods() {
        let context = DeclarationContext::new(
            my_class(),
            [SymbolKind::Method, SymbolKind::Property, SymbolKind::Field],
        );
        let candidates = suggest(&context);
        assert_eq!(
            texts(&candidates),
            ["myClass", "my", "@class", "MyClass", "My", "Class", "GetMyClass", "GetMy", "GetClass"]
        );
        assert_eq!(candidates[0].glyph, Glyph::Field);
        assert_eq!(candidates[3].kind, SymbolKind::Property);
        assert_eq!(candidates[6].glyph, Glyph::Method);
    }

    #[test]
    fn existing_name_or_missing_type_yields_nothing() {
        let named = DeclarationContext::new(my_class(), [SymbolKind::Field]).with_existing_name();
        assert!(suggest(&named).is_empty());

        let untyped = DeclarationContext {
            possible_kinds: vec![SymbolKind::Local],
            ..DeclarationContext::default()
        };
        assert!(suggest(&untyped).is_empty());
    }

    #[test]
    fn single_letter_names_are_dropped() {
        let context = DeclarationContext::new(TypeRef::named(NamedType::new("C")), [SymbolKind::Field, SymbolKind::Property]);
        assert!(suggest(&context).is_empty());
    }

    #[test]
    fn sibling_names_are_dropped() {
        let context = DeclarationContext::new(my_class(), [SymbolKind::Local]).with_sibling_names(["myClass", "@class"]);
        assert_eq!(texts(&suggest(&context)), ["my"]);
    }

    #[test]
    fn duplicate_renderings_keep_the_first_category() {
        let context = DeclarationContext::new(my_class(), [SymbolKind::Local, SymbolKind::Parameter]);
        let candidates = suggest(&context);
        assert_eq!(texts(&candidates), ["myClass", "my", "@class"]);
        assert!(candidates.iter().all(|c| c.kind == SymbolKind::Parameter));
    }

    #[test]
    fn async_phrases_need_an_async_method_site() {
        let task = TypeRef::named(
            NamedType::new("System.Threading.Tasks.Task").with_type_arguments([TypeRef::named(NamedType::new("Customer"))]),
        );
        let async_site = DeclarationContext::new(task.clone(), [SymbolKind::Method])
            .with_modifiers(DeclarationModifiers::empty().with(ModifierId::Async));
        assert_eq!(texts(&suggest(&async_site)), ["GetCustomer", "GetCustomerAsync"]);

        let sync_site = DeclarationContext::new(task, [SymbolKind::Method]);
        assert_eq!(texts(&suggest(&sync_site)), ["GetCustomer"]);
    }

    #[test]
    fn cached_and_uncached_agree() {
        let cache = DecompositionCache::new();
        let context = DeclarationContext::new(
            TypeRef::array(TypeRef::named(NamedType::new("OrderLine"))),
            [SymbolKind::Parameter, SymbolKind::Property],
        );
        let suggester = DeclarationNameSuggester::new(NamingStylePreferences::builtin());
        let direct = suggester.suggest(&context);
        let cached = suggester.with_cache(&cache).suggest(&context);
        assert_eq!(direct, cached);
        assert_eq!(texts(&direct)[0], "orderLines");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn kinds_are_sorted_and_deduplicated() {
        let kinds = ordered_kinds(&[SymbolKind::LocalFunction, SymbolKind::Method, SymbolKind::Field, SymbolKind::Method]);
        assert_eq!(kinds, [SymbolKind::Field, SymbolKind::Method, SymbolKind::LocalFunction]);
    }
}
