//! Shared memo of type decompositions.
//!
//! Decomposition is a pure function of the type structure and the [`DecomposeOptions`], so the
//! result can be reused across requests and threads.
//!
//! ## Notes
//! - The key is the whole [`TypeRef`], base types and interfaces included. Two types that share a
//!   qualified spelling but differ in what they implement get separate entries.
//! - Values are computed outside the map's shard locks. Two threads racing on the same key may
//!   both compute; the first insert wins and both observe equal values.
//! - Entries are never evicted.

use std::sync::Arc;

use dashmap::DashMap;

use super::decompose::{DecomposeOptions, NameVariant, decompose};
use super::types::TypeRef;

type CacheKey = (TypeRef, DecomposeOptions);

/// Thread-safe map from `(type, options)` to the decomposed variants.
#[derive(Debug, Default)]
pub struct DecompositionCache {
    entries: DashMap<CacheKey, Arc<Vec<NameVariant<'static>>>>,
}

impl DecompositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached decomposition of `ty`, computing and storing it on a miss.
    pub fn get_or_compute(&self, ty: &TypeRef, options: DecomposeOptions) -> Arc<Vec<NameVariant<'static>>> {
        let key = (ty.clone(), options);
        if let Some(hit) = self.entries.get(&key) {
            return Arc::clone(hit.value());
        }

        let computed: Vec<NameVariant<'static>> = decompose(ty, options)
            .into_iter()
            .map(NameVariant::into_owned)
            .collect();
        tracing::trace!(identity = %ty.identity(), variants = computed.len(), "caching decomposition");
        let entry = self.entries.entry(key).or_insert_with(|| Arc::new(computed));
        Arc::clone(entry.value())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::types::NamedType;
    use std::thread;

    fn task_of(name: &str) -> TypeRef {
        TypeRef::named(
            NamedType::new("System.Threading.Tasks.Task").with_type_arguments([TypeRef::named(NamedType::new(name))]),
        )
    }

    #[test]
    fn repeated_lookups_share_one_entry() {
        let cache = DecompositionCache::new();
        let ty = task_of("Widget");
        let first = cache.get_or_compute(&ty, DecomposeOptions::default());
        let second = cache.get_or_compute(&ty, DecomposeOptions::default());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn options_are_part_of_the_key() {
        let cache = DecompositionCache::new();
        let ty = task_of("Widget");
        let plain = cache.get_or_compute(&ty, DecomposeOptions::default());
        let phrased = cache.get_or_compute(&ty, DecomposeOptions { async_phrase: true });
        assert_eq!(plain.len(), 1);
        assert_eq!(phrased.len(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn implemented_interfaces_are_part_of_the_key() {
        let cache = DecompositionCache::new();
        let bare = TypeRef::named(NamedType::new("App.Container"));
        let items = TypeRef::named(
            NamedType::new("System.Collections.Generic.IEnumerable")
                .with_type_arguments([TypeRef::named(NamedType::new("App.Item"))]),
        );
        let enumerable = TypeRef::named(NamedType::new("App.Container").with_interface(items));
        assert_eq!(bare.identity(), enumerable.identity());

        let first = cache.get_or_compute(&bare, DecomposeOptions::default());
        let second = cache.get_or_compute(&enumerable, DecomposeOptions::default());
        assert_eq!(cache.len(), 2);
        assert_eq!(first.len(), 1);
        let joined: Vec<String> = second.iter().map(|v| v.joined()).collect();
        assert_eq!(joined, ["Container", "Item"]);
        assert!(second[1].plural);
    }

    #[test]
    fn cached_result_matches_direct_decomposition() {
        let cache = DecompositionCache::new();
        let ty = TypeRef::array(TypeRef::named(NamedType::interface("IWidget")));
        let cached = cache.get_or_compute(&ty, DecomposeOptions::default());
        let direct: Vec<NameVariant<'static>> = decompose(&ty, DecomposeOptions::default())
            .into_iter()
            .map(NameVariant::into_owned)
            .collect();
        assert_eq!(*cached, direct);
    }

    #[test]
    fn concurrent_readers_agree() {
        let cache = DecompositionCache::new();
        let ty = task_of("Shared");
        let results: Vec<Arc<Vec<NameVariant<'static>>>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| cache.get_or_compute(&ty, DecomposeOptions::default())))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(cache.len(), 1);
        for result in &results {
            assert_eq!(**result, *results[0]);
        }

        cache.clear();
        assert!(cache.is_empty());
    }
}
