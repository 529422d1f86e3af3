//! Caller-side entry point for name completion.

use std::sync::Arc;

use super::cache::DecompositionCache;
use super::suggester::DeclarationNameSuggester;
use super::types::{Candidate, DeclarationContext};
use crate::naming::{NamingConfig, NamingStylePreferences};

/// Name completion options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionOptions {
    /// Whether to offer name suggestions at all
    pub show_name_suggestions: bool,
    /// Whether to memoize type decompositions across requests
    pub cache_decompositions: bool,
}

impl Default for SuggestionOptions {
    fn default() -> Self {
        Self {
            show_name_suggestions: true,
            cache_decompositions: true,
        }
    }
}

impl SuggestionOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn name suggestions on or off
    pub fn with_show_name_suggestions(mut self, show: bool) -> Self {
        self.show_name_suggestions = show;
        self
    }

    /// Turn the decomposition cache on or off
    pub fn with_cache_decompositions(mut self, cache: bool) -> Self {
        self.cache_decompositions = cache;
        self
    }
}

/// Owns the rule set and options; skips the suggester entirely when suggestions are off.
#[derive(Debug)]
pub struct DeclarationNameCompletion {
    preferences: Arc<NamingStylePreferences>,
    options: SuggestionOptions,
    cache: Option<DecompositionCache>,
}

impl DeclarationNameCompletion {
    pub fn new(preferences: Arc<NamingStylePreferences>) -> Self {
        Self::with_options(preferences, SuggestionOptions::default())
    }

    pub fn with_options(preferences: Arc<NamingStylePreferences>, options: SuggestionOptions) -> Self {
        let cache = options.cache_decompositions.then(DecompositionCache::new);
        Self {
            preferences,
            options,
            cache,
        }
    }

    /// Build from parsed configuration text, honoring its `show_name_suggestions` switch.
    pub fn from_config(config: NamingConfig) -> Self {
        let options = SuggestionOptions::default().with_show_name_suggestions(config.show_name_suggestions);
        Self::with_options(Arc::new(config.preferences), options)
    }

    pub fn preferences(&self) -> &NamingStylePreferences {
        &self.preferences
    }

    pub fn options(&self) -> SuggestionOptions {
        self.options
    }

    /// Candidates for `context`, or nothing when suggestions are disabled.
    pub fn provide(&self, context: &DeclarationContext) -> Vec<Candidate> {
        if !self.options.show_name_suggestions {
            tracing::debug!("name suggestions disabled");
            return Vec::new();
        }
        let suggester = DeclarationNameSuggester::new(&self.preferences);
        match &self.cache {
            Some(cache) => suggester.with_cache(cache).suggest(context),
            None => suggester.suggest(context),
        }
    }
}
