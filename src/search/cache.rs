use rustc_hash::FxHashMap;

use crate::lexicon::Lexicon;

/// Memoized prefix lookups. Lives for one search, so concurrent searches
/// never share one.
#[derive(Clone, Debug, Default)]
pub struct CachedIsViable {
    is_viable_cache: FxHashMap<String, bool>,
}

impl CachedIsViable {
    pub fn new() -> CachedIsViable {
        CachedIsViable::default()
    }

    /// `prefix` must already be upper-cased.
    pub fn is_viable(&mut self, prefix: &str, lexicon: &Lexicon) -> bool {
        if let Some(viable) = self.is_viable_cache.get(prefix) {
            return *viable;
        }

        let viable = lexicon.is_viable(prefix);
        self.is_viable_cache.insert(prefix.to_owned(), viable);
        viable
    }

    pub fn len(&self) -> usize {
        self.is_viable_cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_viable_cache.is_empty()
    }
}
