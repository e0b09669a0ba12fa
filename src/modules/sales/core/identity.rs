// Natural key to surrogate id resolution.
//
// Purpose
// - Give every distinct natural key exactly one id within a run, and the same id across runs
//   when the previously issued ids are known.
//
// Responsibilities
// - Seed from previously issued ids (store-aware) or start empty (store-less).
// - First occurrence wins. A key resolved once keeps its id for the rest of the run.
// - Never mint an id for a key that is already known.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<Id> {
    /// The key was issued an id before this run.
    Reused(Id),
    /// The key is new and was issued an id now.
    Minted(Id),
    /// The key was already resolved earlier in this run.
    Seen(Id),
}

impl<Id: Copy> Resolution<Id> {
    pub fn id(&self) -> Id {
        match self {
            Resolution::Reused(id) | Resolution::Minted(id) | Resolution::Seen(id) => *id,
        }
    }

    /// True for the first resolution of a key within the run.
    pub fn is_first_occurrence(&self) -> bool {
        !matches!(self, Resolution::Seen(_))
    }
}

#[derive(Debug, Clone)]
pub struct IdentityResolver<K, Id> {
    issued: HashMap<K, Id>,
    resolved: HashMap<K, Id>,
}

impl<K, Id> IdentityResolver<K, Id>
where
    K: Eq + Hash + Clone,
    Id: Copy,
{
    /// No prior ids are known; every distinct key in the run is minted.
    pub fn store_less() -> Self {
        Self {
            issued: HashMap::new(),
            resolved: HashMap::new(),
        }
    }

    /// Seeds the resolver with ids issued by earlier runs. When the same key appears more
    /// than once in `issued`, the first entry wins.
    pub fn store_aware(issued: impl IntoIterator<Item = (K, Id)>) -> Self {
        let mut known = HashMap::new();
        for (key, id) in issued {
            known.entry(key).or_insert(id);
        }
        Self {
            issued: known,
            resolved: HashMap::new(),
        }
    }

    pub fn resolve(&mut self, key: &K, mint: impl FnOnce() -> Id) -> Resolution<Id> {
        if let Some(id) = self.resolved.get(key) {
            return Resolution::Seen(*id);
        }
        let resolution = match self.issued.get(key) {
            Some(id) => Resolution::Reused(*id),
            None => Resolution::Minted(mint()),
        };
        self.resolved.insert(key.clone(), resolution.id());
        resolution
    }

    /// Keys resolved during this run, mapped to their ids.
    pub fn into_resolved(self) -> HashMap<K, Id> {
        self.resolved
    }
}
