//! Variable identifier pool.
//!
//! Maps arbitrary proposition keys to positive variable identifiers. The
//! first request for a key allocates the next identifier in sequence, so
//! callers that request keys in a fixed order get a deterministic, dense
//! numbering starting from `1`. Later requests for the same key return the
//! identifier already allocated.

use crate::sat::literal::Variable;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A pool of variable identifiers, one per distinct proposition key.
#[derive(Debug, Clone)]
pub struct VarPool<K> {
    ids: FxHashMap<K, Variable>,
    next: Variable,
}

impl<K> Default for VarPool<K> {
    fn default() -> Self {
        Self {
            ids: FxHashMap::default(),
            next: 0,
        }
    }
}

impl<K: Eq + Hash> VarPool<K> {
    /// Creates an empty pool. The first allocated identifier is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The identifier for `key`, allocating a fresh one on first sight.
    pub fn id(&mut self, key: K) -> Variable {
        if let Some(&var) = self.ids.get(&key) {
            return var;
        }
        self.next += 1;
        self.ids.insert(key, self.next);
        self.next
    }

    /// The identifier already allocated for `key`, if any. Never allocates.
    #[must_use]
    pub fn lookup(&self, key: &K) -> Option<Variable> {
        self.ids.get(key).copied()
    }

    /// Number of identifiers allocated so far; also the highest identifier.
    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.next as usize
    }

    /// `true` if no identifiers have been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next == 0
    }
}
