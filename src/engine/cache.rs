/*!
The per-invocation memoization cache.

A fresh [`Cache`] is built for every top-level [`crate::engine::Reasoner::derives`]
call and discarded at its end: the cache is never shared across calls or
threads. Three-valued rather than overloading a boolean with a sentinel.
*/

use std::collections::HashMap;

use crate::sentence::SentenceSet;

/// The state of a goal in the cache.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CacheState {
    /// On the current call stack --- encountering it again is a cycle, not
    /// a cache hit.
    Pending,
    Provable,
    Refutable,
}

pub(crate) type Cache = HashMap<(SentenceSet, SentenceSet), CacheState>;
