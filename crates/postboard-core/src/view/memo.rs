//! Single-slot memo for derived values.

/// Remembers the last computed value together with the key it was computed
/// for. A lookup with an equal key reuses the value; anything else recomputes
/// and replaces the slot.
#[derive(Debug)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    hits: u64,
    misses: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            slot: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing it with `compute` on a miss.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some((cached_key, value)) = &self.slot {
            if *cached_key == key {
                self.hits += 1;
                return value.clone();
            }
        }

        self.misses += 1;
        let value = compute();
        self.slot = Some((key, value.clone()));
        value
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
