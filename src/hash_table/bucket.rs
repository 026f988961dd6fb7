use crate::Equivalent;

/// [`Pair`] is a single key-value entry stored in a [`Bucket`].
///
/// A [`Pair`] is moved as a whole when the table is resized; it is never reconstructed.
#[derive(Debug)]
pub(crate) struct Pair<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// [`Bucket`] is the chain of [`Pair`] instances that hash to the same slot.
///
/// Keys in a [`Bucket`] are pairwise distinct; the order of pairs is the order in which they
/// were appended.
#[derive(Debug)]
pub(crate) struct Bucket<K, V> {
    chain: Vec<Pair<K, V>>,
}

impl<K, V> Bucket<K, V> {
    /// Appends a pair without checking for a duplicate key.
    ///
    /// Returns the position of the appended pair.
    #[inline]
    pub(crate) fn push(&mut self, pair: Pair<K, V>) -> usize {
        self.chain.push(pair);
        self.chain.len() - 1
    }

    /// Removes the last pair of the chain.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Pair<K, V>> {
        self.chain.pop()
    }

    /// Removes the pair at `pos`, shifting the following pairs to keep their relative order.
    #[inline]
    pub(crate) fn remove(&mut self, pos: usize) -> Pair<K, V> {
        self.chain.remove(pos)
    }

    #[inline]
    pub(crate) fn pair(&self, pos: usize) -> &Pair<K, V> {
        &self.chain[pos]
    }

    #[inline]
    pub(crate) fn pair_mut(&mut self, pos: usize) -> &mut Pair<K, V> {
        &mut self.chain[pos]
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.chain.clear();
    }

    #[inline]
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Pair<K, V>> {
        self.chain.iter()
    }

    #[inline]
    pub(crate) fn into_pairs(self) -> std::vec::IntoIter<Pair<K, V>> {
        self.chain.into_iter()
    }

    /// Scans the chain for a pair with an equivalent key.
    #[inline]
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: Equivalent<K> + ?Sized,
    {
        self.chain.iter().position(|pair| key.equivalent(&pair.key))
    }
}

impl<K, V> Default for Bucket<K, V> {
    #[inline]
    fn default() -> Self {
        Self { chain: Vec::new() }
    }
}
