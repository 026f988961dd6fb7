//! [`HashTable`] is a separate-chaining hash table that grows by doubling its bucket array.

pub(crate) mod bucket;

use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::fmt::{self, Debug, Display};
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::FusedIterator;
use std::mem::replace;
use std::ops::Index;
use std::ptr;
use std::slice;

use bucket::{Bucket, Pair};

use crate::{Equivalent, Error};

/// The number of buckets of a [`HashTable`] created by [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// The bucket array is doubled as soon as `len / capacity` exceeds this value.
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.7;

/// Separate-chaining hash table.
///
/// [`HashTable`] stores key-value pairs in an array of buckets, each bucket being a chain of pairs
/// whose keys hash to the same slot. The bucket of a key is `hash(key) % capacity`, and the chain
/// is scanned linearly for an equal key.
///
/// ## Growth
///
/// Whenever an insertion appends a new pair and the load factor, `len / capacity`, rises above
/// [`LOAD_FACTOR_THRESHOLD`], the bucket array is doubled and every pair is moved to the bucket
/// derived from the new capacity. The capacity never shrinks; removing entries leaves the bucket
/// array as it is.
///
/// ## Hashing
///
/// Keys are hashed with their [`Hash`] implementation fed to a [`RandomState`] chosen when the
/// table is created. The hasher cannot be replaced.
///
/// ## Concurrency
///
/// [`HashTable`] has no internal synchronization; mutating methods take `&mut self`. Wrap it in a
/// lock, e.g., [`Mutex`](std::sync::Mutex), to share it among threads.
pub struct HashTable<K, V> {
    buckets: Vec<Bucket<K, V>>,
    num_entries: usize,
    build_hasher: RandomState,
}

/// An iterator over the key-value pairs of a [`HashTable`].
///
/// Pairs are visited in bucket order, then in chain order.
pub struct Iter<'t, K, V> {
    buckets: slice::Iter<'t, Bucket<K, V>>,
    chain: Option<slice::Iter<'t, Pair<K, V>>>,
    remaining: usize,
}

/// An iterator over the keys of a [`HashTable`].
///
/// The order of keys is unspecified and may change after the table is modified.
pub struct Keys<'t, K, V> {
    iter: Iter<'t, K, V>,
}

impl<K, V> HashTable<K, V> {
    /// Returns the number of buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let hashtable: HashTable<u64, u32> = HashTable::with_capacity(3).unwrap();
    /// assert_eq!(hashtable.capacity(), 3);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries in the [`HashTable`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// hashtable.set(1, 0);
    /// hashtable.set(1, 1);
    /// assert_eq!(hashtable.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.num_entries
    }

    /// Returns `true` if the [`HashTable`] is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// assert!(hashtable.is_empty());
    /// hashtable.set(1, 0);
    /// assert!(!hashtable.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }

    /// Returns the ratio of the number of entries to the number of buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::with_capacity(4).unwrap();
    ///
    /// hashtable.set(1, 0);
    /// assert!((hashtable.load_factor() - 0.25).abs() < f64::EPSILON);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[inline]
    pub fn load_factor(&self) -> f64 {
        if self.buckets.is_empty() {
            0.0
        } else {
            self.num_entries as f64 / self.buckets.len() as f64
        }
    }

    /// Returns an iterator over all the key-value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// hashtable.set(1, 10);
    /// hashtable.set(2, 20);
    ///
    /// let sum: u32 = hashtable.iter().map(|(_, v)| *v).sum();
    /// assert_eq!(sum, 30);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.num_entries,
        }
    }

    /// Returns all the values in bucket order, then in chain order.
    ///
    /// Values are neither deduplicated nor sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::{have_same_elements, HashTable};
    ///
    /// let mut hashtable: HashTable<&str, u32> = HashTable::new();
    ///
    /// hashtable.set("a", 7);
    /// hashtable.set("b", 7);
    /// assert!(have_same_elements(hashtable.values(), [&7, &7]));
    /// ```
    #[inline]
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Removes all the entries, keeping the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// for i in 0..32 {
    ///     hashtable.set(i, 0);
    /// }
    /// let capacity = hashtable.capacity();
    /// hashtable.clear();
    ///
    /// assert!(hashtable.is_empty());
    /// assert_eq!(hashtable.capacity(), capacity);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Bucket::clear);
        self.num_entries = 0;
    }

    /// Allocates a [`HashTable`] with `capacity` empty buckets.
    fn allocate(capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        Self {
            buckets: Self::empty_buckets(capacity),
            num_entries: 0,
            build_hasher: RandomState::new(),
        }
    }

    fn empty_buckets(capacity: usize) -> Vec<Bucket<K, V>> {
        (0..capacity).map(|_| Bucket::default()).collect()
    }
}

impl<K, V> HashTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty [`HashTable`] with [`DEFAULT_CAPACITY`] buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let hashtable: HashTable<u64, u32> = HashTable::new();
    /// assert_eq!(hashtable.capacity(), 8);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Creates an empty [`HashTable`] with exactly `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::{Error, HashTable};
    ///
    /// let hashtable: HashTable<u64, u32> = HashTable::with_capacity(100).unwrap();
    /// assert_eq!(hashtable.capacity(), 100);
    ///
    /// let result: Result<HashTable<u64, u32>, Error> = HashTable::with_capacity(0);
    /// assert_eq!(result.err(), Some(Error::InvalidCapacity(0)));
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self::allocate(capacity))
    }

    /// Creates a [`HashTable`] from the key-value pairs of an existing mapping.
    ///
    /// If `capacity` is `None`, the [`HashTable`] is pre-sized to ten times the number of pairs in
    /// `source` so that populating it does not trigger a resize. Each pair is inserted with
    /// [`set`](Self::set), therefore a later pair overwrites an earlier one with the same key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if the resulting capacity is zero, which is the case for
    /// an empty `source` without an explicit capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    /// use std::collections::BTreeMap;
    ///
    /// let source = BTreeMap::from([("one", 1), ("two", 2)]);
    ///
    /// let hashtable = HashTable::from_mapping(source.clone(), None).unwrap();
    /// assert_eq!(hashtable.capacity(), 20);
    /// assert_eq!(hashtable.get(&"two"), Some(&2));
    ///
    /// let hashtable = HashTable::from_mapping(source, Some(1)).unwrap();
    /// assert_eq!(hashtable.len(), 2);
    ///
    /// assert!(HashTable::<u64, u32>::from_mapping([], None).is_err());
    /// ```
    #[inline]
    pub fn from_mapping<I>(source: I, capacity: Option<usize>) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: ExactSizeIterator,
    {
        let source = source.into_iter();
        let capacity = capacity.unwrap_or_else(|| source.len().saturating_mul(10));
        if capacity < 1 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self::populate(source, capacity))
    }

    /// Inserts a key-value pair, or replaces the value if the key exists.
    ///
    /// Returns the old value if the key was present. A replaced value keeps the position of the
    /// pair in its chain; a new pair is appended, and the table is resized if the load factor
    /// exceeds [`LOAD_FACTOR_THRESHOLD`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<&str, u32> = HashTable::new();
    ///
    /// assert!(hashtable.set("a", 1).is_none());
    /// assert_eq!(hashtable.set("a", 3), Some(1));
    /// assert_eq!(hashtable["a"], 3);
    /// ```
    #[inline]
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        if let Some(pos) = self.buckets[index].search(&key) {
            return Some(replace(&mut self.buckets[index].pair_mut(pos).value, value));
        }
        self.append(index, Pair { key, value });
        None
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::{Error, HashTable};
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// assert_eq!(hashtable.get_required(&1), Err(Error::KeyNotFound));
    /// hashtable.set(1, 10);
    /// assert_eq!(hashtable.get_required(&1), Ok(&10));
    /// ```
    #[inline]
    pub fn get_required<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let bucket = &self.buckets[self.bucket_index(key)];
        bucket
            .search(key)
            .map(|pos| &bucket.pair(pos).value)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<String, u32> = HashTable::new();
    ///
    /// assert!(hashtable.get("one").is_none());
    /// hashtable.set("one".to_string(), 1);
    /// assert_eq!(hashtable.get("one"), Some(&1));
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.get_required(key).ok()
    }

    /// Returns a reference to the value corresponding to the key, or `default` if the key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// hashtable.set(1, 10);
    /// assert_eq!(*hashtable.get_or(&1, &0), 10);
    /// assert_eq!(*hashtable.get_or(&2, &0), 0);
    /// ```
    #[inline]
    pub fn get_or<'t, Q>(&'t self, key: &Q, default: &'t V) -> &'t V
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// hashtable.set(1, 10);
    /// if let Some(v) = hashtable.get_mut(&1) {
    ///     *v += 1;
    /// }
    /// assert_eq!(hashtable[&1], 11);
    /// ```
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let pos = bucket.search(key)?;
        Some(&mut bucket.pair_mut(pos).value)
    }

    /// Returns `true` if the [`HashTable`] contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// assert!(!hashtable.contains(&1));
    /// hashtable.set(1, 0);
    /// assert!(hashtable.contains(&1));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.get_required(key).is_ok()
    }

    /// Removes the entry of the key and returns its value.
    ///
    /// The remaining pairs of the chain keep their relative order. The capacity is not reduced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] without modifying the table if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::{Error, HashTable};
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// hashtable.set(1, 0);
    /// assert_eq!(hashtable.delete(&1), Ok(0));
    /// assert_eq!(hashtable.delete(&1), Err(Error::KeyNotFound));
    /// ```
    #[inline]
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V, Error>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let pos = bucket.search(key).ok_or(Error::KeyNotFound)?;
        let pair = bucket.remove(pos);
        self.num_entries -= 1;
        Ok(pair.value)
    }

    /// Inserts every key-value pair yielded by `source`.
    ///
    /// Any mapping or sequence of pairs can be passed; overriding entries can be chained onto the
    /// source or applied with another call. Each pair goes through [`set`](Self::set), so each one
    /// may trigger a resize.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    /// use std::collections::HashMap;
    ///
    /// let mut hashtable: HashTable<&str, u32> = HashTable::new();
    ///
    /// hashtable.update(HashMap::from([("a", 1), ("b", 2)]));
    /// hashtable.update(vec![("b", 3)].into_iter().chain([("c", 4)]));
    /// assert_eq!(hashtable.len(), 3);
    /// assert_eq!(hashtable["b"], 3);
    /// ```
    #[inline]
    pub fn update<I: IntoIterator<Item = (K, V)>>(&mut self, source: I) {
        source.into_iter().for_each(|(k, v)| {
            self.set(k, v);
        });
    }

    /// Removes the entry of the key and returns its value, or returns `default`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key does not exist and `default` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::{Error, HashTable};
    ///
    /// let mut hashtable: HashTable<u64, Option<u32>> = HashTable::new();
    ///
    /// hashtable.set(1, Some(10));
    /// assert_eq!(hashtable.pop(&1, None), Ok(Some(10)));
    /// assert_eq!(hashtable.pop(&1, Some(None)), Ok(None));
    /// assert_eq!(hashtable.pop(&1, None), Err(Error::KeyNotFound));
    /// ```
    #[inline]
    pub fn pop<Q>(&mut self, key: &Q, default: Option<V>) -> Result<V, Error>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.delete(key).or_else(|e| default.ok_or(e))
    }

    /// Removes and returns an arbitrary key-value pair.
    ///
    /// The last pair of the first non-empty bucket is removed; callers must not rely on which
    /// pair is picked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTable`] if the [`HashTable`] is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::{Error, HashTable};
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// assert_eq!(hashtable.popitem(), Err(Error::EmptyTable));
    /// hashtable.set(1, 10);
    /// assert_eq!(hashtable.popitem(), Ok((1, 10)));
    /// assert!(hashtable.is_empty());
    /// ```
    #[inline]
    pub fn popitem(&mut self) -> Result<(K, V), Error> {
        let pair = self
            .buckets
            .iter_mut()
            .find_map(Bucket::pop)
            .ok_or(Error::EmptyTable)?;
        self.num_entries -= 1;
        Ok((pair.key, pair.value))
    }

    /// Returns a mutable reference to the value of the key, inserting `default` if the key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<char, u32> = HashTable::new();
    ///
    /// for ch in "a short treatise on fungi".chars() {
    ///     *hashtable.setdefault(ch, 0) += 1;
    /// }
    ///
    /// assert_eq!(hashtable[&'s'], 2);
    /// assert_eq!(hashtable[&'t'], 3);
    /// assert!(!hashtable.contains(&'y'));
    /// ```
    #[inline]
    pub fn setdefault(&mut self, key: K, default: V) -> &mut V {
        let index = self.bucket_index(&key);
        let (index, pos) = match self.buckets[index].search(&key) {
            Some(pos) => (index, pos),
            None => self.append(index, Pair { key, value: default }),
        };
        &mut self.buckets[index].pair_mut(pos).value
    }

    /// Returns an independent [`HashTable`] with the same capacity and the same entries.
    ///
    /// The entries are re-inserted one by one, therefore the order of pairs within a chain may
    /// differ from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    /// hashtable.set(1, 0);
    ///
    /// let mut copied = hashtable.copy();
    /// assert_eq!(copied, hashtable);
    ///
    /// copied.set(2, 0);
    /// assert!(!hashtable.contains(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self::populate(
            self.iter().map(|(k, v)| (k.clone(), v.clone())),
            self.capacity(),
        )
    }

    /// Returns the set of all the key-value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    /// use std::collections::HashSet;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// hashtable.set(1, 10);
    /// hashtable.set(2, 20);
    /// assert_eq!(hashtable.pairs(), HashSet::from([(&1, &10), (&2, &20)]));
    /// ```
    #[inline]
    pub fn pairs(&self) -> HashSet<(&K, &V)>
    where
        V: Eq + Hash,
    {
        self.iter().collect()
    }

    /// Returns the set of all the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use chaintable::HashTable;
    /// use std::collections::HashSet;
    ///
    /// let mut hashtable: HashTable<u64, u32> = HashTable::new();
    ///
    /// hashtable.set(1, 10);
    /// hashtable.set(2, 10);
    /// assert_eq!(hashtable.keys(), HashSet::from([&1, &2]));
    /// ```
    #[inline]
    pub fn keys(&self) -> HashSet<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// Allocates `capacity` buckets and inserts every pair of `source` with [`set`](Self::set).
    ///
    /// This is the construction path shared by [`from_mapping`](Self::from_mapping),
    /// [`copy`](Self::copy) and [`FromIterator`]; `capacity` must be at least one.
    fn populate<I: IntoIterator<Item = (K, V)>>(source: I, capacity: usize) -> Self {
        let mut hashtable = Self::allocate(capacity);
        hashtable.update(source);
        hashtable
    }

    /// Returns the index of the bucket that may contain the key.
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let mut h = self.build_hasher.build_hasher();
        key.hash(&mut h);
        (h.finish() % self.buckets.len() as u64) as usize
    }

    /// Appends the pair to the bucket at `index` and resizes the table if it became too full.
    ///
    /// Returns the bucket index and chain position of the appended pair after any resize.
    fn append(&mut self, index: usize, pair: Pair<K, V>) -> (usize, usize) {
        let pos = self.buckets[index].push(pair);
        self.num_entries += 1;
        if self.load_factor() > LOAD_FACTOR_THRESHOLD {
            return self.resize((index, pos));
        }
        (index, pos)
    }

    /// Doubles the bucket array and moves every pair to its bucket under the new capacity.
    ///
    /// Keys are already unique and the load factor only decreases, so pairs are appended without
    /// any check. Returns the new location of the pair that was at `tracked`.
    fn resize(&mut self, tracked: (usize, usize)) -> (usize, usize) {
        let new_capacity = self.capacity() * 2;
        let old_buckets = replace(&mut self.buckets, Self::empty_buckets(new_capacity));
        let mut relocated = tracked;
        for (i, bucket) in old_buckets.into_iter().enumerate() {
            for (pos, pair) in bucket.into_pairs().enumerate() {
                let index = self.bucket_index(&pair.key);
                let new_pos = self.buckets[index].push(pair);
                if (i, pos) == tracked {
                    relocated = (index, new_pos);
                }
            }
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "resized hash table to {} buckets holding {} entries",
            new_capacity,
            self.num_entries
        );

        relocated
    }
}

/// Returns `true` if both sequences hold the same elements, ignoring their order.
///
/// Both sequences are collected and sorted before being compared, so duplicates must occur the
/// same number of times in each.
///
/// # Examples
///
/// ```
/// use chaintable::have_same_elements;
///
/// assert!(have_same_elements([3, 1, 2], [1, 2, 3]));
/// assert!(!have_same_elements([1, 2], [1, 2, 3]));
/// assert!(!have_same_elements([1, 1, 2], [1, 2, 2]));
/// ```
#[inline]
pub fn have_same_elements<T, I1, I2>(seq1: I1, seq2: I2) -> bool
where
    T: Ord,
    I1: IntoIterator<Item = T>,
    I2: IntoIterator<Item = T>,
{
    let mut seq1: Vec<T> = seq1.into_iter().collect();
    let mut seq2: Vec<T> = seq2.into_iter().collect();
    if seq1.len() != seq2.len() {
        return false;
    }
    seq1.sort_unstable();
    seq2.sort_unstable();
    seq1 == seq2
}

impl<K, V> Clone for HashTable<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<K, V> Debug for HashTable<K, V>
where
    K: Debug,
    V: Debug,
{
    /// Prints the [`HashTable`] as a call to [`HashTable::from_mapping`] over its entries.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashTable::from_mapping({self})")
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty [`HashTable`] with [`DEFAULT_CAPACITY`] buckets.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Display for HashTable<K, V>
where
    K: Debug,
    V: Debug,
{
    /// Prints the entries as `{key: value, ...}`; the order of entries is unspecified.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k:?}: {v:?}")?;
        }
        f.write_str("}")
    }
}

impl<K, V> Eq for HashTable<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K, V> Extend<(K, V)> for HashTable<K, V>
where
    K: Eq + Hash,
{
    #[inline]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.update(iter);
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<K, V>
where
    K: Eq + Hash,
{
    /// Collects pairs into a [`HashTable`] pre-sized to ten times the lower size hint.
    #[inline]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let into_iter = iter.into_iter();
        let capacity = into_iter.size_hint().0.saturating_mul(10).max(1);
        Self::populate(into_iter, capacity)
    }
}

impl<K, V, Q> Index<&Q> for HashTable<K, V>
where
    K: Eq + Hash,
    Q: Equivalent<K> + Hash + ?Sized,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Panics
    ///
    /// Panics if the key does not exist.
    #[inline]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found in HashTable")
    }
}

impl<'t, K, V> IntoIterator for &'t HashTable<K, V> {
    type Item = &'t K;
    type IntoIter = Keys<'t, K, V>;

    /// Iterates over the keys of the [`HashTable`].
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Keys { iter: self.iter() }
    }
}

impl<K, V> PartialEq for HashTable<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    /// Two [`HashTable`] instances are equal if they hold the same set of key-value pairs,
    /// regardless of their capacity or the layout of their buckets.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<'t, K, V> Iterator for Iter<'t, K, V> {
    type Item = (&'t K, &'t V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((&pair.key, &pair.value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'t, K, V> Iterator for Keys<'t, K, V> {
    type Item = &'t K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, _)| k)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}
