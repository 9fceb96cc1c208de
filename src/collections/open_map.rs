//! Open-addressing hash map with quadratic probing and tombstone deletion.

use std::borrow::Borrow;
use std::hash::Hash;

use ahash::RandomState;
use log::debug;

use crate::collections::prime;

/// Initial table capacity. Prime, like every capacity the table ever has.
const INITIAL_CAPACITY: usize = 11;

/// Load factor (live entries plus tombstones over capacity) that triggers a
/// rehash. Tombstones count so that a heavily-deleted table does not degrade
/// probe performance before it resizes.
const MAX_LOAD_FACTOR: f64 = 0.75;

// Fixed hasher seeds keep probe sequences and collision counts reproducible
// from run to run, matching the deterministic hashing of the table's
// collision-statistics contract.
const HASHER_SEEDS: (u64, u64, u64, u64) = (
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
);

/// A single table slot: a key-value pair plus a deletion flag.
///
/// A deleted entry (tombstone) keeps its key and value but is logically
/// absent; it occupies the slot only to preserve probe-sequence continuity
/// for other keys that share a probe chain.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    deleted: bool,
}

/// Outcome of a probe scan for a key.
enum Probe {
    /// A live entry with the target key is at this index.
    Found(usize),
    /// The key is absent; this index is available for insertion (either an
    /// empty slot or the first tombstone encountered on the probe chain).
    Vacant(usize),
    /// The probe sequence was exhausted without finding the key or a free
    /// slot. Recoverable: the caller rehashes and retries.
    Full,
}

/// A hash map using open addressing with quadratic probing.
///
/// Collisions are resolved in-table: a colliding key probes
/// `initial + i^2 (mod capacity)` for `i = 1, 2, 3, ...` until it finds an
/// empty slot or its own entry. Removal leaves a tombstone rather than
/// emptying the slot. Capacity is always prime; when the load factor
/// (including tombstones) reaches 0.75, the table grows to the smallest
/// prime at least twice-plus-one the old capacity and reinserts every live
/// entry, dropping tombstones.
///
/// The map additionally counts probe collisions during insertion, exposed
/// via [`collision_count`](OpenHashMap::collision_count).
///
/// # Examples
///
/// ```
/// use orthus::collections::OpenHashMap;
///
/// let mut map = OpenHashMap::new();
/// map.insert("word", 3);
/// assert_eq!(map.get("word"), Some(&3));
/// map.remove("word");
/// assert_eq!(map.get("word"), None);
/// ```
#[derive(Debug, Clone)]
pub struct OpenHashMap<K, V> {
    table: Vec<Option<Entry<K, V>>>,
    size: usize,
    deleted: usize,
    collisions: u64,
    hasher: RandomState,
}

impl<K: Hash + Eq, V> OpenHashMap<K, V> {
    /// Create an empty map with the default initial capacity (11).
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty map whose capacity is the smallest prime that is at
    /// least `capacity` (and at least 3).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = prime::next_prime(capacity.max(3));
        let mut table = Vec::with_capacity(capacity);
        table.resize_with(capacity, || None);

        OpenHashMap {
            table,
            size: 0,
            deleted: 0,
            collisions: 0,
            hasher: RandomState::with_seeds(
                HASHER_SEEDS.0,
                HASHER_SEEDS.1,
                HASHER_SEEDS.2,
                HASHER_SEEDS.3,
            ),
        }
    }

    /// Insert a key-value pair, or overwrite the value of an existing key.
    ///
    /// If the key probes into a tombstoned slot, the slot is reactivated.
    /// If the probe sequence is exhausted (table full for this key), the
    /// table rehashes and the insertion is retried against the fresh table.
    /// After any insertion that pushes the load factor to 0.75 or above,
    /// the table rehashes before returning.
    pub fn insert(&mut self, key: K, value: V) {
        self.place(key, value, true);
    }

    /// Get a reference to the value for `key`, if a live entry matches.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.locate(key).0 {
            Probe::Found(index) => self.table[index].as_ref().map(|entry| &entry.value),
            _ => None,
        }
    }

    /// Check whether a live entry matches `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        matches!(self.locate(key).0, Probe::Found(_))
    }

    /// Remove the entry for `key` by marking its slot as a tombstone.
    /// No-op if the key is absent.
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Probe::Found(index) = self.locate(key).0
            && let Some(entry) = &mut self.table[index]
        {
            entry.deleted = true;
            self.deleted += 1;
            self.size -= 1;
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.size
    }

    /// True if the map holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current table capacity. Always prime.
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Number of tombstoned slots currently occupying the table.
    pub fn tombstone_count(&self) -> usize {
        self.deleted
    }

    /// Cumulative number of extra probe steps taken during insertions.
    ///
    /// Only user-visible insertions count; probes during lookups, removals,
    /// and rehash-triggered reinsertions do not.
    pub fn collision_count(&self) -> u64 {
        self.collisions
    }

    /// Iterate over the live keys in table-slot order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            slots: self.table.iter(),
        }
    }

    /// Insert `key`/`value`, optionally charging probe steps to the
    /// collision counter. Rehash-triggered reinsertions pass
    /// `count_collisions = false` so they stay invisible to the statistic.
    fn place(&mut self, key: K, value: V, count_collisions: bool) {
        loop {
            let (probe, steps) = self.locate(&key);
            if count_collisions {
                self.collisions += steps;
            }

            match probe {
                Probe::Found(index) => {
                    if let Some(entry) = &mut self.table[index] {
                        entry.value = value;
                    }
                    return;
                }
                Probe::Vacant(index) => {
                    // A vacant index pointing at an existing entry means we
                    // are reusing a tombstone.
                    let reused_tombstone = self.table[index].is_some();
                    self.table[index] = Some(Entry {
                        key,
                        value,
                        deleted: false,
                    });
                    self.size += 1;
                    if reused_tombstone {
                        self.deleted -= 1;
                    }

                    if self.load_factor() >= MAX_LOAD_FACTOR {
                        self.rehash();
                    }
                    return;
                }
                Probe::Full => {
                    // Quadratic probing over a prime capacity does not
                    // guarantee visiting every slot, so an exhausted probe
                    // sequence is treated as a resize trigger rather than
                    // an error, and the placement is retried.
                    self.rehash();
                }
            }
        }
    }

    /// Probe the table for `key`.
    ///
    /// Visits `initial`, then `(initial + i^2) mod capacity` for
    /// `i = 1, 2, 3, ...`. An empty slot ends the scan as `Vacant`; a live
    /// matching entry ends it as `Found`; tombstones are skipped but still
    /// cost a probe step (the first one seen becomes the insertion target
    /// if the key turns out to be absent). Once `i` exceeds the capacity
    /// the scan gives up with `Full`.
    ///
    /// Returns the probe outcome and the number of extra probe steps taken.
    fn locate<Q>(&self, key: &Q) -> (Probe, u64)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.table.len();
        let initial = (self.hasher.hash_one(key) % capacity as u64) as usize;

        let mut index = initial;
        let mut first_tombstone = None;
        let mut steps = 0u64;
        let mut probe = 1usize;

        loop {
            match &self.table[index] {
                None => {
                    return (Probe::Vacant(first_tombstone.unwrap_or(index)), steps);
                }
                Some(entry) if entry.deleted => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Some(entry) if entry.key.borrow() == key => {
                    return (Probe::Found(index), steps);
                }
                Some(_) => {}
            }

            if probe > capacity {
                return (Probe::Full, steps);
            }
            index = (initial + probe * probe) % capacity;
            steps += 1;
            probe += 1;
        }
    }

    /// Grow the table to the smallest prime at least `2 * capacity + 1` and
    /// reinsert every live entry. Tombstones are dropped, so the deleted
    /// count returns to zero. The old array is discarded wholesale.
    fn rehash(&mut self) {
        let old_capacity = self.table.len();
        let new_capacity = prime::next_prime(old_capacity * 2 + 1);

        let mut fresh = Vec::with_capacity(new_capacity);
        fresh.resize_with(new_capacity, || None);
        let old_table = std::mem::replace(&mut self.table, fresh);

        self.size = 0;
        self.deleted = 0;

        for slot in old_table {
            if let Some(entry) = slot
                && !entry.deleted
            {
                self.place(entry.key, entry.value, false);
            }
        }

        debug!(
            "rehashed table: {} -> {} slots, {} live entries",
            old_capacity, new_capacity, self.size
        );
    }

    /// Occupancy ratio counting both live entries and tombstones.
    fn load_factor(&self) -> f64 {
        (self.size + self.deleted) as f64 / self.table.len() as f64
    }
}

impl<K: Hash + Eq, V> Default for OpenHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the live keys of an [`OpenHashMap`], in slot order.
///
/// Empty and tombstoned slots are skipped. The iterator is finite and
/// non-restartable; once it returns `None` it is exhausted.
pub struct Keys<'a, K, V> {
    slots: std::slice::Iter<'a, Option<Entry<K, V>>>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match slot {
            Some(entry) if !entry.deleted => Some(&entry.key),
            _ => None,
        })
    }
}
